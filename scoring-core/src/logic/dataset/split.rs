use ndarray::Axis;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Dataset;
use crate::error::{ScoringError, ScoringResult};

/// Split into (train, test) keeping the default rate equal in both parts.
///
/// Each class is shuffled with a seeded RNG and `test_fraction` of it
/// (rounded) goes to the test side.
pub fn stratified_split(
    dataset: &Dataset,
    test_fraction: f64,
    seed: u64,
) -> ScoringResult<(Dataset, Dataset)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ScoringError::Dataset(format!(
            "test fraction must be in (0, 1), got {}",
            test_fraction
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_idx = Vec::new();
    let mut test_idx = Vec::new();

    for class in [0.0, 1.0] {
        let mut members: Vec<usize> = dataset
            .target
            .iter()
            .enumerate()
            .filter(|(_, &y)| y == class)
            .map(|(i, _)| i)
            .collect();

        if members.len() < 2 {
            return Err(ScoringError::Dataset(format!(
                "class {} has {} rows, need at least 2 to split",
                class,
                members.len()
            )));
        }

        members.shuffle(&mut rng);
        let n_test = ((members.len() as f64 * test_fraction).round() as usize)
            .clamp(1, members.len() - 1);

        test_idx.extend_from_slice(&members[..n_test]);
        train_idx.extend_from_slice(&members[n_test..]);
    }

    train_idx.shuffle(&mut rng);
    test_idx.shuffle(&mut rng);

    let subset = |idx: &[usize]| Dataset {
        features: dataset.features.select(Axis(0), idx),
        target: dataset.target.select(Axis(0), idx),
    };

    Ok((subset(&train_idx), subset(&test_idx)))
}
