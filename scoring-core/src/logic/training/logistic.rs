//! L2-regularized logistic regression
//!
//! Fitting is delegated to `linfa-logistic` (L-BFGS). The penalty is
//! expressed as `C`, the inverse regularization strength, and handed to
//! linfa as `alpha = 1 / C`. The intercept is not penalized.

use linfa::traits::Fit;
use linfa::Dataset;
use linfa_logistic::LogisticRegression;
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::constants::DEFAULT_INVERSE_REGULARIZATION;
use crate::error::{ScoringError, ScoringResult};
use crate::logic::model::LogisticParams;

#[derive(Debug, Clone)]
pub struct LogisticOptions {
    /// Inverse regularization strength
    pub c: f64,
    pub max_iter: u64,
    pub gradient_tolerance: f64,
}

impl Default for LogisticOptions {
    fn default() -> Self {
        Self {
            c: DEFAULT_INVERSE_REGULARIZATION,
            max_iter: 100,
            gradient_tolerance: 1e-4,
        }
    }
}

/// Fit on already scaled features `z` (rows) and 0/1 targets `y`
pub fn fit_logistic(
    z: ArrayView2<f64>,
    y: ArrayView1<f64>,
    options: &LogisticOptions,
) -> ScoringResult<LogisticParams> {
    if z.nrows() == 0 || z.nrows() != y.len() {
        return Err(ScoringError::Dataset(format!(
            "cannot fit {} rows against {} targets",
            z.nrows(),
            y.len()
        )));
    }
    if !(options.c > 0.0 && options.c.is_finite()) {
        return Err(ScoringError::NumericComputation(format!(
            "inverse regularization must be positive, got {}",
            options.c
        )));
    }

    let targets: Array1<usize> = y.mapv(|label| usize::from(label > 0.5));
    let dataset = Dataset::new(z.to_owned(), targets);

    // Classes are ordered, so label 1 (default) is the positive class
    let model = LogisticRegression::default()
        .alpha(1.0 / options.c)
        .max_iterations(options.max_iter)
        .gradient_tolerance(options.gradient_tolerance)
        .fit(&dataset)
        .map_err(|e| {
            ScoringError::NumericComputation(format!("logistic regression fit failed: {}", e))
        })?;

    let params = LogisticParams {
        coefficients: model.params().to_vec(),
        intercept: model.intercept(),
    };

    if !params.coefficients.iter().all(|w| w.is_finite()) || !params.intercept.is_finite() {
        return Err(ScoringError::NumericComputation(
            "logistic regression diverged".to_string(),
        ));
    }

    Ok(params)
}
