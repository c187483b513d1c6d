//! Feature schema of the credit model
//!
//! `FEATURE_LAYOUT` is the column order the pipeline was fitted on. Any
//! edit to it (new column, reordering, removal) bumps `FEATURE_VERSION`.
//! Artifacts carry the version and a CRC32 of the names; the model store
//! refuses an artifact whose layout differs from the compiled one.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FEATURE_VERSION: u8 = 1;

/// Column names of the UCI "default of credit card clients" dataset,
/// in the exact order the model was trained on
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Credit line & demographics (0-4) ===
    "LIMIT_BAL",  // 0: Amount of given credit (NT dollar)
    "SEX",        // 1: 1 = male, 2 = female
    "EDUCATION",  // 2: 1 = graduate school, 2 = university, 3 = high school, 4 = others
    "MARRIAGE",   // 3: 1 = married, 2 = single, 3 = others
    "AGE",        // 4: Age in years

    // === Repayment status, Sept back to April (5-10) ===
    "PAY_0",
    "PAY_2",
    "PAY_3",
    "PAY_4",
    "PAY_5",
    "PAY_6",

    // === Bill statement amounts (11-16) ===
    "BILL_AMT1",
    "BILL_AMT2",
    "BILL_AMT3",
    "BILL_AMT4",
    "BILL_AMT5",
    "BILL_AMT6",

    // === Previous payment amounts (17-22) ===
    "PAY_AMT1",
    "PAY_AMT2",
    "PAY_AMT3",
    "PAY_AMT4",
    "PAY_AMT5",
    "PAY_AMT6",
];

pub const FEATURE_COUNT: usize = FEATURE_LAYOUT.len();

/// CRC32 of the version byte followed by each NUL-terminated name
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    FEATURE_LAYOUT.iter().for_each(|name| {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    });
    hasher.finalize()
}

/// Layout fingerprint embedded in every artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutMismatch {
    #[error("layout version {actual} does not match compiled version {expected}")]
    Version { expected: u8, actual: u8 },

    #[error("layout hash {actual:08x} does not match compiled hash {expected:08x}")]
    Hash { expected: u32, actual: u32 },

    #[error("layout declares {actual} features, model expects {expected}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("feature {index} is {actual:?}, expected {expected:?}")]
    FeatureName {
        index: usize,
        expected: &'static str,
        actual: String,
    },
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Compare against the compiled-in layout, first difference wins
    pub fn validate(&self) -> Result<(), LayoutMismatch> {
        if self.version != FEATURE_VERSION {
            return Err(LayoutMismatch::Version {
                expected: FEATURE_VERSION,
                actual: self.version,
            });
        }

        let expected_hash = layout_hash();
        if self.hash != expected_hash {
            return Err(LayoutMismatch::Hash {
                expected: expected_hash,
                actual: self.hash,
            });
        }

        for count in [self.feature_count, self.feature_names.len()] {
            if count != FEATURE_COUNT {
                return Err(LayoutMismatch::FeatureCount {
                    expected: FEATURE_COUNT,
                    actual: count,
                });
            }
        }

        match FEATURE_LAYOUT
            .iter()
            .zip(&self.feature_names)
            .position(|(expected, actual)| expected != actual)
        {
            Some(index) => Err(LayoutMismatch::FeatureName {
                index,
                expected: FEATURE_LAYOUT[index],
                actual: self.feature_names[index].clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&candidate| candidate == name)
}

pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_three_columns() {
        assert_eq!(FEATURE_COUNT, 23);
        assert_eq!(FEATURE_LAYOUT.first(), Some(&"LIMIT_BAL"));
        assert_eq!(FEATURE_LAYOUT.last(), Some(&"PAY_AMT6"));
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
        assert_eq!(LayoutInfo::current().hash, layout_hash());
    }

    #[test]
    fn test_current_layout_validates() {
        assert_eq!(LayoutInfo::current().validate(), Ok(()));
    }

    #[test]
    fn test_mismatches_are_reported() {
        let mut info = LayoutInfo::current();
        info.version += 1;
        assert!(matches!(info.validate(), Err(LayoutMismatch::Version { .. })));

        let mut info = LayoutInfo::current();
        info.hash = info.hash.wrapping_add(1);
        assert!(matches!(info.validate(), Err(LayoutMismatch::Hash { .. })));

        let mut info = LayoutInfo::current();
        info.feature_names.pop();
        assert!(matches!(
            info.validate(),
            Err(LayoutMismatch::FeatureCount { actual: 22, .. })
        ));

        let mut info = LayoutInfo::current();
        info.feature_names.swap(5, 6);
        assert!(matches!(
            info.validate(),
            Err(LayoutMismatch::FeatureName { index: 5, .. })
        ));
    }

    #[test]
    fn test_lookup_by_name_and_index() {
        assert_eq!(feature_index("LIMIT_BAL"), Some(0));
        assert_eq!(feature_index("PAY_0"), Some(5));
        assert_eq!(feature_index("BILL_AMT1"), Some(11));
        assert_eq!(feature_index("ID"), None);
        assert_eq!(feature_name(22), Some("PAY_AMT6"));
        assert_eq!(feature_name(23), None);
    }
}
