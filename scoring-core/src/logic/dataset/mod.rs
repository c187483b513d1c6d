//! Dataset Module - training data for the offline trainer
//!
//! Reads the UCI "default of credit card clients" table from the published
//! spreadsheet or a CSV export (local file or http(s) URL) into a dense feature matrix in layout order plus a
//! 0/1 target vector.

pub mod loader;
pub mod split;


use ndarray::{Array1, Array2};

pub use loader::{is_spreadsheet, load_csv, load_source, load_spreadsheet};
pub use split::stratified_split;

/// Column names accepted for the target
pub const TARGET_COLUMNS: &[&str] = &[
    "default payment next month",
    "default.payment.next.month",
    "default",
];

/// Identifier column, dropped on load
pub const ID_COLUMN: &str = "ID";

#[derive(Debug, Clone)]
pub struct Dataset {
    /// One row per client, columns in `FEATURE_LAYOUT` order
    pub features: Array2<f64>,
    /// 1.0 = defaulted next month
    pub target: Array1<f64>,
}

impl Dataset {
    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    /// (negatives, positives)
    pub fn class_counts(&self) -> (usize, usize) {
        let positives = self.target.iter().filter(|&&y| y > 0.5).count();
        (self.n_rows() - positives, positives)
    }
}
