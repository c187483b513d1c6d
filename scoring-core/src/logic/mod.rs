//! Logic Module - inference, explanation and training engines
//!
//! - `features/` - feature layout and validated input vectors
//! - `model/` - pipeline, model store, prediction
//! - `explain/` - per-feature attribution
//! - `dataset/` - training data loading and splitting
//! - `training/` - scaler and logistic regression fitting

pub mod dataset;
pub mod explain;
pub mod features;
pub mod model;
pub mod training;
