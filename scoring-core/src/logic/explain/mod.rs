//! Explain Module - per-feature attribution for single predictions
//!
//! Two strategies share the `Explainer` trait:
//! - `linear`: exact, closed-form (default)
//! - `sampling`: model-agnostic Monte Carlo Shapley estimate
//!
//! Contributions are expressed in log-odds of default.

pub mod engine;
pub mod linear;
pub mod sampling;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{build_explainer, explain, Explainer};
pub use linear::LinearExplainer;
pub use sampling::SamplingExplainer;
pub use types::{Contribution, ExplainStrategy, Explanation};
