use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Attribution method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplainStrategy {
    /// Closed-form attribution for the linear classifier
    Linear,
    /// Monte Carlo permutation Shapley values against the reference sample
    Sampling,
}

impl fmt::Display for ExplainStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainStrategy::Linear => write!(f, "linear"),
            ExplainStrategy::Sampling => write!(f, "sampling"),
        }
    }
}

impl FromStr for ExplainStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(ExplainStrategy::Linear),
            "sampling" => Ok(ExplainStrategy::Sampling),
            other => Err(format!("unknown explain strategy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature_index: usize,
    pub feature_name: String,
    /// Signed push on the log-odds of default, relative to the baseline
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub strategy: ExplainStrategy,
    /// Model log-odds at the baseline
    pub base_value: f64,
    pub contributions: Vec<Contribution>,
}

impl Explanation {
    /// Features sorted by absolute contribution, largest first
    pub fn top_features(&self, k: usize) -> Vec<&Contribution> {
        let mut sorted: Vec<&Contribution> = self.contributions.iter().collect();
        sorted.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
        sorted.truncate(k);
        sorted
    }
}
