//! Model Artifact - serialized pipeline written by the trainer
//!
//! Stored as pretty-printed JSON so the parameters stay inspectable.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ARTIFACT_FORMAT_VERSION, DECISION_THRESHOLD};
use crate::error::{ScoringError, ScoringResult};
use crate::logic::features::LayoutInfo;

/// Per-feature standardization parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear classifier parameters (log-odds space)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Evaluation summary recorded at training time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    pub accuracy: f64,
    pub train_rows: usize,
    pub test_rows: usize,
    pub trained_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub layout: LayoutInfo,
    pub scaler: ScalerParams,
    pub classifier: LogisticParams,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Raw training rows used as attribution baseline
    #[serde(default)]
    pub reference: Vec<Vec<f64>>,
    pub metrics: TrainingMetrics,
}

fn default_threshold() -> f64 {
    DECISION_THRESHOLD
}

impl ModelArtifact {
    pub fn new(
        scaler: ScalerParams,
        classifier: LogisticParams,
        reference: Vec<Vec<f64>>,
        metrics: TrainingMetrics,
    ) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            layout: LayoutInfo::current(),
            scaler,
            classifier,
            threshold: DECISION_THRESHOLD,
            reference,
            metrics,
        }
    }

    pub fn from_json(bytes: &[u8]) -> ScoringResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| ScoringError::ModelLoadFailure(format!("corrupt artifact: {}", e)))
    }

    /// Write the artifact, creating parent directories as needed
    pub fn save(&self, path: &Path) -> ScoringResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| ScoringError::Io(e.into()))?;
        writer.flush()?;
        Ok(())
    }

    /// Compatibility checks that do not need the built pipeline
    pub fn validate(&self) -> ScoringResult<()> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ScoringError::ModelLoadFailure(format!(
                "unsupported artifact format v{} (expected v{})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }

        self.layout
            .validate()
            .map_err(|e| ScoringError::ModelLoadFailure(e.to_string()))?;

        let n = self.layout.feature_count;
        for (i, row) in self.reference.iter().enumerate() {
            if row.len() != n {
                return Err(ScoringError::ModelLoadFailure(format!(
                    "reference row {} has {} values, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if !row.iter().all(|v| v.is_finite()) {
                return Err(ScoringError::ModelLoadFailure(format!(
                    "reference row {} has non-finite values",
                    i
                )));
            }
        }

        Ok(())
    }
}
