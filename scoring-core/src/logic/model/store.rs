//! Model Store - loads the pipeline artifact once at startup
//!
//! The store is built once and then shared read-only (`Arc<ModelStore>`)
//! by every request. There is no reload: a bad artifact is a fatal
//! startup error, not a per-request condition.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ndarray::{Array2, ArrayView2};
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::artifact::ModelArtifact;
use super::pipeline::Pipeline;
use crate::error::{ScoringError, ScoringResult};
use crate::logic::features::LayoutInfo;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata exposed to the API layer
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub checksum: String,
    pub format_version: u32,
    pub layout: LayoutInfo,
    pub threshold: f64,
    pub accuracy: f64,
    pub train_rows: usize,
    pub test_rows: usize,
    pub reference_rows: usize,
    pub trained_at: DateTime<Utc>,
    pub loaded_at: DateTime<Utc>,
}

/// Snapshot of inference counters
#[derive(Debug, Clone, Serialize)]
pub struct InferenceStats {
    pub prediction_count: u64,
    pub explanation_count: u64,
    pub avg_prediction_latency_us: f64,
    pub avg_explanation_latency_us: f64,
}

#[derive(Debug, Default)]
struct Counters {
    predictions: AtomicU64,
    prediction_latency_us: AtomicU64,
    explanations: AtomicU64,
    explanation_latency_us: AtomicU64,
}

fn average(sum: u64, count: u64) -> f64 {
    if count > 0 {
        sum as f64 / count as f64
    } else {
        0.0
    }
}

// ============================================================================
// STORE
// ============================================================================

#[derive(Debug)]
pub struct ModelStore {
    pipeline: Pipeline,
    reference: Array2<f64>,
    metadata: ModelMetadata,
    counters: Counters,
}

impl ModelStore {
    /// Load and validate the artifact at `path`
    pub fn load(path: impl AsRef<Path>) -> ScoringResult<Self> {
        let path = path.as_ref();
        log::info!("Loading model artifact from: {}", path.display());

        if !path.exists() {
            return Err(ScoringError::ModelLoadFailure(format!(
                "Model not found: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            ScoringError::ModelLoadFailure(format!("cannot read {}: {}", path.display(), e))
        })?;
        let checksum = hex::encode(Sha256::digest(&bytes));

        let artifact = ModelArtifact::from_json(&bytes)?;
        let store = Self::build(artifact, path.display().to_string(), checksum)?;

        log::info!(
            "Model loaded: {} features, accuracy {:.4}, {} reference rows (sha256 {})",
            store.feature_count(),
            store.metadata.accuracy,
            store.metadata.reference_rows,
            &store.metadata.checksum[..12]
        );

        Ok(store)
    }

    /// Build a store from an in-memory artifact
    pub fn from_artifact(artifact: ModelArtifact) -> ScoringResult<Self> {
        let checksum = serde_json::to_vec(&artifact)
            .map(|bytes| hex::encode(Sha256::digest(&bytes)))
            .map_err(|e| ScoringError::ModelLoadFailure(e.to_string()))?;
        Self::build(artifact, "<memory>".to_string(), checksum)
    }

    fn build(artifact: ModelArtifact, model_path: String, checksum: String) -> ScoringResult<Self> {
        artifact.validate()?;

        let pipeline = Pipeline::new(&artifact.scaler, &artifact.classifier, artifact.threshold)?;
        if pipeline.n_features() != artifact.layout.feature_count {
            return Err(ScoringError::ModelLoadFailure(format!(
                "classifier has {} coefficients, layout has {} features",
                pipeline.n_features(),
                artifact.layout.feature_count
            )));
        }

        let n_features = pipeline.n_features();
        let rows = artifact.reference.len();
        let flat: Vec<f64> = artifact.reference.into_iter().flatten().collect();
        let reference = Array2::from_shape_vec((rows, n_features), flat)
            .map_err(|e| ScoringError::ModelLoadFailure(format!("reference sample: {}", e)))?;

        let metadata = ModelMetadata {
            model_path,
            checksum,
            format_version: artifact.format_version,
            layout: artifact.layout,
            threshold: artifact.threshold,
            accuracy: artifact.metrics.accuracy,
            train_rows: artifact.metrics.train_rows,
            test_rows: artifact.metrics.test_rows,
            reference_rows: rows,
            trained_at: artifact.metrics.trained_at,
            loaded_at: Utc::now(),
        };

        Ok(Self {
            pipeline,
            reference,
            metadata,
            counters: Counters::default(),
        })
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Raw reference rows, one per row of the matrix
    pub fn reference(&self) -> ArrayView2<'_, f64> {
        self.reference.view()
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn feature_count(&self) -> usize {
        self.pipeline.n_features()
    }

    pub(crate) fn record_prediction(&self, latency_us: u64) {
        self.counters.predictions.fetch_add(1, Ordering::Relaxed);
        self.counters
            .prediction_latency_us
            .fetch_add(latency_us, Ordering::Relaxed);
    }

    pub(crate) fn record_explanation(&self, latency_us: u64) {
        self.counters.explanations.fetch_add(1, Ordering::Relaxed);
        self.counters
            .explanation_latency_us
            .fetch_add(latency_us, Ordering::Relaxed);
    }

    pub fn stats(&self) -> InferenceStats {
        let predictions = self.counters.predictions.load(Ordering::Relaxed);
        let explanations = self.counters.explanations.load(Ordering::Relaxed);

        InferenceStats {
            prediction_count: predictions,
            explanation_count: explanations,
            avg_prediction_latency_us: average(
                self.counters.prediction_latency_us.load(Ordering::Relaxed),
                predictions,
            ),
            avg_explanation_latency_us: average(
                self.counters.explanation_latency_us.load(Ordering::Relaxed),
                explanations,
            ),
        }
    }
}
