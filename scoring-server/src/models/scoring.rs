//! Request/response bodies for `/predict` and `/explain`

use credit_scoring_core::{Prediction, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both scoring endpoints: one raw feature vector in layout order
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeaturesRequest {
    #[validate(length(equal = 23, message = "features must contain exactly 23 values"))]
    pub features: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// 0 = no default, 1 = default
    pub prediction: u8,
    /// Probability of the predicted class
    pub probability: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction: prediction.label,
            probability: prediction.probability,
        }
    }
}

// The length attribute above hardcodes the layout width
const _: () = assert!(FEATURE_COUNT == 23);
