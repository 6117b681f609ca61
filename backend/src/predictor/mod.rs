//! # Price Predictor
//!
//! The model is an opaque collaborator behind the `PricePredictor` trait: it
//! takes one `FeatureRecord` and returns a base price estimate. The artifact is
//! loaded once in `main` and shared read-only by every worker through
//! `AppState`.
//!
//! ## Sub-modules:
//! - `artifact`: the JSON linear-pipeline export read from disk.

mod artifact;

pub use artifact::ArtifactModel;

use common::model::feature_record::FeatureRecord;
use thiserror::Error;

/// Why the model could not produce an estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelInferenceError {
    #[error("unseen category '{value}' for feature '{feature}'")]
    UnknownCategory { feature: &'static str, value: String },
    #[error("feature '{0}' is missing and the model has no imputation value for it")]
    MissingValue(&'static str),
    #[error("model produced a non-finite estimate")]
    NonFinite,
    #[error("model artifact unavailable: {0}")]
    Unavailable(String),
}

pub trait PricePredictor: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError>;
}

/// Stands in for a model that failed to load, so the server still starts and
/// every prediction reports why.
#[derive(Debug, Clone)]
pub struct UnavailablePredictor {
    reason: String,
}

impl UnavailablePredictor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PricePredictor for UnavailablePredictor {
    fn predict(&self, _record: &FeatureRecord) -> Result<f64, ModelInferenceError> {
        Err(ModelInferenceError::Unavailable(self.reason.clone()))
    }
}
