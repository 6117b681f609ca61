use serde::{Deserialize, Serialize};

use crate::model::feature_record::FeatureRecord;

/// Body of a successful `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction_id: String,
    /// The record that was fed to the model.
    pub features: FeatureRecord,
    /// Raw model output, before the delivery fee.
    pub base_price: f64,
    /// `base_price + delivery_fee`, rounded to cents.
    pub predicted_price: f64,
}

/// Body of `GET /api/model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub path: String,
    /// MD5 of the artifact file, when it could be read.
    pub md5: Option<String>,
    pub loaded: bool,
    pub error: Option<String>,
}
