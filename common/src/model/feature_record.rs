//! The record handed to the price model.
//!
//! Field names on the wire are exactly the column names the model was trained
//! on: `productTitle`, `sold`, `sizeFeat`, `material`, `color`, `discount_pct`.

use serde::{Deserialize, Serialize};

use crate::model::listing::{Color, Material};

/// Size derived from the title, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum SizeFeature {
    Inches(f64),
    Missing,
}

impl SizeFeature {
    pub fn inches(self) -> Option<f64> {
        match self {
            SizeFeature::Inches(v) => Some(v),
            SizeFeature::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, SizeFeature::Missing)
    }
}

impl From<Option<f64>> for SizeFeature {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => SizeFeature::Inches(v),
            _ => SizeFeature::Missing,
        }
    }
}

impl From<SizeFeature> for Option<f64> {
    fn from(value: SizeFeature) -> Self {
        value.inches()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "productTitle")]
    pub product_title: String,
    pub sold: u32,
    #[serde(rename = "sizeFeat")]
    pub size_feat: SizeFeature,
    pub material: Material,
    pub color: Color,
    /// Discount as a fraction in `[0, 1]`.
    #[serde(rename = "discount_pct")]
    pub discount_fraction: f64,
}
