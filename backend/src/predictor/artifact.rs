//! Linear price model exported as JSON.
//!
//! The trained pipeline is a linear regressor over scaled numeric columns,
//! one-hot categorical columns and a bag of title words. The export keeps
//! only what inference needs:
//!
//! ```json
//! {
//!   "intercept": 120.0,
//!   "numeric": {
//!     "sold":         {"coef": 0.5},
//!     "sizeFeat":     {"coef": 2.0, "mean": 60.0, "scale": 20.0, "impute": 60.0},
//!     "discount_pct": {"coef": -80.0}
//!   },
//!   "material": {"levels": {"wood": 40.0}, "handle_unknown": "error"},
//!   "color":    {"levels": {"white": 5.0}, "handle_unknown": "ignore"},
//!   "title_terms": {"sofa": 150.0}
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use common::model::feature_record::FeatureRecord;
use common::model::listing::Vocabulary;
use serde::Deserialize;

use super::{ModelInferenceError, PricePredictor};

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactModel {
    pub intercept: f64,
    pub numeric: NumericTerms,
    pub material: CategoricalTerm,
    pub color: CategoricalTerm,
    #[serde(default)]
    pub title_terms: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumericTerms {
    pub sold: NumericTerm,
    #[serde(rename = "sizeFeat")]
    pub size_feat: NumericTerm,
    pub discount_pct: NumericTerm,
}

/// `coef * (x - mean) / scale`, with `impute` standing in for a missing `x`.
#[derive(Debug, Clone, Deserialize)]
pub struct NumericTerm {
    pub coef: f64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
    #[serde(default)]
    pub impute: Option<f64>,
}

fn unit_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoricalTerm {
    pub levels: HashMap<String, f64>,
    #[serde(default)]
    pub handle_unknown: UnknownPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    #[default]
    Error,
    Ignore,
}

/// A parsed artifact together with the fingerprint of the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedArtifact {
    pub model: ArtifactModel,
    pub md5: String,
}

impl ArtifactModel {
    pub fn load(path: &Path) -> Result<LoadedArtifact, String> {
        let bytes = fs::read(path)
            .map_err(|e| format!("cannot read model artifact {}: {}", path.display(), e))?;
        let md5 = format!("{:x}", md5::compute(&bytes));
        let model = Self::from_slice(&bytes)
            .map_err(|e| format!("invalid model artifact {}: {}", path.display(), e))?;
        Ok(LoadedArtifact { model, md5 })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        let model: ArtifactModel = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), String> {
        if !self.intercept.is_finite() {
            return Err("intercept is not finite".to_string());
        }
        for (name, term) in [
            ("sold", &self.numeric.sold),
            ("sizeFeat", &self.numeric.size_feat),
            ("discount_pct", &self.numeric.discount_pct),
        ] {
            term.validate(name)?;
        }
        for (name, term) in [("material", &self.material), ("color", &self.color)] {
            if let Some((level, _)) = term.levels.iter().find(|(_, w)| !w.is_finite()) {
                return Err(format!("{} level '{}' has a non-finite weight", name, level));
            }
        }
        if let Some((word, _)) = self.title_terms.iter().find(|(_, w)| !w.is_finite()) {
            return Err(format!("title term '{}' has a non-finite weight", word));
        }
        Ok(())
    }

    fn title_contribution(&self, title: &str) -> f64 {
        if self.title_terms.is_empty() {
            return 0.0;
        }
        title
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .filter_map(|token| self.title_terms.get(token))
            .sum()
    }
}

impl NumericTerm {
    fn validate(&self, name: &str) -> Result<(), String> {
        if self.scale == 0.0 {
            return Err(format!("{} has a zero scale", name));
        }
        let finite = self.coef.is_finite()
            && self.mean.is_finite()
            && self.scale.is_finite()
            && self.impute.map_or(true, f64::is_finite);
        if !finite {
            return Err(format!("{} has a non-finite parameter", name));
        }
        Ok(())
    }

    fn contribution(&self, feature: &'static str, value: Option<f64>) -> Result<f64, ModelInferenceError> {
        let x = value
            .or(self.impute)
            .ok_or(ModelInferenceError::MissingValue(feature))?;
        Ok(self.coef * (x - self.mean) / self.scale)
    }
}

impl CategoricalTerm {
    fn contribution(&self, feature: &'static str, level: &str) -> Result<f64, ModelInferenceError> {
        match (self.levels.get(level), self.handle_unknown) {
            (Some(weight), _) => Ok(*weight),
            (None, UnknownPolicy::Ignore) => Ok(0.0),
            (None, UnknownPolicy::Error) => Err(ModelInferenceError::UnknownCategory {
                feature,
                value: level.to_string(),
            }),
        }
    }
}

impl PricePredictor for ArtifactModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelInferenceError> {
        let estimate = self.intercept
            + self.numeric.sold.contribution("sold", Some(f64::from(record.sold)))?
            + self
                .numeric
                .size_feat
                .contribution("sizeFeat", record.size_feat.inches())?
            + self
                .numeric
                .discount_pct
                .contribution("discount_pct", Some(record.discount_fraction))?
            + self.material.contribution("material", record.material.as_str())?
            + self.color.contribution("color", record.color.as_str())?
            + self.title_contribution(&record.product_title);

        if !estimate.is_finite() {
            return Err(ModelInferenceError::NonFinite);
        }
        Ok(estimate)
    }
}
