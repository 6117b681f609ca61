//! Session history of successful predictions.

use serde::{Deserialize, Serialize};

use crate::model::listing::{Color, FurnitureType, Material};

/// One row of the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEntry {
    pub prediction_id: String,
    pub title: String,
    pub furniture_type: FurnitureType,
    pub sold: u32,
    pub material: Material,
    pub color: Color,
    /// Percentage as entered, not the fraction sent to the model.
    pub discount_pct: f64,
    pub delivery_fee: f64,
    /// Base estimate plus delivery fee, rounded to cents.
    pub predicted_price: f64,
}

/// Append-only list of predictions made during one session.
///
/// The owner (the form component) creates it when the page loads and drops it
/// when the page goes away. Entries can only be added through
/// `session::record_outcome`, so a failed prediction never lands here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionHistory {
    entries: Vec<PredictionEntry>,
}

impl PredictionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: PredictionEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[PredictionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&PredictionEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a PredictionHistory {
    type Item = &'a PredictionEntry;
    type IntoIter = std::slice::Iter<'a, PredictionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
