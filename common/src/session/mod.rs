//! Turning prediction outcomes into history rows.
//!
//! The history is owned by whoever holds the session (the form component) and
//! is passed in explicitly; nothing here keeps state of its own.

use crate::model::listing::ListingInput;
use crate::model::prediction::{PredictionEntry, PredictionHistory};
use crate::requests::PredictResponse;

/// Rounds to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Price shown to the user: model estimate plus delivery, rounded to cents.
pub fn final_price(base_price: f64, delivery_fee: f64) -> f64 {
    round_cents(base_price + delivery_fee)
}

/// Records one prediction attempt.
///
/// On success appends a row built from `input` and the features the backend
/// actually used, and returns the final price. On failure returns the error
/// message and leaves `history` as it was.
pub fn record_outcome(
    history: &mut PredictionHistory,
    input: &ListingInput,
    outcome: Result<PredictResponse, String>,
) -> Result<f64, String> {
    let response = outcome?;
    let predicted_price = round_cents(response.predicted_price);
    history.append(PredictionEntry {
        prediction_id: response.prediction_id,
        title: input.title.clone(),
        furniture_type: input.furniture_type,
        sold: input.units_sold,
        material: response.features.material,
        color: response.features.color,
        discount_pct: input.discount_pct,
        delivery_fee: input.delivery_fee,
        predicted_price,
    });
    Ok(predicted_price)
}
