//! Update function for the price predictor form.
//!
//! Field messages rewrite `component.input` from the raw control values.
//! `Predict` sends the current input to the backend; `PredictionFinished`
//! records the outcome in the session history (successes only) and reports it.

use common::model::listing::{Choice, FurnitureType, Vocabulary};
use common::session::record_outcome;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{format_price, parse_bounded, parse_units, request_prediction, show_toast};
use super::messages::Msg;
use super::state::PricePredictorComponent;

pub fn update(
    component: &mut PricePredictorComponent,
    ctx: &Context<PricePredictorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTitle(title) => {
            component.input.title = title;
            true
        }
        Msg::SetFurnitureType(value) => {
            if let Some(furniture_type) = FurnitureType::parse(&value) {
                component.input.furniture_type = furniture_type;
            }
            true
        }
        Msg::SetUnitsSold(raw) => {
            component.input.units_sold = parse_units(&raw, component.input.units_sold);
            true
        }
        Msg::SetMaterial(value) => {
            if let Some(choice) = Choice::from_form_value(&value) {
                component.input.material_choice = choice;
            }
            true
        }
        Msg::SetColor(value) => {
            if let Some(choice) = Choice::from_form_value(&value) {
                component.input.color_choice = choice;
            }
            true
        }
        Msg::SetOriginalPrice(raw) => {
            component.input.original_price = parse_bounded(&raw, component.input.original_price, 0.0, f64::MAX);
            true
        }
        Msg::SetDiscountPct(raw) => {
            component.input.discount_pct = parse_bounded(&raw, component.input.discount_pct, 0.0, 100.0);
            true
        }
        Msg::SetDeliveryFee(raw) => {
            component.input.delivery_fee = parse_bounded(&raw, component.input.delivery_fee, 0.0, f64::MAX);
            true
        }
        Msg::Predict => {
            if component.pending {
                return false;
            }
            component.pending = true;

            let submitted = component.input.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = request_prediction(&submitted).await;
                link.send_message(Msg::PredictionFinished {
                    input: submitted,
                    outcome,
                });
            });
            true
        }
        Msg::PredictionFinished { input, outcome } => {
            component.pending = false;
            let result = record_outcome(&mut component.history, &input, outcome);
            match &result {
                Ok(price) => show_toast(&format!("Predicted Price: ${}", format_price(*price))),
                Err(e) => {
                    gloo_console::error!(format!("Prediction failed: {}", e));
                    show_toast(&format!("Error in prediction: {}", e));
                }
            }
            component.last_result = Some(result);
            true
        }
    }
}
