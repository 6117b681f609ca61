//! Utility functions for the price predictor form.
//!
//! - **Number inputs**: turning the raw text of `<input type="number">` into
//!   values within the bounds the form advertises.
//! - **Formatting**: prices with thousands separators.
//! - **Backend call**: `POST /api/predict`.
//! - **User feedback**: temporary toast notifications.

use common::model::listing::ListingInput;
use common::requests::PredictResponse;
use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Parses a units-sold field. Empty means zero; anything unparsable keeps
/// `current`. Negative numbers clamp to zero.
pub fn parse_units(raw: &str, current: u32) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v.clamp(0.0, u32::MAX as f64).trunc() as u32,
        _ => current,
    }
}

/// Parses a money or percentage field and clamps it to `[min, max]`.
/// Empty means `min`; anything unparsable keeps `current`.
pub fn parse_bounded(raw: &str, current: f64, min: f64, max: f64) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return min;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v.clamp(min, max),
        _ => current,
    }
}

/// Formats a price as `1,234.50`.
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

/// Sends the listing to the backend.
///
/// Any failure (transport, non-200 status, undecodable body) becomes the
/// message shown to the user.
pub async fn request_prediction(input: &ListingInput) -> Result<PredictResponse, String> {
    let response = Request::post("/api/predict")
        .json(input)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        return response
            .json::<PredictResponse>()
            .await
            .map_err(|e| format!("unreadable response: {}", e));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        Err(format!("server answered {}", status))
    } else {
        Err(body)
    }
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is a plain `div` appended to `body` and removed after three
/// seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
