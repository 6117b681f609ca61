//! View rendering for the price predictor form.
//!
//! Layout, top to bottom: title and lead, the input grid, a live preview of
//! the features the backend will derive, the "Predict Price" button, the
//! outcome of the last prediction and the session history table.

use common::features::assemble;
use common::model::feature_record::SizeFeature;
use common::model::listing::{
    Choice, Color, FurnitureType, ListingInput, Material, Vocabulary, AUTO_DETECT_VALUE,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::format_price;
use super::messages::Msg;
use super::state::PricePredictorComponent;
use crate::components::history::HistoryTable;

pub fn view(component: &PricePredictorComponent, ctx: &Context<PricePredictorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="predictor-root">
            <h1>{"🛋️ Furniture Price Prediction App"}</h1>
            <p>{"Enter furniture details to predict the price:"}</p>

            { build_form(&component.input, link) }
            { build_feature_preview(&component.input) }

            <button
                class="predict-btn"
                disabled={component.pending}
                onclick={link.callback(|_| Msg::Predict)}
            >
                { if component.pending { "Predicting..." } else { "Predict Price" } }
            </button>

            { build_result(&component.last_result) }

            {
                if component.history.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h2>{"Prediction History"}</h2>
                            <HistoryTable history={component.history.clone()} />
                        </>
                    }
                }
            }
        </div>
    }
}

fn build_form(input: &ListingInput, link: &Scope<PricePredictorComponent>) -> Html {
    let furniture_options: Vec<(&'static str, &'static str)> = FurnitureType::ALL
        .iter()
        .map(|t| (t.as_str(), t.label()))
        .collect();
    let material_options = choice_options(Material::ALL);
    let color_options = choice_options(Color::FORM_OPTIONS);

    html! {
        <div class="form-grid">
            <label class="form-field wide">
                {"Product Title"}
                <input
                    type="text"
                    value={input.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let field: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetTitle(field.value())
                    })}
                />
            </label>
            { select_field("Furniture Type", &furniture_options, input.furniture_type.as_str(), link.callback(Msg::SetFurnitureType)) }
            { number_field("Units Sold", &input.units_sold.to_string(), "0", None, "1", link.callback(Msg::SetUnitsSold)) }
            { select_field("Material", &material_options, input.material_choice.form_value(), link.callback(Msg::SetMaterial)) }
            { select_field("Color", &color_options, input.color_choice.form_value(), link.callback(Msg::SetColor)) }
            { number_field("Original Price ($)", &input.original_price.to_string(), "0", None, "0.01", link.callback(Msg::SetOriginalPrice)) }
            { number_field("Discount Percentage (0-100)", &input.discount_pct.to_string(), "0", Some("100"), "0.01", link.callback(Msg::SetDiscountPct)) }
            { number_field("Delivery Fee ($)", &input.delivery_fee.to_string(), "0", None, "0.01", link.callback(Msg::SetDeliveryFee)) }
        </div>
    }
}

/// "Auto Detect" followed by the vocabulary.
fn choice_options<T: Vocabulary>(values: &[T]) -> Vec<(&'static str, &'static str)> {
    std::iter::once((AUTO_DETECT_VALUE, "Auto Detect"))
        .chain(values.iter().map(|v| (v.as_str(), v.label())))
        .collect()
}

fn select_field(
    label: &'static str,
    options: &[(&'static str, &'static str)],
    selected: &str,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_change.emit(select.value());
    });

    html! {
        <label class="form-field">
            { label }
            <select {onchange}>
                { for options.iter().map(|(value, text)| html! {
                    <option value={*value} selected={*value == selected}>{ *text }</option>
                }) }
            </select>
        </label>
    }
}

// Number fields commit on `change` so a half-typed value like "1." is not
// rewritten while the user is still typing.
fn number_field(
    label: &'static str,
    value: &str,
    min: &'static str,
    max: Option<&'static str>,
    step: &'static str,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let field: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(field.value());
    });

    html! {
        <label class="form-field">
            { label }
            <input type="number" value={value.to_string()} {min} max={max} {step} {onchange} />
        </label>
    }
}

fn build_feature_preview(input: &ListingInput) -> Html {
    let features = assemble(input);
    let size = match features.size_feat {
        SizeFeature::Inches(inches) => format!("{:.2} in", inches),
        SizeFeature::Missing => "missing".to_string(),
    };
    let source = |auto: bool| if auto { " (detected)" } else { "" };

    html! {
        <div class="feature-preview">
            <strong>{"Detected features: "}</strong>
            { format!("size {}", size) }
            {" · "}
            { format!("material {}{}", features.material.as_str(), source(matches!(input.material_choice, Choice::Auto))) }
            {" · "}
            { format!("color {}{}", features.color.as_str(), source(matches!(input.color_choice, Choice::Auto))) }
            {" · "}
            { format!("discount {}", features.discount_fraction) }
        </div>
    }
}

fn build_result(last_result: &Option<Result<f64, String>>) -> Html {
    match last_result {
        Some(Ok(price)) => html! {
            <div class="result success">{ format!("📌 Predicted Price: ${}", format_price(*price)) }</div>
        },
        Some(Err(e)) => html! {
            <div class="result error">{ format!("Error in prediction: {}", e) }</div>
        },
        None => html! {},
    }
}
