use common::model::listing::Vocabulary;
use common::model::prediction::PredictionHistory;
use yew::{html, Component, Context, Html, Properties};

use crate::components::predictor::format_price;

#[derive(Properties, PartialEq)]
pub struct HistoryTableProps {
    pub history: PredictionHistory,
}

/// Read-only table of the session's predictions, in the order they were made.
pub struct HistoryTable;

impl Component for HistoryTable {
    type Message = ();
    type Properties = HistoryTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HistoryTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let history = &ctx.props().history;

        html! {
            <table class="history-table">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Type"}</th>
                        <th>{"Sold"}</th>
                        <th>{"Material"}</th>
                        <th>{"Color"}</th>
                        <th>{"Discount"}</th>
                        <th>{"Delivery"}</th>
                        <th>{"Predicted Price"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for history.iter().map(|entry| html! {
                        <tr key={entry.prediction_id.clone()}>
                            <td>{ entry.title.clone() }</td>
                            <td>{ entry.furniture_type.label() }</td>
                            <td class="num">{ entry.sold.to_string() }</td>
                            <td>{ entry.material.as_str() }</td>
                            <td>{ entry.color.as_str() }</td>
                            <td class="num">{ format!("{}%", entry.discount_pct) }</td>
                            <td class="num">{ format_price(entry.delivery_fee) }</td>
                            <td class="num">{ format_price(entry.predicted_price) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    }
}
