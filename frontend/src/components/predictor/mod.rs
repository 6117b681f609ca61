//! Price predictor form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! The component owns the session's `PredictionHistory`. It lives as long as
//! the page does, so reloading the page starts a new session with an empty
//! history.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use helpers::format_price;
use messages::Msg;
pub use state::PricePredictorComponent;

impl Component for PricePredictorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PricePredictorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
