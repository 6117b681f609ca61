//! Component state for the price predictor form.

use common::model::listing::ListingInput;
use common::model::prediction::PredictionHistory;

pub struct PricePredictorComponent {
    /// Current form values.
    pub input: ListingInput,

    /// Successful predictions of this session, oldest first.
    pub history: PredictionHistory,

    /// Outcome of the last click on "Predict Price": the final price or the
    /// error message.
    pub last_result: Option<Result<f64, String>>,

    /// A request is in flight; the button is disabled until it returns.
    pub pending: bool,
}

impl PricePredictorComponent {
    pub fn new() -> Self {
        Self {
            input: ListingInput::default(),
            history: PredictionHistory::new(),
            last_result: None,
            pending: false,
        }
    }
}
