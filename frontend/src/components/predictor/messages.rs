use common::model::listing::ListingInput;
use common::requests::PredictResponse;

pub enum Msg {
    SetTitle(String),
    SetFurnitureType(String),
    SetUnitsSold(String),
    SetMaterial(String),
    SetColor(String),
    SetOriginalPrice(String),
    SetDiscountPct(String),
    SetDeliveryFee(String),
    Predict,
    /// Carries the input that was submitted, not the one currently on screen.
    PredictionFinished {
        input: ListingInput,
        outcome: Result<PredictResponse, String>,
    },
}
