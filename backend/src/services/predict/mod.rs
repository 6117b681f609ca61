//! # Prediction Service Module
//!
//! Routes requests under `/api/predict` to the prediction handler.
//!
//! ## Sub-modules:
//! - `run`: validates the listing, assembles the feature record, calls the
//!   model and builds the response.

mod run;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/predict";

/// Configures and returns the Actix `Scope` for prediction routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/predict`**:
///     - **Handler**: `run::process`
///     - **Description**: Expects a JSON `ListingInput`. Answers `200 OK` with a
///       `PredictResponse`, `400 Bad Request` when a numeric field is out of
///       range, or `422 Unprocessable Entity` with the model's error message.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(run::process))
}
