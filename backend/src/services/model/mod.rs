//! Model information endpoint.

mod info;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/model";

/// `GET /api/model` returns the `ModelInfo` of the artifact loaded at start-up:
/// its path, MD5 fingerprint, and the load error if it could not be used.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(info::process))
}
