//! Shared model and pure logic for the furniture price predictor.
//!
//! Everything in this crate compiles for both the native backend and the
//! wasm frontend, so the form can preview exactly the features the backend
//! will send to the model.

pub mod features;
pub mod model;
pub mod requests;
pub mod session;
