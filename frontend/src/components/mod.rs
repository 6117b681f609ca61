pub mod history;
pub mod predictor;
