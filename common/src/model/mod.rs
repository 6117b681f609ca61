pub mod feature_record;
pub mod listing;
pub mod prediction;
