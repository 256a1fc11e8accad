pub mod engine;
pub mod match_record;
