pub mod identity;
pub mod match_resolver;
