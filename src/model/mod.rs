pub mod ratings;
pub mod senses;
pub mod thresholds;
