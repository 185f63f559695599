pub mod domain;
pub mod outlier;
pub mod senses;
