//! SENSES (Hear/See/Smell/Touch/Taste) quality scoring.
//!
//! A pure, synchronous scoring function: a ratings bundle goes in, a rounded
//! five-field summary and an unrounded composite come out.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{ComputationError, ValidationError};
pub use input::{parse_bundle, parse_bundle_str};
pub use model::ratings::{RatingsBundle, Signal};
pub use model::senses::{SensesScores, SignalAudit};
pub use model::thresholds::{DEFAULT_Z_THRESHOLD, ScoringConfig};
pub use pipeline::outlier::remove_outliers;
pub use pipeline::senses::{SensesOutput, compute_senses, run_senses, score_senses, score_senses_str};
pub use report::SensesSummary;
