use serde::{Deserialize, Serialize};

use crate::model::senses::SensesScores;

pub mod json;
pub mod text;

/// Rounded view of the five scores, serialized in fixed key order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensesSummary {
    pub hear: f64,
    pub see: f64,
    pub smell: f64,
    pub touch: f64,
    pub taste: f64,
}

impl SensesSummary {
    pub fn from_scores(scores: &SensesScores) -> Self {
        Self {
            hear: round2(scores.hear),
            see: round2(scores.see),
            smell: round2(scores.smell),
            touch: round2(scores.touch),
            taste: round2(scores.taste),
        }
    }
}

/// Rounds to 2 decimals, ties to even on the exact binary value
/// (so 0.125 -> 0.12, while 0.675 -> 0.68 because it is stored slightly above the tie).
pub fn round2(v: f64) -> f64 {
    format!("{:.2}", v).parse::<f64>().unwrap_or(v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
