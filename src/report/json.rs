use serde::Serialize;

use crate::model::thresholds::ScoringConfig;
use crate::pipeline::senses::SensesOutput;
use crate::report::{SensesSummary, round2};

/// Compact summary: exactly `hear, see, smell, touch, taste`, nothing else.
pub fn render_summary_json(summary: &SensesSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string(summary)
}

#[derive(Debug, Serialize)]
struct DetailedReport<'a> {
    tool: &'a str,
    version: &'a str,
    z_threshold: f64,
    senses: SensesSummary,
    composite: f64,
    signals: Vec<SignalReport>,
}

#[derive(Debug, Serialize)]
struct SignalReport {
    signal: &'static str,
    field: &'static str,
    score: f64,
    n_input: usize,
    n_out_of_domain: usize,
    n_outliers: usize,
    n_kept: usize,
}

/// Summary plus unrounded composite and per-signal sample accounting.
pub fn render_detailed_json(
    output: &SensesOutput,
    config: &ScoringConfig,
) -> Result<String, serde_json::Error> {
    let signals = output
        .audits
        .iter()
        .map(|a| SignalReport {
            signal: a.signal.name(),
            field: a.signal.field(),
            score: round2(output.scores.get(a.signal)),
            n_input: a.n_input,
            n_out_of_domain: a.n_out_of_domain,
            n_outliers: a.n_outliers,
            n_kept: a.n_kept,
        })
        .collect();
    let report = DetailedReport {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        z_threshold: config.z_threshold,
        senses: output.summary(),
        composite: output.composite,
        signals,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
