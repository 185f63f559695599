use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::ComputationError;
use crate::input::{parse_bundle, parse_bundle_str};
use crate::model::ratings::{Domain, RatingsBundle, Signal};
use crate::model::senses::{SensesScores, SignalAudit, clip01};
use crate::model::thresholds::ScoringConfig;
use crate::pipeline::domain::filter_domain;
use crate::pipeline::outlier::{mean, remove_outliers};
use crate::report::SensesSummary;
use crate::report::json::render_summary_json;

#[derive(Debug, Clone, PartialEq)]
pub struct SensesOutput {
    pub scores: SensesScores,
    pub composite: f64,
    /// One entry per signal, in `Signal::ALL` order.
    pub audits: Vec<SignalAudit>,
}

impl SensesOutput {
    pub fn summary(&self) -> SensesSummary {
        SensesSummary::from_scores(&self.scores)
    }
}

/// Scores a parsed bundle. Each signal is reduced independently with the same threshold.
pub fn run_senses(
    bundle: &RatingsBundle,
    config: &ScoringConfig,
) -> Result<SensesOutput, ComputationError> {
    config.validate()?;
    debug!(
        n_samples = bundle.total_samples(),
        z_threshold = config.z_threshold,
        "scoring bundle"
    );

    let mut scores = SensesScores::default();
    let mut audits = Vec::with_capacity(Signal::ALL.len());

    for signal in Signal::ALL {
        let (score, audit) = match bundle.numeric(signal) {
            Some(values) => numeric_signal(signal, values, config.z_threshold),
            None => touch_signal(&bundle.application_successes),
        };
        if !score.is_finite() {
            return Err(ComputationError::NonFinite {
                signal: signal.name(),
            });
        }
        debug!(
            signal = signal.name(),
            score,
            n_input = audit.n_input,
            n_out_of_domain = audit.n_out_of_domain,
            n_outliers = audit.n_outliers,
            n_kept = audit.n_kept,
            "signal reduced"
        );
        scores.set(signal, score);
        audits.push(audit);
    }

    let composite = scores.composite();
    Ok(SensesOutput {
        scores,
        composite,
        audits,
    })
}

/// JSON in, `(summary_json, composite)` out. Any failure is logged and
/// returned as one `ComputationError`.
pub fn compute_senses(
    ratings: &Value,
    z_threshold: f64,
) -> Result<(String, f64), ComputationError> {
    let output = score_senses(ratings, z_threshold)?;
    let summary = render_summary_json(&output.summary()).map_err(|e| {
        error!("SENSES computation failed: {e}");
        ComputationError::from(e)
    })?;
    Ok((summary, output.composite))
}

/// Parses, validates and scores a ratings object, logging start, completion
/// and failure.
pub fn score_senses(ratings: &Value, z_threshold: f64) -> Result<SensesOutput, ComputationError> {
    logged(z_threshold, || parse_bundle(ratings))
}

/// Same as [`score_senses`] for raw JSON text.
pub fn score_senses_str(raw: &str, z_threshold: f64) -> Result<SensesOutput, ComputationError> {
    logged(z_threshold, || parse_bundle_str(raw))
}

fn logged(
    z_threshold: f64,
    parse: impl FnOnce() -> Result<RatingsBundle, ComputationError>,
) -> Result<SensesOutput, ComputationError> {
    info!(z_threshold, "starting SENSES computation");
    let result = parse().and_then(|bundle| {
        let config = ScoringConfig::with_z_threshold(z_threshold)?;
        run_senses(&bundle, &config)
    });
    match &result {
        Ok(output) => info!(composite = output.composite, "SENSES computation completed"),
        Err(err) => error!("SENSES computation failed: {err}"),
    }
    result
}

fn numeric_signal(signal: Signal, values: &[f64], z_threshold: f64) -> (f64, SignalAudit) {
    let mut audit = SignalAudit::new(signal, values.len());
    let filtered = filter_domain(values, signal.domain().unwrap_or(Domain::Unbounded));
    let clean = remove_outliers(&filtered.values, z_threshold);

    audit.n_out_of_domain = filtered.dropped;
    audit.n_outliers = filtered.values.len() - clean.len();
    audit.n_kept = clean.len();

    if clean.is_empty() {
        return (0.0, audit);
    }
    let score = match signal {
        Signal::Smell => relative_novelty(&clean),
        Signal::Taste => (mean(&clean) - 1.0) / 4.0,
        _ => mean(&clean),
    };
    // Accumulated rounding can put a mean one ulp past its bound.
    (clip01(score), audit)
}

/// Mean magnitude relative to the largest surviving magnitude. Sign is
/// dropped only after outlier removal.
fn relative_novelty(clean: &[f64]) -> f64 {
    let magnitudes = clean.iter().map(|v| v.abs()).collect::<Vec<_>>();
    let mut max_abs = 0f64;
    for &m in &magnitudes {
        if m > max_abs {
            max_abs = m;
        }
    }
    let divisor = if max_abs > 0.0 { max_abs } else { 1.0 };
    mean(&magnitudes) / divisor
}

fn touch_signal(successes: &[bool]) -> (f64, SignalAudit) {
    let audit = SignalAudit::new(Signal::Touch, successes.len());
    if successes.is_empty() {
        return (0.0, audit);
    }
    let hits = successes.iter().filter(|&&s| s).count();
    (hits as f64 / successes.len() as f64, audit)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/senses.rs"]
mod tests;
