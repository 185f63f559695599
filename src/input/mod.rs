use serde_json::{Map, Value};

use crate::error::{ComputationError, ValidationError, json_kind};
use crate::model::ratings::{
    APPLICATION_SUCCESSES, COHERENCE_RATINGS, CUSTOM_METRIC, LIKABILITY_SCORES,
    NOVELTY_INDICATORS, REQUIRED_KEYS, RatingsBundle, STRUCTURAL_FEEDBACK,
};

pub fn parse_bundle_str(raw: &str) -> Result<RatingsBundle, ComputationError> {
    let value: Value = serde_json::from_str(raw).map_err(ValidationError::InvalidJson)?;
    parse_bundle(&value)
}

/// Schema check at the boundary: every required key present, every numeric
/// signal an array of numbers, `application_successes` strictly boolean.
/// Domain ranges are not checked here; out-of-range samples are filtered later.
pub fn parse_bundle(value: &Value) -> Result<RatingsBundle, ComputationError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ValidationError::NotAMapping {
                found: json_kind(other),
            }
            .into());
        }
    };

    let missing = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(*key))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ValidationError::MissingKeys { keys: missing }.into());
    }

    Ok(RatingsBundle {
        coherence_ratings: numeric_field(map, COHERENCE_RATINGS)?,
        structural_feedback: numeric_field(map, STRUCTURAL_FEEDBACK)?,
        novelty_indicators: numeric_field(map, NOVELTY_INDICATORS)?,
        application_successes: bool_field(map, APPLICATION_SUCCESSES)?,
        likability_scores: numeric_field(map, LIKABILITY_SCORES)?,
        custom_metric: custom_metric(map),
    })
}

fn array_field<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a [Value], ValidationError> {
    match map.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(ValidationError::NotASequence {
            field,
            found: json_kind(other),
        }),
        None => Err(ValidationError::MissingKeys { keys: vec![field] }),
    }
}

fn numeric_field(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<f64>, ComputationError> {
    let items = array_field(map, field)?;
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_f64() {
            Some(v) => out.push(v),
            None => {
                return Err(ComputationError::UnexpectedType {
                    field,
                    index,
                    found: json_kind(item),
                });
            }
        }
    }
    Ok(out)
}

fn bool_field(map: &Map<String, Value>, field: &'static str) -> Result<Vec<bool>, ValidationError> {
    let items = array_field(map, field)?;
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Bool(b) => out.push(*b),
            other => {
                return Err(ValidationError::NonBoolean {
                    field,
                    index,
                    found: json_kind(other),
                });
            }
        }
    }
    Ok(out)
}

fn custom_metric(map: &Map<String, Value>) -> Option<Vec<f64>> {
    match map.get(CUSTOM_METRIC)? {
        Value::Null => None,
        Value::Array(items) => {
            let values = items.iter().map(Value::as_f64).collect::<Option<Vec<_>>>();
            if values.is_none() {
                tracing::warn!("ignoring {CUSTOM_METRIC}: elements must be numbers");
            }
            values
        }
        other => {
            tracing::warn!(
                "ignoring {CUSTOM_METRIC}: expected an array, got {}",
                json_kind(other)
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
