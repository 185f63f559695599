/// Input that does not conform to the ratings bundle schema.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("ratings data must be a JSON object, got {found}")]
    NotAMapping { found: &'static str },

    #[error("missing required keys: {}", .keys.join(", "))]
    MissingKeys { keys: Vec<&'static str> },

    #[error("{field} must be an array, got {found}")]
    NotASequence { field: &'static str, found: &'static str },

    #[error("{field} must contain booleans (element {index} is {found})")]
    NonBoolean {
        field: &'static str,
        index: usize,
        found: &'static str,
    },

    #[error("z_threshold must be a positive finite number, got {value}")]
    InvalidThreshold { value: f64 },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// The single failure value surfaced by scoring. No partial results accompany it.
#[derive(Debug, thiserror::Error)]
pub enum ComputationError {
    #[error("error processing ratings data: {0}")]
    Validation(#[from] ValidationError),

    #[error("unexpected type in {field}: element {index} is {found}, expected a number")]
    UnexpectedType {
        field: &'static str,
        index: usize,
        found: &'static str,
    },

    #[error("unexpected error: {signal} score is not finite")]
    NonFinite { signal: &'static str },

    #[error("unexpected error: failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ComputationError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ComputationError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/error/tests.rs"]
mod tests;
