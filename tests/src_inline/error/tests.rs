use std::error::Error;

use super::*;

#[test]
fn test_missing_keys_message_lists_all() {
    let err = ValidationError::MissingKeys {
        keys: vec!["coherence_ratings", "likability_scores"],
    };
    assert_eq!(
        err.to_string(),
        "missing required keys: coherence_ratings, likability_scores"
    );
}

#[test]
fn test_computation_error_wraps_validation() {
    let err: ComputationError = ValidationError::NonBoolean {
        field: "application_successes",
        index: 2,
        found: "a number",
    }
    .into();
    assert!(err.to_string().starts_with("error processing ratings data: "));
    assert!(err.to_string().contains("application_successes"));
    assert!(matches!(
        err.validation(),
        Some(ValidationError::NonBoolean { index: 2, .. })
    ));
    assert!(err.source().is_some());
}

#[test]
fn test_json_kind_names() {
    assert_eq!(json_kind(&serde_json::json!(1)), "a number");
    assert_eq!(json_kind(&serde_json::json!("yes")), "a string");
    assert_eq!(json_kind(&serde_json::Value::Null), "null");
}
