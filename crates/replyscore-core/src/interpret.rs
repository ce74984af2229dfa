//! Response interpretation: raw model text to a validated judgment.

use thiserror::Error;

use crate::evaluation::{schema, ModelEvaluation};

/// Errors from interpreting raw model output.
#[derive(Error, Debug)]
pub enum InterpretError {
    /// The response was not syntactically valid JSON.
    #[error("Response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed as JSON but violated the evaluation schema.
    #[error("Response failed schema validation: {0}")]
    Validation(String),
}

/// Parse and validate one raw model response.
///
/// Strictly layered: anything that is not syntactically valid JSON is a
/// [`InterpretError::Parse`]; valid JSON with the wrong shape (missing
/// fields, out-of-range scores, explanation lengths outside 10-200, wrong
/// types) is a [`InterpretError::Validation`]. There is no fallback
/// extraction from fenced or partial output.
pub fn interpret_response(raw: &str) -> Result<ModelEvaluation, InterpretError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    schema::validate_evaluation(&value)
        .map_err(|errors| InterpretError::Validation(errors.join("; ")))?;

    // JSON Schema "integer" admits values like 3.0; serde's u8 does not.
    serde_json::from_value(value).map_err(|e| InterpretError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESPONSE: &str = r#"{
        "content_score": 4,
        "content_explanation": "Addresses issue, could be faster",
        "format_score": 5,
        "format_explanation": "Clear and professional"
    }"#;

    #[test]
    fn test_valid_response_interprets() {
        let evaluation = interpret_response(VALID_RESPONSE).unwrap();
        assert_eq!(evaluation.content_score, 4);
        assert_eq!(evaluation.content_explanation, "Addresses issue, could be faster");
        assert_eq!(evaluation.format_score, 5);
        assert_eq!(evaluation.format_explanation, "Clear and professional");
    }

    #[test]
    fn test_non_json_is_parse_error() {
        let result = interpret_response("The reply was good, 4/5 overall.");
        assert!(matches!(result, Err(InterpretError::Parse(_))));
    }

    #[test]
    fn test_fenced_json_is_parse_error() {
        // No fallback extraction: fenced output is rejected outright.
        let fenced = format!("```json\n{}\n```", VALID_RESPONSE);
        let result = interpret_response(&fenced);
        assert!(matches!(result, Err(InterpretError::Parse(_))));
    }

    #[test]
    fn test_json_array_is_validation_error() {
        let result = interpret_response("[1, 2, 3]");
        assert!(matches!(result, Err(InterpretError::Validation(_))));
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let raw = r#"{
            "content_score": 4,
            "content_explanation": "Addresses issue, could be faster",
            "format_score": 5
        }"#;
        let result = interpret_response(raw);
        assert!(matches!(result, Err(InterpretError::Validation(_))));
    }

    #[test]
    fn test_out_of_range_score_is_validation_error() {
        let raw = r#"{
            "content_score": 6,
            "content_explanation": "Addresses issue, could be faster",
            "format_score": 5,
            "format_explanation": "Clear and professional"
        }"#;
        let result = interpret_response(raw);
        assert!(matches!(result, Err(InterpretError::Validation(_))));
    }

    #[test]
    fn test_float_score_is_validation_error() {
        // 4.0 satisfies the schema's "integer" but must not become a u8.
        let raw = r#"{
            "content_score": 4.0,
            "content_explanation": "Addresses issue, could be faster",
            "format_score": 5,
            "format_explanation": "Clear and professional"
        }"#;
        let result = interpret_response(raw);
        assert!(matches!(result, Err(InterpretError::Validation(_))));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"{
            "content_score": 4,
            "content_explanation": "Addresses issue, could be faster",
            "format_score": 5,
            "format_explanation": "Clear and professional",
            "confidence": 0.93
        }"#;
        assert!(interpret_response(raw).is_ok());
    }

    #[test]
    fn test_error_messages_name_the_violation() {
        let raw = r#"{
            "content_score": 4,
            "content_explanation": "too short",
            "format_score": 5,
            "format_explanation": "Clear and professional"
        }"#;
        match interpret_response(raw) {
            Err(InterpretError::Validation(message)) => {
                assert!(message.contains("/content_explanation"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
