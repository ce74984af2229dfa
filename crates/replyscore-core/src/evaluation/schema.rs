//! JSON Schema validation for model responses.
//!
//! Raw model output is checked against spec/evaluation.schema.json before
//! any typed deserialization, so range and length violations surface as
//! schema errors with JSON pointers instead of opaque serde messages.

use std::sync::OnceLock;
use thiserror::Error;

/// Embedded evaluation schema (loaded at compile time).
const EVALUATION_SCHEMA_JSON: &str = include_str!("../../../../spec/evaluation.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Errors from schema loading.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to load schema: {0}")]
    LoadError(String),
}

/// Get or initialize the compiled schema validator.
fn get_validator() -> Result<&'static jsonschema::Validator, SchemaError> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = match serde_json::from_str(EVALUATION_SCHEMA_JSON) {
            Ok(v) => v,
            Err(e) => return Err(format!("Invalid schema JSON: {}", e)),
        };

        match jsonschema::options().build(&schema_value) {
            Ok(v) => Ok(v),
            Err(e) => Err(format!("Failed to compile schema: {}", e)),
        }
    });

    match result {
        Ok(v) => Ok(v),
        Err(e) => Err(SchemaError::LoadError(e.clone())),
    }
}

/// Validate a parsed model response against the evaluation schema.
///
/// Returns `Ok(())` if valid, or every violation as a message carrying the
/// offending JSON pointer. All errors are collected, not just the first, so
/// a sentinel row's diagnostic describes the whole problem.
pub(crate) fn validate_evaluation(response: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e.to_string()])?;

    let errors: Vec<String> = validator
        .iter_errors(response)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
