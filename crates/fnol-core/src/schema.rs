//! JSON Schema validation for claim results.
//!
//! The four-key result object is the only surface downstream reporting
//! consumes. Its shape is pinned by `schema/claim_result.schema.json`, which
//! is embedded at compile time.

use std::sync::OnceLock;
use thiserror::Error;

/// Embedded result schema (loaded at compile time).
pub const CLAIM_RESULT_SCHEMA_JSON: &str = include_str!("../schema/claim_result.schema.json");

/// The result validator, compiled on first use. A compile failure is kept
/// so every later call reports it.
static RESULT_VALIDATOR: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Errors from schema validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to load schema: {0}")]
    LoadError(String),
}

fn compile_result_schema() -> Result<jsonschema::Validator, String> {
    let schema: serde_json::Value = serde_json::from_str(CLAIM_RESULT_SCHEMA_JSON)
        .map_err(|e| format!("Invalid schema JSON: {}", e))?;
    jsonschema::draft202012::new(&schema).map_err(|e| format!("Failed to compile schema: {}", e))
}

fn result_validator() -> Result<&'static jsonschema::Validator, SchemaError> {
    RESULT_VALIDATOR
        .get_or_init(compile_result_schema)
        .as_ref()
        .map_err(|e| SchemaError::LoadError(e.clone()))
}

/// Validate a serialized claim result against the schema.
///
/// # Returns
///
/// * `Ok(())` - Result matches the output contract
/// * `Err(Vec<String>)` - One message per violation
pub fn validate_result_schema(result_json: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = result_validator().map_err(|e| vec![e.to_string()])?;

    let errors: Vec<String> = validator
        .iter_errors(result_json)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check if a serialized claim result is valid against the schema.
pub fn is_valid_result(result_json: &serde_json::Value) -> bool {
    result_validator()
        .map(|v| v.is_valid(result_json))
        .unwrap_or(false)
}
