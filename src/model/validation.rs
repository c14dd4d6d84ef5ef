use serde_json::Value;
use thiserror::Error;

use super::merchant::Merchant;

/// Validation errors for domain model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a form needs at least one input mode")]
    EmptyModeSet,
    #[error("menu JSON must be an object")]
    NotAnObject,
    #[error("malformed menu JSON: {0}")]
    Malformed(String),
}

/// Parses menu JSON text into a [`Merchant`].
///
/// The text must hold a single JSON object. Known fields are type-checked;
/// unknown fields are kept as-is.
pub fn parse_merchant(text: &str) -> Result<Merchant, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(ValidationError::NotAnObject);
    }
    serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
}

/// Re-serializes JSON text without insignificant whitespace.
pub fn minify_json(text: &str) -> Result<String, ValidationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    Ok(value.to_string())
}
