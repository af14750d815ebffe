//! # Schema Errors
//!
//! Construction-time error taxonomy. Every variant is fatal to model
//! construction: a schema that trips one of these never produces a usable
//! validator, so typos are caught before any candidate object is seen.

use thiserror::Error;

/// Result type for schema compilation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while compiling a schema declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Declared type name is not a recognized type tag
    #[error("Unknown type '{name}'")]
    UnknownType { name: String },

    /// Declared rule name is not present in the rule registry
    #[error("Unknown rule '{rule}' on field '{field}'")]
    UnknownRule { rule: String, field: String },

    /// A field name appears more than once in the declaration
    #[error("Duplicate field '{field}' in schema declaration")]
    DuplicateField { field: String },

    /// A declared default value violates the field's declared type
    #[error("Default for field '{field}' is not of type {expected}, got {actual}")]
    InvalidDefault {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_rule_display_names_field() {
        let err = SchemaError::UnknownRule {
            rule: "emial".into(),
            field: "contact".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("emial"));
        assert!(msg.contains("contact"));
    }

    #[test]
    fn test_invalid_default_display() {
        let err = SchemaError::InvalidDefault {
            field: "age".into(),
            expected: "number",
            actual: "string",
        };
        let msg = err.to_string();
        assert!(msg.contains("age"));
        assert!(msg.contains("number"));
        assert!(msg.contains("string"));
    }
}
