//! Model Validator subsystem.
//!
//! A `Model` is a compiled, immutable validator built from a schema
//! declaration. Validation semantics:
//!
//! - Fields are checked in declaration order
//! - A required absent field fails; an optional absent field is skipped;
//!   a declared default fills the output copy and is then checked like a
//!   present value
//! - The type check runs before any rule; a mismatch short-circuits the
//!   field's rule list
//! - Rules run in declaration order; the first failing check anywhere
//!   aborts the whole call (fail-fast, no aggregation)
//! - The caller's candidate is never mutated; success returns a copy with
//!   defaults filled in
//! - Validation is deterministic and performs no I/O

mod errors;

pub use errors::{FailureKind, ValidationError, ValidationResult};

use serde_json::{Map, Value};

use crate::locale::active_locale;
use crate::rules::RuleRegistry;
use crate::schema::{compile_schema, json_type_name, FieldSchema, SchemaDecl, SchemaResult};

/// Synthetic field path reported when the candidate is not an object.
const ROOT_FIELD: &str = "$root";

/// A compiled, immutable validator.
///
/// Safe to share across threads for concurrent read-only validation; the
/// only process-wide mutable state is the locale catalog, consulted at
/// failure time.
#[derive(Debug, Clone)]
pub struct Model {
    fields: Vec<FieldSchema>,
}

impl Model {
    /// Compiles a schema declaration against the built-in rule registry.
    ///
    /// Fails with `SchemaError` when the declaration names an unknown rule,
    /// repeats a field, or carries a type-violating default. A failed
    /// construction never yields a usable model.
    pub fn new(decl: SchemaDecl) -> SchemaResult<Self> {
        Self::with_registry(decl, &RuleRegistry::with_builtins())
    }

    /// Compiles a schema declaration against a caller-supplied registry.
    pub fn with_registry(decl: SchemaDecl, registry: &RuleRegistry) -> SchemaResult<Self> {
        Ok(Self {
            fields: compile_schema(registry, &decl)?,
        })
    }

    /// Compiled field schemas in validation order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Replaces the process-wide locale catalog.
    ///
    /// Convenience for [`crate::locale::set_locale`]: the swap reaches
    /// every model, including this one and ones built earlier, because
    /// messages are rendered at failure time.
    pub fn set_locale(catalog: crate::locale::LocaleCatalog) {
        crate::locale::set_locale(catalog);
    }

    /// Validates a candidate object.
    ///
    /// On success returns a copy of the candidate with declared defaults
    /// filled in; the caller's value is left untouched. On failure returns
    /// the first failing check in declaration order, carrying the rendered
    /// message and the structured field/rule identifiers.
    pub fn validate(&self, candidate: &Value) -> ValidationResult<Value> {
        let input = candidate.as_object().ok_or_else(|| {
            type_failure(ROOT_FIELD, "object", json_type_name(candidate))
        })?;

        let mut output: Map<String, Value> = input.clone();

        for field in &self.fields {
            match input.get(field.name()) {
                Some(value) => self.check_field(field, value)?,
                None => match field.default() {
                    Some(default) => {
                        self.check_field(field, default)?;
                        output.insert(field.name().to_string(), default.clone());
                    }
                    None if field.optional() => {}
                    None => return Err(missing_failure(field.name())),
                },
            }
        }

        Ok(Value::Object(output))
    }

    /// Type check first, then rules in declaration order.
    fn check_field(&self, field: &FieldSchema, value: &Value) -> ValidationResult<()> {
        if !field.type_tag().check(value) {
            return Err(type_failure(
                field.name(),
                field.type_tag().type_name(),
                json_type_name(value),
            ));
        }

        let meta = field.meta();
        for rule in field.rules() {
            if !rule.check(value, &meta) {
                let message = active_locale().render_or_fallback(
                    rule.message_key(),
                    field.name(),
                    rule.name(),
                    &[("field", field.name()), ("rule", rule.name())],
                );
                return Err(ValidationError::new(
                    field.name(),
                    FailureKind::Rule {
                        name: rule.name().to_string(),
                    },
                    message,
                ));
            }
        }

        Ok(())
    }
}

fn missing_failure(field: &str) -> ValidationError {
    let message = active_locale().render_or_fallback(
        "missing_field",
        field,
        "required",
        &[("field", field)],
    );
    ValidationError::new(field, FailureKind::MissingField, message)
}

fn type_failure(field: &str, expected: &'static str, actual: &'static str) -> ValidationError {
    let message = active_locale().render_or_fallback(
        "type_mismatch",
        field,
        "type",
        &[("field", field), ("type", expected), ("actual", actual)],
    );
    ValidationError::new(field, FailureKind::TypeMismatch { expected, actual }, message)
}
