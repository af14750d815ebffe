//! Schema declaration types.
//!
//! Supported field types:
//! - string: UTF-8 string
//! - number: any JSON number
//! - boolean: Boolean
//! - array: JSON array
//! - object: JSON object

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};

/// Supported field types. A declared field must match its tag exactly;
/// `null` matches no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// UTF-8 string
    String,
    /// Any JSON number (integer or float)
    Number,
    /// Boolean
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl TypeTag {
    /// Returns the type name used in rendered messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }

    /// Resolves a type name from a raw declaration.
    ///
    /// Fails with `SchemaError::UnknownType` for unrecognized names, so a
    /// schema typo surfaces at construction time.
    pub fn from_name(name: &str) -> SchemaResult<Self> {
        match name {
            "string" => Ok(TypeTag::String),
            "number" => Ok(TypeTag::Number),
            "boolean" => Ok(TypeTag::Boolean),
            "array" => Ok(TypeTag::Array),
            "object" => Ok(TypeTag::Object),
            _ => Err(SchemaError::UnknownType {
                name: name.to_string(),
            }),
        }
    }

    /// Checks whether a value has this primitive shape.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            TypeTag::String => value.is_string(),
            TypeTag::Number => value.is_number(),
            TypeTag::Boolean => value.is_boolean(),
            TypeTag::Array => value.is_array(),
            TypeTag::Object => value.is_object(),
        }
    }
}

/// Returns the JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Raw per-field declaration: a type tag plus an ordered list of rules.
///
/// Rule order is the order of `rule()` calls and is significant: validation
/// stops at the first failing rule, so the first-declared rule that fails
/// determines the reported message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared field type
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Ordered (rule name, rule argument) pairs
    #[serde(default)]
    pub rules: Vec<(String, Value)>,
    /// Whether the field may be absent from the candidate
    #[serde(default)]
    pub optional: bool,
    /// Value filled into the validated copy when the field is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldDecl {
    /// Create a required field of the given type with no rules.
    pub fn new(type_tag: TypeTag) -> Self {
        Self {
            type_tag,
            rules: Vec::new(),
            optional: false,
            default: None,
        }
    }

    /// Append a validation rule. Order of calls is evaluation order.
    pub fn rule(mut self, name: impl Into<String>, argument: Value) -> Self {
        self.rules.push((name.into(), argument));
        self
    }

    /// Mark the field as allowed to be absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set a default filled in when the field is absent. The default is
    /// validated like a present value.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// Raw schema declaration: field name → declaration, insertion order
/// preserved. Insertion order is validation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDecl {
    pub fields: Vec<(String, FieldDecl)>,
}

impl SchemaDecl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaration order determines validation order.
    pub fn field(mut self, name: impl Into<String>, decl: FieldDecl) -> Self {
        self.fields.push((name.into(), decl));
        self
    }
}

/// Read-only view of a compiled field handed to rule predicates.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta<'a> {
    /// Field name as declared in the schema
    pub name: &'a str,
    /// Declared type
    pub type_tag: TypeTag,
    /// Whether the field may be absent
    pub optional: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tag_names() {
        assert_eq!(TypeTag::String.type_name(), "string");
        assert_eq!(TypeTag::Number.type_name(), "number");
        assert_eq!(TypeTag::Boolean.type_name(), "boolean");
        assert_eq!(TypeTag::Array.type_name(), "array");
        assert_eq!(TypeTag::Object.type_name(), "object");
    }

    #[test]
    fn test_from_name_round_trips() {
        for name in ["string", "number", "boolean", "array", "object"] {
            assert_eq!(TypeTag::from_name(name).unwrap().type_name(), name);
        }
    }

    #[test]
    fn test_unknown_type_name_rejected() {
        let err = TypeTag::from_name("str").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { ref name } if name == "str"));
    }

    #[test]
    fn test_check_matches_shape() {
        assert!(TypeTag::String.check(&json!("hi")));
        assert!(TypeTag::Number.check(&json!(3)));
        assert!(TypeTag::Number.check(&json!(3.5)));
        assert!(TypeTag::Boolean.check(&json!(true)));
        assert!(TypeTag::Array.check(&json!([1, 2])));
        assert!(TypeTag::Object.check(&json!({})));
    }

    #[test]
    fn test_null_matches_no_tag() {
        for tag in [
            TypeTag::String,
            TypeTag::Number,
            TypeTag::Boolean,
            TypeTag::Array,
            TypeTag::Object,
        ] {
            assert!(!tag.check(&Value::Null));
        }
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
    }

    #[test]
    fn test_field_decl_preserves_rule_order() {
        let decl = FieldDecl::new(TypeTag::String)
            .rule("email", json!(true))
            .rule("custom", json!(3));
        assert_eq!(decl.rules[0].0, "email");
        assert_eq!(decl.rules[1].0, "custom");
    }

    #[test]
    fn test_schema_decl_preserves_field_order() {
        let decl = SchemaDecl::new()
            .field("b", FieldDecl::new(TypeTag::String))
            .field("a", FieldDecl::new(TypeTag::Number));
        let names: Vec<&str> = decl.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_type_tag_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TypeTag::String).unwrap(), "\"string\"");
        let tag: TypeTag = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(tag, TypeTag::Boolean);
    }
}
