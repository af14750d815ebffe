//! Rule Registry subsystem.
//!
//! A rule is a named pure predicate plus a message key. Rules are resolved
//! by name once, at model construction, and stored by reference in the
//! compiled schema; validation never performs a registry lookup.
//!
//! Predicates take `(value, rule argument, field meta)` and must be pure:
//! same inputs always yield the same boolean, no I/O.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde_json::Value;

use crate::schema::FieldMeta;

/// Predicate applied to one field's value with an optional argument.
pub type RulePredicate = Arc<dyn Fn(&Value, &Value, &FieldMeta) -> bool + Send + Sync>;

/// A named validation rule: predicate plus the message key rendered when
/// the predicate fails.
#[derive(Clone)]
pub struct Rule {
    predicate: RulePredicate,
    message_key: String,
}

impl Rule {
    pub fn new(predicate: RulePredicate, message_key: impl Into<String>) -> Self {
        Self {
            predicate,
            message_key: message_key.into(),
        }
    }

    /// Runs the predicate against a value.
    pub fn check(&self, value: &Value, argument: &Value, meta: &FieldMeta) -> bool {
        (self.predicate)(value, argument, meta)
    }

    /// Message key rendered when this rule rejects a value.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("message_key", &self.message_key)
            .finish_non_exhaustive()
    }
}

/// Registry mapping rule name → rule.
///
/// Lookups happen at schema compilation only; an unknown name there fails
/// construction, never a validation call.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Empty registry with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "email",
            Arc::new(|value, _arg, _meta| email_shape(value)),
            "email_invalid",
        );
        registry
    }

    /// Adds or overrides a rule.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        predicate: RulePredicate,
        message_key: impl Into<String>,
    ) {
        self.rules
            .insert(name.into(), Rule::new(predicate, message_key));
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }
}

/// Permissive email-shape test: local part, `@`, domain containing a dot.
/// Non-string values fail the shape test.
fn email_shape(value: &Value) -> bool {
    static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL_SHAPE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
    match value.as_str() {
        Some(s) => pattern.is_match(s),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeTag;
    use serde_json::json;

    fn meta() -> FieldMeta<'static> {
        FieldMeta {
            name: "email",
            type_tag: TypeTag::String,
            optional: false,
        }
    }

    #[test]
    fn test_builtin_email_accepts_plain_address() {
        let registry = RuleRegistry::with_builtins();
        let rule = registry.get("email").unwrap();
        assert!(rule.check(&json!("test@test.com"), &json!(true), &meta()));
        assert!(rule.check(&json!("a.b+c@sub.example.org"), &json!(true), &meta()));
    }

    #[test]
    fn test_builtin_email_rejects_non_email_shapes() {
        let registry = RuleRegistry::with_builtins();
        let rule = registry.get("email").unwrap();
        assert!(!rule.check(&json!("red0"), &json!(true), &meta()));
        assert!(!rule.check(&json!("no-at.example.com"), &json!(true), &meta()));
        assert!(!rule.check(&json!("dotless@domain"), &json!(true), &meta()));
        assert!(!rule.check(&json!("two words@x.com"), &json!(true), &meta()));
        assert!(!rule.check(&json!(42), &json!(true), &meta()));
    }

    #[test]
    fn test_email_message_key() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.get("email").unwrap().message_key(), "email_invalid");
    }

    #[test]
    fn test_register_overrides_existing_rule() {
        let mut registry = RuleRegistry::with_builtins();
        registry.register("email", Arc::new(|_, _, _| true), "email_invalid");
        let rule = registry.get("email").unwrap();
        assert!(rule.check(&json!("not an email"), &json!(true), &meta()));
    }

    #[test]
    fn test_unknown_rule_lookup_is_none() {
        let registry = RuleRegistry::with_builtins();
        assert!(registry.get("emial").is_none());
    }

    #[test]
    fn test_custom_rule_sees_argument_and_meta() {
        let mut registry = RuleRegistry::new();
        registry.register(
            "min_len",
            Arc::new(|value, arg, meta| {
                assert_eq!(meta.type_tag, TypeTag::String);
                let min = arg.as_u64().unwrap_or(0) as usize;
                value.as_str().map(|s| s.len() >= min).unwrap_or(false)
            }),
            "too_short",
        );
        let rule = registry.get("min_len").unwrap();
        assert!(rule.check(&json!("hello"), &json!(3), &meta()));
        assert!(!rule.check(&json!("hi"), &json!(3), &meta()));
    }
}
