//! Field Schema Compiler.
//!
//! Turns raw declarations into immutable compiled schemas. Every rule name
//! is resolved through the registry here, once; the resolved predicate is
//! stored by reference in the compiled field so validation performs no
//! lookups and can no longer fail on a missing rule.
//!
//! Compilation is side-effect-free and repeatable, and never reorders
//! rules: declaration order is evaluation order.

use serde_json::Value;

use crate::rules::{Rule, RuleRegistry};

use super::errors::{SchemaError, SchemaResult};
use super::types::{json_type_name, FieldDecl, FieldMeta, SchemaDecl, TypeTag};

/// A rule resolved at compilation: name and argument from the declaration,
/// predicate and message key from the registry.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    name: String,
    argument: Value,
    rule: Rule,
}

impl CompiledRule {
    /// Rule name as declared in the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Argument attached to the rule in the declaration.
    pub fn argument(&self) -> &Value {
        &self.argument
    }

    /// Runs the resolved predicate against a value.
    pub fn check(&self, value: &Value, meta: &FieldMeta) -> bool {
        self.rule.check(value, &self.argument, meta)
    }

    /// Message key rendered when the rule rejects a value.
    pub fn message_key(&self) -> &str {
        self.rule.message_key()
    }
}

/// A compiled per-field schema. Immutable after compilation.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    type_tag: TypeTag,
    optional: bool,
    default: Option<Value>,
    rules: Vec<CompiledRule>,
}

impl FieldSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Compiled rules in declaration order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// The read-only view handed to rule predicates.
    pub fn meta(&self) -> FieldMeta<'_> {
        FieldMeta {
            name: &self.name,
            type_tag: self.type_tag,
            optional: self.optional,
        }
    }
}

/// Compiles a single field declaration.
///
/// Fails with `UnknownRule` when a declared rule name does not resolve in
/// the registry, and with `InvalidDefault` when a declared default violates
/// the declared type. Both surface at model construction, never during a
/// validation call.
pub fn compile(registry: &RuleRegistry, name: &str, decl: &FieldDecl) -> SchemaResult<FieldSchema> {
    if let Some(default) = &decl.default {
        if !decl.type_tag.check(default) {
            return Err(SchemaError::InvalidDefault {
                field: name.to_string(),
                expected: decl.type_tag.type_name(),
                actual: json_type_name(default),
            });
        }
    }

    let mut rules = Vec::with_capacity(decl.rules.len());
    for (rule_name, argument) in &decl.rules {
        let rule = registry
            .get(rule_name)
            .ok_or_else(|| SchemaError::UnknownRule {
                rule: rule_name.clone(),
                field: name.to_string(),
            })?;
        rules.push(CompiledRule {
            name: rule_name.clone(),
            argument: argument.clone(),
            rule: rule.clone(),
        });
    }

    Ok(FieldSchema {
        name: name.to_string(),
        type_tag: decl.type_tag,
        optional: decl.optional,
        default: decl.default.clone(),
        rules,
    })
}

/// Compiles a whole schema declaration, preserving field order.
///
/// Field names must be unique; a repeated name fails with `DuplicateField`.
pub fn compile_schema(
    registry: &RuleRegistry,
    decl: &SchemaDecl,
) -> SchemaResult<Vec<FieldSchema>> {
    let mut fields: Vec<FieldSchema> = Vec::with_capacity(decl.fields.len());
    for (name, field_decl) in &decl.fields {
        if fields.iter().any(|f| f.name() == name) {
            return Err(SchemaError::DuplicateField {
                field: name.clone(),
            });
        }
        fields.push(compile(registry, name, field_decl)?);
    }
    Ok(fields)
}
