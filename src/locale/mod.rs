//! Locale Catalog subsystem.
//!
//! Maps message keys to human-readable templates with named placeholders
//! (`{field}`, `{rule}`, `{type}`, ...). The active catalog is process
//! scoped: `set_locale` swaps it atomically and the swap is visible to
//! already-constructed models, because messages are rendered at failure
//! time, not at compile time.
//!
//! Rendering must never abort a validation call: a missing key falls back
//! to a generic template instead of failing the caller.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use thiserror::Error;

/// Template used when a message key is absent from the active catalog.
pub const FALLBACK_TEMPLATE: &str = "{field} failed rule {rule}";

/// Result type for template rendering
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Errors raised while rendering a message template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// Message key absent from the catalog
    #[error("No template registered for message key '{key}'")]
    MissingTemplate { key: String },
}

/// A swappable mapping from message key to template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    templates: HashMap<String, String>,
}

impl Default for LocaleCatalog {
    /// The built-in English catalog.
    fn default() -> Self {
        let mut catalog = Self::new();
        catalog.insert("missing_field", "{field} is required");
        catalog.insert("type_mismatch", "{field} must be of type {type}");
        catalog.insert("email_invalid", "{field} must be a valid email");
        catalog
    }
}

impl LocaleCatalog {
    /// Empty catalog with no templates.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Adds or replaces a template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Returns the raw template for a key.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Renders the template for `key`, substituting each `{name}`
    /// placeholder with the matching value from `params`.
    ///
    /// Fails with `MissingTemplate` when the key is absent. Callers on the
    /// validation path use `render_or_fallback` instead.
    pub fn render(&self, key: &str, params: &[(&str, &str)]) -> LocaleResult<String> {
        let template = self
            .template(key)
            .ok_or_else(|| LocaleError::MissingTemplate { key: key.into() })?;
        Ok(substitute(template, params))
    }

    /// Renders the template for `key`, falling back to the generic
    /// `"{field} failed rule {rule}"` template when the key is absent.
    pub fn render_or_fallback(
        &self,
        key: &str,
        field: &str,
        rule: &str,
        params: &[(&str, &str)],
    ) -> String {
        match self.render(key, params) {
            Ok(message) => message,
            Err(LocaleError::MissingTemplate { .. }) => {
                substitute(FALLBACK_TEMPLATE, &[("field", field), ("rule", rule)])
            }
        }
    }
}

/// Substitutes `{name}` placeholders from `params`, in order.
fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (name, value) in params {
        output = output.replace(&format!("{{{}}}", name), value);
    }
    output
}

/// Active catalog, initialized lazily to the built-in English catalog.
static ACTIVE: OnceLock<RwLock<Arc<LocaleCatalog>>> = OnceLock::new();

fn active_cell() -> &'static RwLock<Arc<LocaleCatalog>> {
    ACTIVE.get_or_init(|| RwLock::new(Arc::new(LocaleCatalog::default())))
}

/// Replaces the active catalog for the whole process.
///
/// The swap is a single atomic pointer replacement: a render racing with
/// the swap observes either the old or the new catalog, never a torn
/// template. Affects all models, including already-constructed ones.
pub fn set_locale(catalog: LocaleCatalog) {
    *active_cell().write().unwrap() = Arc::new(catalog);
}

/// Restores the built-in English catalog.
pub fn reset_locale() {
    set_locale(LocaleCatalog::default());
}

/// Snapshots the active catalog.
pub fn active_locale() -> Arc<LocaleCatalog> {
    active_cell().read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_renders_email_message() {
        let catalog = LocaleCatalog::default();
        let msg = catalog
            .render("email_invalid", &[("field", "email")])
            .unwrap();
        assert_eq!(msg, "email must be a valid email");
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let mut catalog = LocaleCatalog::new();
        catalog.insert("type_mismatch", "{field} must be of type {type}, got {actual}");
        let msg = catalog
            .render(
                "type_mismatch",
                &[("field", "age"), ("type", "number"), ("actual", "string")],
            )
            .unwrap();
        assert_eq!(msg, "age must be of type number, got string");
    }

    #[test]
    fn test_missing_key_fails_render() {
        let catalog = LocaleCatalog::new();
        let err = catalog.render("nope", &[]).unwrap_err();
        assert_eq!(err, LocaleError::MissingTemplate { key: "nope".into() });
    }

    #[test]
    fn test_fallback_template_used_for_missing_key() {
        let catalog = LocaleCatalog::new();
        let msg = catalog.render_or_fallback("nope", "email", "email", &[]);
        assert_eq!(msg, "email failed rule email");
    }

    #[test]
    fn test_unmatched_placeholder_left_verbatim() {
        let mut catalog = LocaleCatalog::new();
        catalog.insert("k", "{field} and {other}");
        let msg = catalog.render("k", &[("field", "x")]).unwrap();
        assert_eq!(msg, "x and {other}");
    }
}
