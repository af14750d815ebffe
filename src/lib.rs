//! valify - a strict, deterministic, schema-driven object validator
//!
//! A caller declares a model as a mapping from field name to a type and a
//! set of validation rules; the compiled [`Model`] either returns the
//! candidate object (with declared defaults filled in) or fails with a
//! single localized, human-readable message identifying the field and rule
//! that rejected it.
//!
//! ```
//! use serde_json::json;
//! use valify::{FieldDecl, Model, SchemaDecl, TypeTag};
//!
//! let model = Model::new(
//!     SchemaDecl::new().field(
//!         "email",
//!         FieldDecl::new(TypeTag::String).rule("email", json!(true)),
//!     ),
//! )
//! .unwrap();
//!
//! let err = model.validate(&json!({ "email": "red0" })).unwrap_err();
//! assert_eq!(err.message(), "email must be a valid email");
//!
//! assert!(model.validate(&json!({ "email": "test@test.com" })).is_ok());
//! ```

pub mod locale;
pub mod model;
pub mod rules;
pub mod schema;

pub use locale::{active_locale, reset_locale, set_locale, LocaleCatalog, LocaleError};
pub use model::{FailureKind, Model, ValidationError, ValidationResult};
pub use rules::{Rule, RulePredicate, RuleRegistry};
pub use schema::{FieldDecl, FieldMeta, SchemaDecl, SchemaError, SchemaResult, TypeTag};
