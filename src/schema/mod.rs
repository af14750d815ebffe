//! Schema subsystem: declaration types, construction-time errors, and the
//! field schema compiler.
//!
//! # Design Principles
//!
//! - Schemas are compiled once, at model construction
//! - Unknown types and rules fail construction, not validation
//! - Compiled schemas are immutable
//! - Declaration order is validation order

mod compiler;
mod errors;
mod types;

pub use compiler::{compile, compile_schema, CompiledRule, FieldSchema};
pub use errors::{SchemaError, SchemaResult};
pub use types::{json_type_name, FieldDecl, FieldMeta, SchemaDecl, TypeTag};
