//! Declarative validation of untyped JSON input.
//!
//! A [`Schema`] describes the accepted shape of a `serde_json::Value`:
//! nested objects, required/optional/defaulted fields, arrays, strings
//! with length and pattern checks, bounded numbers, booleans and string
//! enums. Validation either yields a normalized value (defaults applied,
//! undeclared keys dropped, absent optionals omitted) or the ordered list
//! of every violated rule. It never yields both.
//!
//! # Example
//!
//! ```
//! use portwire::schema::{ObjectSchema, Schema};
//! use serde_json::json;
//!
//! let schema = ObjectSchema::new()
//!     .required("name", Schema::string().non_empty("Name is required"))
//!     .with_default("tags", Schema::array(Schema::string()), json!([]));
//!
//! let normalized = schema.validate(&json!({ "name": "bot", "extra": 1 }));
//! assert_eq!(normalized.ok(), Some(json!({ "name": "bot", "tags": [] })));
//!
//! let violations = schema.validate(&json!({ "name": "" })).err();
//! assert_eq!(
//!     violations.map(|v| v.messages()),
//!     Some(vec!["Name is required".to_owned()]),
//! );
//! ```

mod error;
mod node;
mod object;
mod rules;

pub use error::{FieldPath, PathSegment, SchemaError, SchemaViolations, Validated, Violation};
pub use node::Schema;
pub use object::{Field, ObjectSchema, Presence};
pub use rules::{EnumSchema, NumberSchema, StringSchema, is_email};

#[cfg(test)]
mod tests;
