//! Object schemas and field presence rules.

use super::node::type_mismatch;
use super::{FieldPath, PathSegment, Schema, SchemaError, SchemaViolations, Validated, Violation};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// How a field behaves when it is absent from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    /// Absence is a violation reported as `Required`.
    Required,
    /// Absence is accepted and the field is omitted from the output.
    Optional,
    /// Absence is replaced by the given value, which is then validated.
    Default(Value),
}

/// A declared object member.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    schema: Schema,
    presence: Presence,
}

impl Field {
    /// Returns the member name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the member schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the presence rule.
    #[must_use]
    pub const fn presence(&self) -> &Presence {
        &self.presence
    }
}

/// Object schema with fields validated in declaration order.
///
/// Members that are not declared are dropped from the normalized output.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<Field>,
}

impl ObjectSchema {
    /// Creates an object schema without fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    #[must_use]
    pub fn required(self, name: &'static str, schema: impl Into<Schema>) -> Self {
        self.field(name, schema, Presence::Required)
    }

    /// Declares an optional field.
    #[must_use]
    pub fn optional(self, name: &'static str, schema: impl Into<Schema>) -> Self {
        self.field(name, schema, Presence::Optional)
    }

    /// Declares a field that falls back to `default` when absent.
    #[must_use]
    pub fn with_default(self, name: &'static str, schema: impl Into<Schema>, default: Value) -> Self {
        self.field(name, schema, Presence::Default(default))
    }

    /// Declares a field with an explicit presence rule.
    #[must_use]
    pub fn field(mut self, name: &'static str, schema: impl Into<Schema>, presence: Presence) -> Self {
        self.fields.push(Field {
            name,
            schema: schema.into(),
            presence,
        });
        self
    }

    /// Returns the declared fields in order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Validates `value`, returning the normalized value or every violation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaViolations`] listing every violated rule in
    /// declaration order.
    pub fn validate(&self, value: &Value) -> Validated {
        let mut path = FieldPath::root();
        let mut violations = Vec::new();
        let normalized = self.check(value, &mut path, &mut violations);
        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(SchemaViolations::new(violations))
        }
    }

    /// Validates `value` and decodes the normalized result into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] when the input violates the schema
    /// and [`SchemaError::Decode`] when the normalized value does not fit
    /// `T`.
    pub fn parse<T: DeserializeOwned>(&self, value: &Value) -> Result<T, SchemaError> {
        let normalized = self.validate(value)?;
        Ok(serde_json::from_value(normalized)?)
    }

    pub(super) fn check(
        &self,
        value: &Value,
        path: &mut FieldPath,
        violations: &mut Vec<Violation>,
    ) -> Value {
        let Some(members) = value.as_object() else {
            violations.push(type_mismatch(path, "object", value));
            return Value::Null;
        };

        let mut normalized = Map::new();
        for field in &self.fields {
            path.push(PathSegment::Key(field.name));
            let member = match (members.get(field.name), &field.presence) {
                (Some(present), _) => Some(field.schema.check(present, path, violations)),
                (None, Presence::Required) => {
                    violations.push(Violation::new(path.clone(), "Required"));
                    None
                }
                (None, Presence::Optional) => None,
                (None, Presence::Default(fallback)) => {
                    Some(field.schema.check(fallback, path, violations))
                }
            };
            path.pop();
            if let Some(checked) = member {
                normalized.insert(field.name.to_owned(), checked);
            }
        }
        Value::Object(normalized)
    }
}
