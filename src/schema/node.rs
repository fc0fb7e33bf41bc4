//! Schema tree and the validating traversal.

use super::{
    EnumSchema, FieldPath, NumberSchema, ObjectSchema, PathSegment, SchemaViolations,
    StringSchema, Validated, Violation,
};
use serde_json::Value;

/// A node in a declarative schema tree.
#[derive(Debug, Clone)]
pub enum Schema {
    /// String leaf.
    String(StringSchema),
    /// Number leaf.
    Number(NumberSchema),
    /// Boolean leaf.
    Boolean,
    /// String enum leaf.
    Enum(EnumSchema),
    /// Homogeneous array.
    Array(Box<Self>),
    /// Object with declared fields.
    Object(ObjectSchema),
}

impl Schema {
    /// Starts a string schema.
    #[must_use]
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Starts a number schema.
    #[must_use]
    pub const fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a boolean schema.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Boolean
    }

    /// Creates a string enum schema.
    pub fn one_of(options: impl IntoIterator<Item = &'static str>) -> Self {
        Self::Enum(EnumSchema::new(options))
    }

    /// Creates an array schema whose items follow `item`.
    pub fn array(item: impl Into<Self>) -> Self {
        Self::Array(Box::new(item.into()))
    }

    /// Starts an object schema.
    #[must_use]
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Validates `value`, returning the normalized value or every violation.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaViolations`] listing every violated rule in schema
    /// order.
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

    pub(super) fn check(
        &self,
        value: &Value,
        path: &mut FieldPath,
        violations: &mut Vec<Violation>,
    ) -> Value {
        match self {
            Self::String(schema) => {
                if let Some(text) = value.as_str() {
                    schema.check(text, path, violations);
                } else {
                    violations.push(type_mismatch(path, "string", value));
                }
                value.clone()
            }
            Self::Number(schema) => {
                if let Some(number) = value.as_f64() {
                    schema.check(number, path, violations);
                } else {
                    violations.push(type_mismatch(path, "number", value));
                }
                value.clone()
            }
            Self::Boolean => {
                if !value.is_boolean() {
                    violations.push(type_mismatch(path, "boolean", value));
                }
                value.clone()
            }
            Self::Enum(schema) => {
                schema.check(value, path, violations);
                value.clone()
            }
            Self::Array(item) => {
                let Some(items) = value.as_array() else {
                    violations.push(type_mismatch(path, "array", value));
                    return Value::Null;
                };
                let mut normalized = Vec::with_capacity(items.len());
                for (index, element) in items.iter().enumerate() {
                    path.push(PathSegment::Index(index));
                    normalized.push(item.check(element, path, violations));
                    path.pop();
                }
                Value::Array(normalized)
            }
            Self::Object(schema) => schema.check(value, path, violations),
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Self::String(schema)
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Self::Number(schema)
    }
}

impl From<EnumSchema> for Schema {
    fn from(schema: EnumSchema) -> Self {
        Self::Enum(schema)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Self::Object(schema)
    }
}

pub(super) fn type_mismatch(path: &FieldPath, expected: &str, value: &Value) -> Violation {
    Violation::new(
        path.clone(),
        format!("Expected {expected}, received {}", kind_of(value)),
    )
}

pub(super) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
