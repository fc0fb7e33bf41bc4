//! Violation reporting for schema validation.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Outcome of validating a value: the normalized value or every violation.
pub type Validated = Result<Value, SchemaViolations>;

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member.
    Key(&'static str),
    /// Array element.
    Index(usize),
}

/// Location of a violation inside the validated value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Returns the root path.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the path segments from the root.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) if first => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    path: FieldPath,
    message: String,
}

impl Violation {
    /// Creates a violation at `path`.
    pub fn new(path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Returns where the violation occurred.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.segments().is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Every violation found in one validation pass, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_violations(.0))]
pub struct SchemaViolations(Vec<Violation>);

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SchemaViolations {
    pub(crate) const fn new(violations: Vec<Violation>) -> Self {
        Self(violations)
    }

    /// Returns the violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Returns the messages in the order they were found.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|v| v.message.clone()).collect()
    }

    /// Consumes the collection, returning the messages in order.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.0.into_iter().map(|v| v.message).collect()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Errors returned when parsing input into a typed value.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input violated the schema.
    #[error(transparent)]
    Invalid(#[from] SchemaViolations),

    /// The normalized value did not match the target type.
    #[error("validated value could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
