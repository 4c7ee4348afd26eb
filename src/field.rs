//! The (name, value) pair a validator inspects.

use crate::path::FieldPath;
use crate::value::Value;

/// A named value under validation.
///
/// A `Field` pairs a [`FieldPath`] with the [`Value`] to check. Fields are
/// immutable; composite validators derive new fields (with extended paths)
/// rather than mutating existing ones.
///
/// # Example
///
/// ```rust
/// use verdict::Field;
///
/// let field = Field::new("age", 27);
/// assert_eq!(field.path().to_string(), "age");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    path: FieldPath,
    value: Value,
}

impl Field {
    /// Creates a field from a name and a value.
    ///
    /// An empty name produces an anonymous field (root path), used for
    /// validating a bare value.
    pub fn new(name: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        Self {
            path: name.into(),
            value: value.into(),
        }
    }

    /// Creates a field at an explicit path, used by composite validators
    /// when extending the path of an outer field.
    pub fn at(path: FieldPath, value: Value) -> Self {
        Self { path, value }
    }

    /// Creates the anonymous root field validation starts from.
    pub fn anonymous() -> Self {
        Self {
            path: FieldPath::root(),
            value: Value::Nil,
        }
    }

    /// Returns the field's path.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Returns the field's value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
