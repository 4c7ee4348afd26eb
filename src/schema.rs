//! Field-to-validator mappings.

use crate::error::Errors;
use crate::field::Field;
use crate::validator::Validator;
use crate::value::Value;

/// An ordered mapping from fields to their validators.
///
/// A schema validates every entry independently and aggregates the
/// results — unlike [`all`](crate::all), it never short-circuits, so the
/// caller always receives the complete violation set for a record. Entry
/// order is the declaration order, which makes error ordering
/// deterministic.
///
/// When a schema is nested (validated against a non-anonymous field), the
/// outer field's path is prefixed to every entry's path.
///
/// # Example
///
/// ```rust
/// use verdict::{len_string, nonzero, validate, Field, Schema};
///
/// let name = "";
/// let age = 0;
/// let schema = Schema::new()
///     .field(Field::new("name", name), len_string(1, 5))
///     .field(Field::new("age", age), nonzero());
///
/// let errs = validate(&schema);
/// assert_eq!(errs.len(), 2);
/// assert_eq!(
///     errs.first().unwrap().to_string(),
///     "name: INVALID(has an invalid length)"
/// );
/// ```
#[derive(Default)]
pub struct Schema {
    entries: Vec<(Field, Box<dyn Validator>)>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and its validator.
    pub fn field(mut self, field: Field, validator: impl Validator + 'static) -> Self {
        self.entries.push((field, Box::new(validator)));
        self
    }

    /// Creates a schema for a single anonymous value.
    ///
    /// The shortcut for validating a bare value: errors carry whatever
    /// path the enclosing context supplies, or no path at all at the
    /// root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{range, validate, Schema};
    ///
    /// let errs = validate(&Schema::value(12, range(0, 10)));
    /// assert_eq!(errs.first().unwrap().to_string(), "INVALID(is not between the given range)");
    /// ```
    pub fn value(value: impl Into<Value>, validator: impl Validator + 'static) -> Self {
        Self::new().field(Field::new("", value), validator)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the schema has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Validator for Schema {
    /// Validates every entry against the outer field's path prefix and
    /// aggregates all resulting errors.
    fn validate(&self, field: &Field) -> Errors {
        let mut errs = Errors::new();
        for (child, validator) in &self.entries {
            let path = field.path().join(child.path());
            let prefixed = Field::at(path, child.value().clone());
            errs.extend_from(validator.validate(&prefixed));
        }
        errs
    }
}
