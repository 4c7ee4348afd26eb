//! Container validators: nested records, maps, sequences.
//!
//! These combinators iterate a field's container value and validate each
//! element against a synthetic field whose path is the outer path with
//! `[key]` or `[index]` appended. Per-element validator factories receive
//! the whole container explicitly, so element rules can depend on the
//! actual data without capturing loop variables.

use indexmap::IndexMap;

use crate::error::{Error, Errors};
use crate::field::Field;
use crate::validator::combinators::any;
use crate::validator::leaf::zero;
use crate::validator::{AnyValidator, Func, Validator};
use crate::value::{Value, ValueMap};

/// Creates a validator which delegates to the validator returned by `f`.
///
/// The field's value must be a map-shaped record; `f` receives it and
/// returns the inner validator (typically a `Schema`), so the inner rules
/// can reference the actual values. Paths compose through the outer
/// field.
///
/// # Example
///
/// ```rust
/// use verdict::{nested, nonzero, validate, Field, Schema, Value};
///
/// let author: Value = vec![("name", ""), ("bio", "hi")].into_iter().collect();
/// let schema = Schema::new().field(
///     Field::new("author", author),
///     nested(|m| {
///         Schema::new().field(Field::new("name", m["name"].clone()), nonzero())
///     }),
/// );
///
/// let errs = validate(&schema);
/// assert_eq!(errs.first().unwrap().to_string(), "author.name: INVALID(is zero valued)");
/// ```
pub fn nested<F, V>(f: F) -> impl Validator
where
    F: Fn(&ValueMap) -> V + Send + Sync + 'static,
    V: Validator,
{
    Func::new(move |field: &Field| match field.value() {
        Value::Opaque(_) => Errors::single(Error::unrecognized(field.path().clone())),
        Value::Map(m) => f(m).validate(field),
        v => Errors::single(Error::unsupported(
            field.path().clone(),
            "Nested",
            v.kind(),
        )),
    })
}

/// Creates a validator which validates map entries per the validators
/// returned by `f`.
///
/// `f` receives the whole map and returns a validator per key; each entry
/// is validated against a field path extended with `[key]`. A key with no
/// corresponding entry validates [`Value::Nil`]. All element errors are
/// aggregated.
pub fn map<F>(f: F) -> impl Validator
where
    F: Fn(&ValueMap) -> IndexMap<String, Box<dyn Validator>> + Send + Sync + 'static,
{
    Func::new(move |field: &Field| match field.value() {
        Value::Opaque(_) => Errors::single(Error::unrecognized(field.path().clone())),
        Value::Map(m) => {
            let mut errs = Errors::new();
            for (key, validator) in f(m) {
                let value = m.get(&key).cloned().unwrap_or(Value::Nil);
                let child = Field::at(field.path().push_key(key.as_str()), value);
                errs.extend_from(validator.validate(&child));
            }
            errs
        }
        v => Errors::single(Error::unsupported(field.path().clone(), "Map", v.kind())),
    })
}

/// Creates a validator which validates sequence elements per the
/// validators returned by `f`.
///
/// `f` receives the whole sequence and returns one validator per index;
/// element `i` is validated against a field path extended with `[i]`. All
/// element errors are aggregated.
pub fn slice<F>(f: F) -> impl Validator
where
    F: Fn(&[Value]) -> Vec<Box<dyn Validator>> + Send + Sync + 'static,
{
    Func::new(move |field: &Field| match field.value() {
        Value::Opaque(_) => Errors::single(Error::unrecognized(field.path().clone())),
        Value::Seq(s) => {
            let mut errs = Errors::new();
            for (i, validator) in f(s).into_iter().enumerate() {
                let value = s.get(i).cloned().unwrap_or(Value::Nil);
                let child = Field::at(field.path().push_index(i), value);
                errs.extend_from(validator.validate(&child));
            }
            errs
        }
        v => Errors::single(Error::unsupported(field.path().clone(), "Slice", v.kind())),
    })
}

/// Alias of [`slice`].
pub fn array<F>(f: F) -> impl Validator
where
    F: Fn(&[Value]) -> Vec<Box<dyn Validator>> + Send + Sync + 'static,
{
    slice(f)
}

/// Creates a validator which applies one validator to every element of a
/// sequence field, aggregating all element errors.
///
/// # Example
///
/// ```rust
/// use verdict::{each, nonzero, Field, Validator};
///
/// let v = each(nonzero());
/// let errs = v.validate(&Field::new("tags", vec!["a", "", "c"]));
/// assert_eq!(errs.first().unwrap().to_string(), "tags[1]: INVALID(is zero valued)");
/// ```
pub fn each(validator: impl Validator + 'static) -> impl Validator {
    Func::new(move |field: &Field| match field.value() {
        Value::Opaque(_) => Errors::single(Error::unrecognized(field.path().clone())),
        Value::Seq(s) => {
            let mut errs = Errors::new();
            for (i, elem) in s.iter().enumerate() {
                let child = Field::at(field.path().push_index(i), elem.clone());
                errs.extend_from(validator.validate(&child));
            }
            errs
        }
        v => Errors::single(Error::unsupported(field.path().clone(), "Each", v.kind())),
    })
}

/// Creates a validator which applies one validator to every value of a
/// map field, aggregating all element errors.
///
/// # Example
///
/// ```rust
/// use verdict::{each_map, nonzero, Field, Validator, Value};
///
/// let stats: Value = vec![("foo", 0), ("bar", 1)].into_iter().collect();
/// let errs = each_map(nonzero()).validate(&Field::new("stats", stats));
/// assert_eq!(errs.first().unwrap().to_string(), "stats[foo]: INVALID(is zero valued)");
/// ```
pub fn each_map(validator: impl Validator + 'static) -> impl Validator {
    Func::new(move |field: &Field| match field.value() {
        Value::Opaque(_) => Errors::single(Error::unrecognized(field.path().clone())),
        Value::Map(m) => {
            let mut errs = Errors::new();
            for (key, value) in m {
                let child = Field::at(field.path().push_key(key.as_str()), value.clone());
                errs.extend_from(validator.validate(&child));
            }
            errs
        }
        v => Errors::single(Error::unsupported(
            field.path().clone(),
            "EachMap",
            v.kind(),
        )),
    })
}

/// Creates a validator which succeeds if the field's value is zero, or if
/// the given validator succeeds.
///
/// On failure, only the given validator's errors are returned.
pub fn zero_or(validator: impl Validator + 'static) -> AnyValidator {
    any(vec![Box::new(zero()), Box::new(validator)]).last_error()
}
