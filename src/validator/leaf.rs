//! Leaf validators: self-contained predicate checks.
//!
//! Every leaf shares one dispatch core: an opaque value reports
//! `Unrecognized`, a value whose kind is outside the validator's accepted
//! set reports `Unsupported` (naming the validator), a failed predicate
//! reports `Invalid` with the validator's overridable default message, and
//! anything else passes.
//!
//! The derived leaves (`zero`, `ne`, `gte`, `lte`, `not_in`) are built by
//! negating their positive counterparts; externally they behave exactly
//! like direct implementations.

use regex::bytes::Regex;

use crate::error::{Error, Errors};
use crate::validator::combinators::{all, merge, negate};
use crate::validator::MessageValidator;
use crate::value::{Value, ValueKind};

/// An invalid regular expression was given to [`matches`].
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// The shared leaf core: kind gate plus predicate.
fn leaf<A, P>(
    name: &'static str,
    default_message: &'static str,
    accepts: A,
    pred: P,
) -> MessageValidator
where
    A: Fn(ValueKind) -> bool + Send + Sync + 'static,
    P: Fn(&Value) -> bool + Send + Sync + 'static,
{
    MessageValidator::new(default_message, move |field, message| {
        let value = field.value();
        if value.kind() == ValueKind::Opaque {
            return Errors::single(Error::unrecognized(field.path().clone()));
        }
        if !accepts(value.kind()) {
            return Errors::single(Error::unsupported(
                field.path().clone(),
                name,
                value.kind(),
            ));
        }
        if !pred(value) {
            return Errors::single(Error::invalid(field.path().clone(), message));
        }
        Errors::new()
    })
}

/// Succeeds when the field's value is nonzero.
///
/// # Example
///
/// ```rust
/// use verdict::{nonzero, Field, Validator};
///
/// assert!(nonzero().validate(&Field::new("name", "gopher")).is_empty());
/// assert!(!nonzero().validate(&Field::new("name", "")).is_empty());
/// ```
pub fn nonzero() -> MessageValidator {
    leaf(
        "Nonzero",
        "is zero valued",
        ValueKind::is_equatable,
        |v| !v.is_zero(),
    )
}

/// Succeeds when the field's value is zero.
pub fn zero() -> MessageValidator {
    negate("Zero", nonzero(), "is nonzero")
}

/// Succeeds when the byte length of the string field is between `min` and
/// `max`, inclusive.
pub fn len_string(min: usize, max: usize) -> MessageValidator {
    leaf(
        "LenString",
        "has an invalid length",
        |k| k == ValueKind::Str,
        move |v| match v.as_str() {
            Some(s) => (min..=max).contains(&s.len()),
            None => false,
        },
    )
}

/// Succeeds when the length of the sequence (or byte-string) field is
/// between `min` and `max`, inclusive.
pub fn len_slice(min: usize, max: usize) -> MessageValidator {
    leaf(
        "LenSlice",
        "has an invalid length",
        |k| matches!(k, ValueKind::Seq | ValueKind::Bytes),
        move |v| {
            let len = match v {
                Value::Seq(s) => s.len(),
                Value::Bytes(b) => b.len(),
                _ => return false,
            };
            (min..=max).contains(&len)
        },
    )
}

/// Succeeds when the number of Unicode scalar values in the string (or
/// byte-string) field is between `min` and `max`, inclusive.
pub fn rune_count(min: usize, max: usize) -> MessageValidator {
    leaf(
        "RuneCount",
        "the number of runes is not between the given range",
        |k| matches!(k, ValueKind::Str | ValueKind::Bytes),
        move |v| {
            let count = match v {
                Value::Str(s) => s.chars().count(),
                Value::Bytes(b) => String::from_utf8_lossy(b).chars().count(),
                _ => return false,
            };
            (min..=max).contains(&count)
        },
    )
}

/// Succeeds when the field's value equals the given value.
///
/// The field's kind must be compatible with the constant's kind (the same
/// kind, or both numeric); otherwise the check reports `Unsupported`.
pub fn eq(value: impl Into<Value>) -> MessageValidator {
    let value = value.into();
    let kind = value.kind();
    leaf(
        "Eq",
        "does not equal the given value",
        move |k| k.is_compatible_with(kind),
        move |v| *v == value,
    )
}

/// Succeeds when the field's value does not equal the given value.
pub fn ne(value: impl Into<Value>) -> MessageValidator {
    negate("Ne", eq(value), "equals the given value")
}

/// Kind gate shared by the ordering leaves.
fn ordered_with(kind: ValueKind) -> impl Fn(ValueKind) -> bool + Send + Sync + 'static {
    move |k| k.is_ordered() && k.is_compatible_with(kind)
}

/// Succeeds when the field's value is greater than the given value.
pub fn gt(value: impl Into<Value>) -> MessageValidator {
    let value = value.into();
    leaf(
        "Gt",
        "is lower than or equal to the given value",
        ordered_with(value.kind()),
        move |v| v.compare(&value) == Some(std::cmp::Ordering::Greater),
    )
}

/// Succeeds when the field's value is lower than the given value.
pub fn lt(value: impl Into<Value>) -> MessageValidator {
    let value = value.into();
    leaf(
        "Lt",
        "is greater than or equal to the given value",
        ordered_with(value.kind()),
        move |v| v.compare(&value) == Some(std::cmp::Ordering::Less),
    )
}

/// Succeeds when the field's value is greater than or equal to the given
/// value.
pub fn gte(value: impl Into<Value>) -> MessageValidator {
    negate("Gte", lt(value), "is lower than the given value")
}

/// Succeeds when the field's value is lower than or equal to the given
/// value.
pub fn lte(value: impl Into<Value>) -> MessageValidator {
    negate("Lte", gt(value), "is greater than the given value")
}

/// Succeeds when the field's value is between `min` and `max`, inclusive.
pub fn range(min: impl Into<Value>, max: impl Into<Value>) -> MessageValidator {
    merge(
        "Range",
        all(vec![Box::new(gte(min)), Box::new(lte(max))]),
        "is not between the given range",
    )
}

/// Succeeds when the field's value equals one of the given values.
///
/// # Example
///
/// ```rust
/// use verdict::{is_in, Field, Validator};
///
/// let v = is_in(["a", "ab", "abc"]);
/// assert!(v.validate(&Field::new("value", "ab")).is_empty());
/// assert!(!v.validate(&Field::new("value", "x")).is_empty());
/// ```
pub fn is_in<I>(values: I) -> MessageValidator
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    let kinds: Vec<ValueKind> = values.iter().map(Value::kind).collect();
    leaf(
        "In",
        "is not one of the given values",
        move |k| {
            k.is_equatable()
                && (kinds.is_empty() || kinds.iter().any(|kind| k.is_compatible_with(*kind)))
        },
        move |v| values.iter().any(|value| value == v),
    )
}

/// Succeeds when the field's value equals none of the given values.
pub fn not_in<I>(values: I) -> MessageValidator
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    negate("Nin", is_in(values), "is one of the given values")
}

/// Succeeds when the string (or byte-string) field matches the given
/// regular expression pattern.
///
/// The pattern is compiled eagerly; an invalid pattern is a construction
/// error, not a validation result.
///
/// # Example
///
/// ```rust
/// use verdict::{matches, Field, Validator};
///
/// let v = matches(r"^\d+$").unwrap();
/// assert!(v.validate(&Field::new("code", "12345")).is_empty());
/// assert!(!v.validate(&Field::new("code", "abc")).is_empty());
/// ```
pub fn matches(pattern: &str) -> Result<MessageValidator, PatternError> {
    Ok(matches_regex(Regex::new(pattern)?))
}

/// Succeeds when the string (or byte-string) field matches the given
/// compiled regular expression.
pub fn matches_regex(re: Regex) -> MessageValidator {
    leaf(
        "Match",
        "does not match the given regular expression",
        |k| matches!(k, ValueKind::Str | ValueKind::Bytes),
        move |v| match v {
            Value::Str(s) => re.is_match(s.as_bytes()),
            Value::Bytes(b) => re.is_match(b),
            _ => false,
        },
    )
}

/// Succeeds when the predicate returns true for the field's value.
///
/// The catch-all leaf for rules the catalogue doesn't cover; accepts any
/// recognized value kind.
pub fn is<P>(pred: P) -> MessageValidator
where
    P: Fn(&Value) -> bool + Send + Sync + 'static,
{
    leaf("Is", "is invalid", ValueKind::is_equatable, pred)
}
