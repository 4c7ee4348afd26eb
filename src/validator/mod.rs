//! The validator contract and its building blocks.
//!
//! Everything in this crate either implements [`Validator`] directly or
//! wraps another implementation. Leaf validators live in [`leaf`],
//! logical combinators in [`combinators`], and container validators in
//! [`collection`].

mod collection;
mod combinators;
mod leaf;

pub use collection::{array, each, each_map, map, nested, slice, zero_or};
pub use combinators::{all, and, any, not, or, AllValidator, AnyValidator};
pub use leaf::{
    eq, gt, gte, is, is_in, len_slice, len_string, lt, lte, matches, matches_regex, ne, nonzero,
    not_in, range, rune_count, zero, PatternError,
};

use std::sync::Arc;

use crate::error::Errors;
use crate::field::Field;

/// The single-method capability every validator implements.
///
/// A validator inspects one field and returns the violations it found; an
/// empty [`Errors`] means the field is valid. Validators are immutable and
/// side-effect-free, so one instance can be shared and reused across
/// independent validation passes.
pub trait Validator: Send + Sync {
    /// Validates a field, returning every violation found.
    fn validate(&self, field: &Field) -> Errors;
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, field: &Field) -> Errors {
        (**self).validate(field)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, field: &Field) -> Errors {
        (**self).validate(field)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, field: &Field) -> Errors {
        (**self).validate(field)
    }
}

/// An adapter to allow the use of ordinary functions as validators.
///
/// If `f` is a function with the appropriate signature, `Func::new(f)` is a
/// [`Validator`] that calls `f`.
///
/// # Example
///
/// ```rust
/// use verdict::{Error, Errors, Field, Func, Validator};
///
/// let even = Func::new(|field: &Field| {
///     match field.value() {
///         verdict::Value::Int(n) if n % 2 == 0 => Errors::new(),
///         _ => Errors::single(Error::invalid(field.path().clone(), "is not even")),
///     }
/// });
///
/// assert!(even.validate(&Field::new("n", 4)).is_empty());
/// assert!(!even.validate(&Field::new("n", 3)).is_empty());
/// ```
pub struct Func<F>(F);

impl<F> Func<F>
where
    F: Fn(&Field) -> Errors + Send + Sync,
{
    /// Wraps a function as a validator.
    pub fn new(f: F) -> Self {
        Func(f)
    }
}

impl<F> Validator for Func<F>
where
    F: Fn(&Field) -> Errors + Send + Sync,
{
    fn validate(&self, field: &Field) -> Errors {
        (self.0)(field)
    }
}

/// Invokes a validator against the anonymous root field.
///
/// This is the entry point for one validation pass: schemas and the
/// container validators supply the actual values and names at each nesting
/// level below the root.
///
/// # Example
///
/// ```rust
/// use verdict::{len_string, nonzero, validate, Field, Schema};
///
/// let name = "gopher";
/// let age = 7;
/// let schema = Schema::new()
///     .field(Field::new("name", name), len_string(1, 10))
///     .field(Field::new("age", age), nonzero());
///
/// assert!(validate(&schema).is_empty());
/// ```
pub fn validate<V: Validator + ?Sized>(validator: &V) -> Errors {
    validator.validate(&Field::anonymous())
}

/// A validator with an overridable `Invalid` message.
///
/// Every leaf validator (and [`not`]) returns a `MessageValidator`, so the
/// default message can be replaced with [`msg`](MessageValidator::msg)
/// without touching the validation logic. Not calling `msg` keeps the
/// default; there is no empty-string sentinel.
///
/// # Example
///
/// ```rust
/// use verdict::{nonzero, Field, Validator};
///
/// let v = nonzero().msg("must be set");
/// let errs = v.validate(&Field::new("name", ""));
/// assert_eq!(errs.first().unwrap().message, "must be set");
/// ```
pub struct MessageValidator {
    default_message: &'static str,
    message: Option<String>,
    inner: Box<dyn Fn(&Field, &str) -> Errors + Send + Sync>,
}

impl MessageValidator {
    /// Creates a message validator whose inner check receives the current
    /// `Invalid` message on every invocation.
    pub(crate) fn new<F>(default_message: &'static str, inner: F) -> Self
    where
        F: Fn(&Field, &str) -> Errors + Send + Sync + 'static,
    {
        Self {
            default_message,
            message: None,
            inner: Box::new(inner),
        }
    }

    /// Overrides the `Invalid` message.
    pub fn msg(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the message currently in effect.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.default_message)
    }
}

impl Validator for MessageValidator {
    fn validate(&self, field: &Field) -> Errors {
        (self.inner)(field, self.message())
    }
}
