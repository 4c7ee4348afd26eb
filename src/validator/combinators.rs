//! Logical combinators: conjunction, disjunction, negation.
//!
//! Also home to the two kind-propagation helpers, [`negate`] and
//! [`merge`], which the derived leaves are built from. Both decide what to
//! surface from the dominant (maximum) inner error kind, so an
//! `Unsupported` or `Unrecognized` produced anywhere inside a composite is
//! never converted into an `Invalid` or silently dropped.

use crate::error::{Error, ErrorKind, Errors};
use crate::validator::{MessageValidator, Validator};

/// Builds the logical negation of `inner`.
///
/// - inner found no violation: the negation is violated, one `Invalid`
///   with the current message.
/// - inner reported `Unsupported`: re-tagged `Unsupported` naming the
///   outer validator — callers must see the validator they invoked.
/// - inner reported `Unrecognized`: preserved, negation is meaningless
///   for an unknown type.
/// - inner reported only `Invalid`: the negation holds, no errors.
pub(crate) fn negate(
    name: &'static str,
    inner: impl Validator + 'static,
    default_message: &'static str,
) -> MessageValidator {
    MessageValidator::new(default_message, move |field, message| {
        let errs = inner.validate(field);
        match errs.max_kind() {
            None => Errors::single(Error::invalid(field.path().clone(), message)),
            Some(ErrorKind::Invalid) => Errors::new(),
            Some(ErrorKind::Unsupported) => Errors::single(Error::unsupported(
                field.path().clone(),
                name,
                field.value().kind(),
            )),
            Some(ErrorKind::Unrecognized) => {
                Errors::single(Error::unrecognized(field.path().clone()))
            }
        }
    })
}

/// Collapses the violations of a lower-level conjunction/disjunction into
/// one outer-facing result.
///
/// No inner errors passes through; an inner `Invalid` becomes one outer
/// `Invalid` with the current message; `Unsupported`/`Unrecognized` keep
/// their kind, re-tagged with the outer validator's name.
pub(crate) fn merge(
    name: &'static str,
    inner: impl Validator + 'static,
    default_message: &'static str,
) -> MessageValidator {
    MessageValidator::new(default_message, move |field, message| {
        let errs = inner.validate(field);
        match errs.max_kind() {
            None => Errors::new(),
            Some(ErrorKind::Invalid) => {
                Errors::single(Error::invalid(field.path().clone(), message))
            }
            Some(ErrorKind::Unsupported) => Errors::single(Error::unsupported(
                field.path().clone(),
                name,
                field.value().kind(),
            )),
            Some(ErrorKind::Unrecognized) => {
                Errors::single(Error::unrecognized(field.path().clone()))
            }
        }
    })
}

/// A validator that succeeds only when all sub-validators succeed.
///
/// Runs its sub-validators in order and short-circuits on the first
/// non-empty result.
pub struct AllValidator {
    validators: Vec<Box<dyn Validator>>,
}

impl Validator for AllValidator {
    fn validate(&self, field: &crate::field::Field) -> Errors {
        for validator in &self.validators {
            let errs = validator.validate(field);
            if !errs.is_empty() {
                return errs;
            }
        }
        Errors::new()
    }
}

/// Creates a validator which succeeds only when all sub-validators
/// succeed, short-circuiting on the first failure.
///
/// # Example
///
/// ```rust
/// use verdict::{all, is_in, len_string, nonzero, Field, Validator};
///
/// let v = all(vec![
///     Box::new(nonzero()),
///     Box::new(len_string(2, 5)),
///     Box::new(is_in(["ab", "abc"])),
/// ]);
///
/// assert!(v.validate(&Field::new("value", "abc")).is_empty());
/// ```
pub fn all(validators: Vec<Box<dyn Validator>>) -> AllValidator {
    AllValidator { validators }
}

/// Alias of [`all`].
pub fn and(validators: Vec<Box<dyn Validator>>) -> AllValidator {
    all(validators)
}

/// A validator that succeeds as long as any sub-validator succeeds.
///
/// When every sub-validator fails, the default is to return the
/// concatenation of all their errors; [`last_error`](AnyValidator::last_error)
/// switches to returning only the final sub-validator's errors, which
/// reads better when the sub-validators are alternatives for one rule.
pub struct AnyValidator {
    validators: Vec<Box<dyn Validator>>,
    return_last_error: bool,
}

impl AnyValidator {
    /// Makes this validator return only the last sub-validator's errors
    /// when all sub-validators fail.
    pub fn last_error(mut self) -> Self {
        self.return_last_error = true;
        self
    }
}

impl Validator for AnyValidator {
    fn validate(&self, field: &crate::field::Field) -> Errors {
        let mut all_errs = Errors::new();
        let mut last_errs = Errors::new();

        for validator in &self.validators {
            last_errs = validator.validate(field);
            if last_errs.is_empty() {
                return Errors::new();
            }
            all_errs.extend_from(last_errs.clone());
        }

        if self.return_last_error {
            last_errs
        } else {
            all_errs
        }
    }
}

/// Creates a validator which succeeds as long as any sub-validator
/// succeeds, short-circuiting on the first success.
///
/// # Example
///
/// ```rust
/// use verdict::{any, len_string, nonzero, Field, Validator};
///
/// let v = any(vec![Box::new(nonzero()), Box::new(len_string(2, 5))]);
/// assert!(v.validate(&Field::new("value", "a")).is_empty());
/// ```
pub fn any(validators: Vec<Box<dyn Validator>>) -> AnyValidator {
    AnyValidator {
        validators,
        return_last_error: false,
    }
}

/// Alias of [`any`].
pub fn or(validators: Vec<Box<dyn Validator>>) -> AnyValidator {
    any(validators)
}

/// Creates a validator which succeeds when the given validator fails.
///
/// Type-mismatch errors stay transparent: an inner `Unsupported` or
/// `Unrecognized` is surfaced, never inverted into a success.
///
/// # Example
///
/// ```rust
/// use verdict::{any, len_string, nonzero, not, Field, Validator};
///
/// let v = not(any(vec![Box::new(nonzero()), Box::new(len_string(2, 5))]))
///     .msg("is not ok");
/// let errs = v.validate(&Field::new("value", "a"));
/// assert_eq!(errs.first().unwrap().message, "is not ok");
/// ```
pub fn not(validator: impl Validator + 'static) -> MessageValidator {
    negate("Not", validator, "is invalid")
}
