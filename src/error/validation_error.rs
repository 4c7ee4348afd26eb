//! Kind-tagged validation errors and their ordered collection.

use std::fmt::{self, Display};

use crate::path::FieldPath;
use crate::value::ValueKind;

/// The severity class of a validation error.
///
/// The ordering encodes dominance: when a composite validator has to
/// collapse several inner errors into one outer result, the maximum kind
/// wins (`Unrecognized > Unsupported > Invalid`). Negation and merging
/// never downgrade an `Unsupported`/`Unrecognized` to `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The value was inspected and violates the declared rule.
    ///
    /// User-facing; always safe to accumulate and display.
    Invalid,
    /// The value's kind is not one this validator accepts.
    ///
    /// Signals a schema-authoring defect (e.g. a length check on an
    /// integer), not a data problem.
    Unsupported,
    /// The value's type is outside what the engine models at all.
    ///
    /// Strictly more severe than `Unsupported`; dominates it in
    /// composites.
    Unrecognized,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Invalid => "INVALID",
            ErrorKind::Unsupported => "UNSUPPORTED",
            ErrorKind::Unrecognized => "UNRECOGNIZED",
        };
        write!(f, "{}", name)
    }
}

/// A single validation error.
///
/// Carries the fully qualified path at the point the error was raised, the
/// error's kind, and a human-readable message. Immutable after creation.
///
/// # Example
///
/// ```rust
/// use verdict::{Error, ErrorKind, FieldPath};
///
/// let error = Error::invalid(FieldPath::from("age"), "is zero valued");
/// assert_eq!(error.kind, ErrorKind::Invalid);
/// assert_eq!(error.to_string(), "age: INVALID(is zero valued)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The path to the value that failed validation.
    pub path: FieldPath,
    /// The severity class of the failure.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl Error {
    /// Creates a new error with the given path, kind and message.
    pub fn new(path: FieldPath, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }

    /// Creates an `Invalid` error: the value violates the declared rule.
    pub fn invalid(path: FieldPath, message: impl Into<String>) -> Self {
        Self::new(path, ErrorKind::Invalid, message)
    }

    /// Creates an `Unsupported` error naming the validator that was
    /// applied to an incompatible value kind.
    pub fn unsupported(path: FieldPath, validator: &str, kind: ValueKind) -> Self {
        Self::new(
            path,
            ErrorKind::Unsupported,
            format!("cannot use validator `{}` on {} value", validator, kind),
        )
    }

    /// Creates an `Unrecognized` error: the value's type is outside what
    /// the engine models.
    pub fn unrecognized(path: FieldPath) -> Self {
        Self::new(path, ErrorKind::Unrecognized, "of an unrecognized type")
    }
}

impl Display for Error {
    /// Renders the canonical form `"<path>: <KIND>(<message>)"`, omitting
    /// the path prefix for anonymous values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}({})", self.kind, self.message)
        } else {
            write!(f, "{}: {}({})", self.path, self.kind, self.message)
        }
    }
}

impl std::error::Error for Error {}

// Error is Send + Sync since all fields are owned types. These assertions
// keep that true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Error>();
    assert_sync::<Error>();
};

/// An ordered, duplicate-permitting collection of validation errors.
///
/// An empty `Errors` means "no violation" — this is how every validator
/// reports success. Ordering follows validator execution order.
///
/// # Example
///
/// ```rust
/// use verdict::{Error, Errors, FieldPath};
///
/// let mut errors = Errors::new();
/// assert!(errors.is_empty());
///
/// errors.append(Error::invalid(FieldPath::from("name"), "is zero valued"));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Errors(Vec<Error>);

impl Errors {
    /// Creates an empty collection (no violation).
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a collection containing a single error.
    pub fn single(error: Error) -> Self {
        Self(vec![error])
    }

    /// Appends one error.
    pub fn append(&mut self, error: Error) {
        self.0.push(error);
    }

    /// Appends every error from `other`.
    pub fn extend_from(&mut self, other: Errors) {
        self.0.extend(other.0);
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is no violation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.0.iter()
    }

    /// Returns the first error, if any.
    pub fn first(&self) -> Option<&Error> {
        self.0.first()
    }

    /// Returns the last error, if any.
    pub fn last(&self) -> Option<&Error> {
        self.0.last()
    }

    /// Returns the dominant (maximum) kind among the contained errors.
    pub fn max_kind(&self) -> Option<ErrorKind> {
        self.0.iter().map(|e| e.kind).max()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &FieldPath) -> Vec<&Error> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors with the specified kind.
    pub fn with_kind(&self, kind: ErrorKind) -> Vec<&Error> {
        self.0.iter().filter(|e| e.kind == kind).collect()
    }

    /// Converts this collection into a `Vec<Error>`.
    pub fn into_vec(self) -> Vec<Error> {
        self.0
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        Errors::single(error)
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Error> for Errors {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Errors>();
    assert_sync::<Errors>();
};
