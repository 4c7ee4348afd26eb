//! Validation error types.
//!
//! See [`Error`] for a single kind-tagged failure and [`Errors`] for the
//! ordered collection validators return.

mod validation_error;

pub use validation_error::{Error, ErrorKind, Errors};
