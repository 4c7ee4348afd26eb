//! # Verdict
//!
//! A composable, declaration-based validation library. Validation rules
//! are ordinary values — no reflection, no metadata tags, no code
//! generation — and failures come back as a precise, path-qualified list
//! of errors.
//!
//! ## Overview
//!
//! A [`Schema`] maps named [`Field`]s to [`Validator`]s and aggregates
//! every violation instead of stopping at the first one. Validators
//! compose: leaf checks like [`nonzero`] and [`range`] combine through
//! [`all`], [`any`] and [`not`], and nest through [`nested`], [`each`]
//! and friends, with error paths composed across arbitrary depth
//! (`comments[0].author.name`).
//!
//! Errors carry one of three kinds with strict dominance
//! (`Unrecognized > Unsupported > Invalid`): `Invalid` is a data problem,
//! the other two flag schema-authoring defects and are never masked by
//! negation or merging.
//!
//! ## Core Types
//!
//! - [`Value`]: the sealed dynamic value model validators inspect
//! - [`Field`]: a (path, value) pair under validation
//! - [`Error`] / [`Errors`]: kind-tagged failures with full paths
//! - [`Schema`]: an ordered field-to-validator mapping
//! - [`Validator`]: the single-method contract everything implements
//!
//! ## Example
//!
//! ```rust
//! use verdict::{len_string, nonzero, validate, Field, Schema};
//!
//! let name = "";
//! let age = 0;
//! let schema = Schema::new()
//!     .field(Field::new("name", name), len_string(1, 5))
//!     .field(Field::new("age", age), nonzero());
//!
//! let errs = validate(&schema);
//! let rendered: Vec<String> = errs.iter().map(|e| e.to_string()).collect();
//! assert_eq!(rendered, vec![
//!     "name: INVALID(has an invalid length)",
//!     "age: INVALID(is zero valued)",
//! ]);
//! ```

pub mod error;
pub mod field;
pub mod path;
pub mod schema;
pub mod validator;
pub mod value;

pub use error::{Error, ErrorKind, Errors};
pub use field::Field;
pub use path::{FieldPath, PathSegment};
pub use schema::Schema;
pub use validator::{
    all, and, any, array, each, each_map, eq, gt, gte, is, is_in, len_slice, len_string, lt, lte,
    map, matches, matches_regex, ne, nested, nonzero, not, not_in, or, range, rune_count, slice,
    validate, zero, zero_or, AllValidator, AnyValidator, Func, MessageValidator, PatternError,
    Validator,
};
pub use value::{Value, ValueKind, ValueMap};
