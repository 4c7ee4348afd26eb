//! The dynamic value model validators inspect.
//!
//! This module provides [`Value`], a sealed union over the kinds of data
//! the engine understands, and [`ValueKind`], its discriminant. Validators
//! never see raw caller types; callers convert their data into `Value`
//! (usually through the `From` impls) when declaring fields.
//!
//! The union is closed on purpose: anything outside it is represented as
//! [`Value::Opaque`], which every validator reports as `Unrecognized`.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use indexmap::IndexMap;

/// An ordered map of named values, as produced by [`Value::Map`].
///
/// Backed by `IndexMap` so iteration order is insertion order, which keeps
/// error ordering deterministic for map-shaped data.
pub type ValueMap = IndexMap<String, Value>;

/// A dynamically typed value under validation.
///
/// # Example
///
/// ```rust
/// use verdict::Value;
///
/// let v = Value::from(42);
/// assert!(!v.is_zero());
///
/// let v = Value::from("");
/// assert!(v.is_zero());
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An unset or absent value (the anonymous root, a missing map key).
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating-point number.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
    /// A byte string.
    Bytes(Vec<u8>),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// An ordered map of named values.
    Map(ValueMap),
    /// A value of a type the engine does not model, carrying its type name.
    ///
    /// Every validator reports `Unrecognized` for opaque values.
    Opaque(&'static str),
}

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Bytes,
    Seq,
    Map,
    Opaque,
}

impl ValueKind {
    /// Returns true for the numeric kinds (`Int`, `Uint`, `Float`).
    ///
    /// Numeric kinds compare with each other numerically; all other kind
    /// pairs are incompatible for equality and ordering checks.
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Uint | ValueKind::Float)
    }

    /// Returns true for kinds that support equality checks.
    ///
    /// Everything the engine models is equatable; only `Opaque` is not.
    pub fn is_equatable(self) -> bool {
        !matches!(self, ValueKind::Opaque)
    }

    /// Returns true for totally ordered kinds (numerics and strings).
    pub fn is_ordered(self) -> bool {
        self.is_numeric() || matches!(self, ValueKind::Str)
    }

    /// Returns true if values of this kind can be compared for equality
    /// with values of `other`: the same kind, or both numeric.
    pub fn is_compatible_with(self, other: ValueKind) -> bool {
        self == other || (self.is_numeric() && other.is_numeric())
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Nil => "nil",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Uint => "uint",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::Seq => "seq",
            ValueKind::Map => "map",
            ValueKind::Opaque => "opaque",
        };
        write!(f, "{}", name)
    }
}

impl Value {
    /// Returns this value's kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Creates a byte-string value.
    ///
    /// `Vec<u8>` converts to a `Seq` of unsigned integers through the
    /// generic `From<Vec<T>>`; use this constructor for byte strings.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Creates an opaque value standing in for a `T` the engine does not
    /// model (a function value, a channel, a foreign handle).
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Value;
    ///
    /// let v = Value::opaque_of::<fn()>();
    /// assert!(matches!(v, Value::Opaque(_)));
    /// ```
    pub fn opaque_of<T>() -> Self {
        Value::Opaque(std::any::type_name::<T>())
    }

    /// Returns true if this value equals its kind's zero value.
    ///
    /// `Nil` is zero; numbers are zero when equal to `0`; strings, byte
    /// strings, sequences and maps are zero when empty. `Opaque` values
    /// are never zero (validators reject them before asking).
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Bytes(b) => b.is_empty(),
            Value::Seq(s) => s.is_empty(),
            Value::Map(m) => m.is_empty(),
            Value::Opaque(_) => false,
        }
    }

    /// Compares two values of ordered, compatible kinds.
    ///
    /// Returns `None` when the kinds are not mutually ordered, and for
    /// float comparisons involving NaN.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (a, b) if a.kind().is_numeric() && b.kind().is_numeric() => number_cmp(a, b),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the byte slice if this is a `Bytes` value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the sequence if this is a `Seq` value.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the map if this is a `Map` value.
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// Numeric comparison across `Int`/`Uint`/`Float`.
///
/// Integer pairs compare exactly; once a float is involved the comparison
/// is done in `f64`.
fn number_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    use Value::*;
    match (a, b) {
        (Int(x), Int(y)) => Some(x.cmp(y)),
        (Uint(x), Uint(y)) => Some(x.cmp(y)),
        (Int(x), Uint(y)) => Some(if *x < 0 {
            Ordering::Less
        } else {
            (*x as u64).cmp(y)
        }),
        (Uint(x), Int(y)) => Some(if *y < 0 {
            Ordering::Greater
        } else {
            x.cmp(&(*y as u64))
        }),
        (Float(x), Float(y)) => x.partial_cmp(y),
        (Float(x), Int(y)) => x.partial_cmp(&(*y as f64)),
        (Float(x), Uint(y)) => x.partial_cmp(&(*y as f64)),
        (Int(x), Float(y)) => (*x as f64).partial_cmp(y),
        (Uint(x), Float(y)) => (*x as f64).partial_cmp(y),
        _ => None,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (Seq(a), Seq(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            (Opaque(a), Opaque(b)) => a == b,
            (a, b) if a.kind().is_numeric() && b.kind().is_numeric() => {
                number_cmp(a, b) == Some(Ordering::Equal)
            }
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

macro_rules! from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Uint(n as u64)
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, isize);
from_uint!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` converts to `Nil`; `Some` converts the inner value.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from(&v)
    }
}

impl From<&serde_json::Value> for Value {
    /// Converts a JSON value into the engine's value model.
    ///
    /// Numbers map to `Int`, `Uint` or `Float` depending on representation.
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Seq(items.iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
