//! Field path representation for locating values in nested structures.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] types for building
//! and representing paths to values in nested records, sequences and maps.

use std::fmt::{self, Display};

/// A segment of a field path.
///
/// Paths are built from segments that represent field access, sequence
/// indexing, or map-key access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `author`, `email`)
    Field(String),
    /// A sequence index access (e.g., `[0]`, `[42]`)
    Index(usize),
    /// A map key access (e.g., `[foo]`)
    Key(String),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Creates a new map-key segment.
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }
}

/// A path to a value in a nested structure.
///
/// `FieldPath` represents locations like `comments[0].author` and provides
/// methods for building paths incrementally. Composition is segment
/// concatenation, so joining paths is associative: the path of a value
/// nested through any chain of schemas, sequences and maps is the same as
/// the flattened path built in one go.
///
/// # Example
///
/// ```rust
/// use verdict::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("comments")
///     .push_index(0)
///     .push_field("author");
///
/// assert_eq!(path.to_string(), "comments[0].author");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path representing an anonymous root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with a map-key segment appended.
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        self.push(PathSegment::Key(key.into()))
    }

    /// Returns a new path with the given segment appended.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path consisting of this path followed by `other`.
    ///
    /// Joining the root path on either side is the identity, so nested
    /// schemas never produce leading or trailing separators.
    pub fn join(&self, other: &FieldPath) -> Self {
        if self.is_root() {
            return other.clone();
        }
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path (all segments except the last), or None if
    /// this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl From<&str> for FieldPath {
    /// Converts a field name into a single-segment path.
    ///
    /// The empty string converts to the root path, matching the convention
    /// that an anonymous field has no name.
    fn from(name: &str) -> Self {
        if name.is_empty() {
            FieldPath::root()
        } else {
            FieldPath::from_field(name)
        }
    }
}

impl From<String> for FieldPath {
    fn from(name: String) -> Self {
        if name.is_empty() {
            FieldPath::root()
        } else {
            FieldPath::from_field(name)
        }
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::Key(key) => write!(f, "[{}]", key)?,
            }
        }
        Ok(())
    }
}
