use super::{FieldType, PathValue};

use std::fmt;

/// A scalar payload, either written into a field or stored in one of its
/// records.
///
/// As input to [`Field::set`](super::Field::set) any variant is accepted and
/// coerced; once stored, a non-null payload always matches the field's
/// declared [`FieldType`].
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absent value; an explicit clear when written
    #[default]
    Null,

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Boolean value
    Bool(bool),

    /// String value
    String(String),

    /// Filesystem path
    Path(PathValue),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the payload shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Path(_) => "path",
        }
    }

    /// Returns `true` if this payload may be stored in a field of type `ty`.
    pub fn is_a(&self, ty: FieldType) -> bool {
        match self {
            Self::Null => true,
            Self::I32(_) => ty.is_number(),
            Self::I64(_) => ty.is_large_number(),
            Self::Bool(_) => ty.is_bool(),
            Self::String(_) => ty.is_string(),
            Self::Path(_) => ty.is_path(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Path(v) => write!(f, "{:?}", v.path),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<PathValue> for Value {
    fn from(src: PathValue) -> Self {
        Self::Path(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
