use super::{PathValue, Value};
use crate::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// The declared type of a field.
///
/// Fixed when the [`FieldDefinition`](super::FieldDefinition) is built and
/// never changes afterwards. It decides which [`Value`] variant every record
/// of the field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    /// Arbitrary text, stored as [`Value::String`]
    String,

    /// Signed 32-bit integer, stored as [`Value::I32`]
    Number,

    /// Boolean flag, stored as [`Value::Bool`]
    Bool,

    /// Filesystem path, stored as [`Value::Path`]
    Path,

    /// Signed 64-bit integer, stored as [`Value::I64`]
    LargeNumber,
}

impl FieldType {
    /// Every type tag, in declaration order.
    pub const ALL: [FieldType; 5] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Bool,
        FieldType::Path,
        FieldType::LargeNumber,
    ];

    /// Return the canonical name of this type.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Bool => "Bool",
            FieldType::Path => "Path",
            FieldType::LargeNumber => "LargeNumber",
        }
    }

    /// Parse a canonical name into a `FieldType`.
    pub fn from_name(name: &str) -> Result<FieldType> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.name() == name)
            .ok_or_else(|| Error::invalid_field_type(name))
    }

    /// Returns `true` for `FieldType::String`.
    pub fn is_string(self) -> bool {
        matches!(self, Self::String)
    }

    /// Returns `true` for `FieldType::Number`.
    pub fn is_number(self) -> bool {
        matches!(self, Self::Number)
    }

    /// Returns `true` for `FieldType::Bool`.
    pub fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Returns `true` for `FieldType::Path`.
    pub fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }

    /// Returns `true` for `FieldType::LargeNumber`.
    pub fn is_large_number(self) -> bool {
        matches!(self, Self::LargeNumber)
    }

    /// Coerce `value` into the payload this type stores.
    ///
    /// Null passes through for every type. On rejection the input is handed
    /// back unchanged so the caller can report it.
    pub fn coerce(self, value: Value) -> core::result::Result<Value, Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (self, value) {
            (Self::String, value @ Value::String(_)) => value,
            (Self::String, Value::I32(v)) => Value::String(v.to_string()),
            (Self::String, Value::Bool(v)) => Value::String(bool_text(v).to_string()),

            (Self::Number, value @ Value::I32(_)) => value,
            (Self::Number, Value::String(v)) => match parse_int::<i32>(&v) {
                Some(number) => Value::I32(number),
                None => return Err(Value::String(v)),
            },

            (Self::Bool, value @ Value::Bool(_)) => value,
            (Self::Bool, Value::I32(v)) => Value::Bool(v != 0),
            (Self::Bool, Value::String(v)) => match parse_bool_word(&v) {
                Some(flag) => Value::Bool(flag),
                None => return Err(Value::String(v)),
            },

            (Self::Path, value @ Value::Path(_)) => value,
            (Self::Path, Value::String(v)) => Value::Path(PathValue::new(v)),

            (Self::LargeNumber, value @ Value::I64(_)) => value,
            (Self::LargeNumber, Value::I32(v)) => Value::I64(i64::from(v)),
            (Self::LargeNumber, Value::String(v)) => match parse_int::<i64>(&v) {
                Some(number) => Value::I64(number),
                None => return Err(Value::String(v)),
            },

            (_, value) => return Err(value),
        })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldType::from_name(s)
    }
}

pub(super) fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Integer parse that tolerates surrounding whitespace and a leading sign,
/// matching how authoring input spells numbers.
pub(super) fn parse_int<T: FromStr>(text: &str) -> Option<T> {
    text.trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '))
        .parse()
        .ok()
}

fn parse_bool_word(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("yes") || text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("no") || text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
