//! Typed accessors.
//!
//! Each accessor converts the newest record of a field into the requested
//! representation, dispatching on the field's declared type. A missing
//! field, a never-written field and a cleared field all read as the empty
//! result of the accessor rather than an error.

use super::ty::{bool_text, parse_int};
use super::{Field, FieldType, PathValue, Value};
use crate::{Error, Result};

/// Reads the field as a boolean. Empty reads as `false`.
pub fn as_bool(field: Option<&Field>) -> Result<bool> {
    let Some((field, data)) = written(field) else {
        return Ok(false);
    };

    match (field.ty(), data) {
        (FieldType::Bool, Value::Bool(v)) => Ok(*v),
        (FieldType::Number, Value::I32(v)) => Ok(*v != 0),
        (FieldType::String, Value::String(v)) => Ok(!v.is_empty()),
        (FieldType::Path, Value::Path(v)) => Ok(!v.is_empty()),
        _ => Err(unsupported(field, "boolean")),
    }
}

/// Reads the field as a boolean, keeping the empty state as `None`.
///
/// Unlike [`as_bool`], `Path` fields are not readable as booleans here.
pub fn as_nullable_bool(field: Option<&Field>) -> Result<Option<bool>> {
    let Some((field, data)) = written(field) else {
        return Ok(None);
    };

    match (field.ty(), data) {
        (FieldType::Bool, Value::Bool(v)) => Ok(Some(*v)),
        (FieldType::Number, Value::I32(v)) => Ok(Some(*v != 0)),
        (FieldType::String, Value::String(v)) => Ok(Some(!v.is_empty())),
        _ => Err(unsupported(field, "boolean")),
    }
}

/// Reads the field as a 32-bit integer. Empty reads as `0`.
pub fn as_number(field: Option<&Field>) -> Result<i32> {
    Ok(as_nullable_number(field)?.unwrap_or(0))
}

/// Reads the field as a 32-bit integer, keeping the empty state as `None`.
pub fn as_nullable_number(field: Option<&Field>) -> Result<Option<i32>> {
    let Some((field, data)) = written(field) else {
        return Ok(None);
    };

    match (field.ty(), data) {
        (FieldType::Bool, Value::Bool(v)) => Ok(Some(i32::from(*v))),
        (FieldType::Number, Value::I32(v)) => Ok(Some(*v)),
        (FieldType::String, Value::String(v)) => match parse_int(v) {
            Some(number) => Ok(Some(number)),
            None => Err(Error::unparseable_number(field.name(), v.as_str())),
        },
        _ => Err(unsupported(field, "number")),
    }
}

/// Reads the field as text.
pub fn as_string(field: Option<&Field>) -> Result<Option<String>> {
    let Some((field, data)) = written(field) else {
        return Ok(None);
    };

    match (field.ty(), data) {
        (FieldType::Bool, Value::Bool(v)) => Ok(Some(bool_text(*v).to_string())),
        (FieldType::Number, Value::I32(v)) => Ok(Some(v.to_string())),
        (FieldType::String, Value::String(v)) => Ok(Some(v.clone())),
        (FieldType::Path, Value::Path(v)) => Ok(Some(v.path.clone())),
        _ => Err(unsupported(field, "string")),
    }
}

/// Reads the field as a path.
pub fn as_path(field: Option<&Field>) -> Result<Option<PathValue>> {
    let Some((field, data)) = written(field) else {
        return Ok(None);
    };

    match (field.ty(), data) {
        (FieldType::String, Value::String(v)) => Ok(Some(PathValue::new(v.as_str()))),
        (FieldType::Path, Value::Path(v)) => Ok(Some(v.clone())),
        _ => Err(unsupported(field, "path")),
    }
}

impl Field {
    pub fn as_bool(&self) -> Result<bool> {
        as_bool(Some(self))
    }

    pub fn as_nullable_bool(&self) -> Result<Option<bool>> {
        as_nullable_bool(Some(self))
    }

    pub fn as_number(&self) -> Result<i32> {
        as_number(Some(self))
    }

    pub fn as_nullable_number(&self) -> Result<Option<i32>> {
        as_nullable_number(Some(self))
    }

    pub fn as_string(&self) -> Result<Option<String>> {
        as_string(Some(self))
    }

    pub fn as_path(&self) -> Result<Option<PathValue>> {
        as_path(Some(self))
    }
}

/// The field and its newest payload, unless there is nothing to read.
fn written(field: Option<&Field>) -> Option<(&Field, &Value)> {
    let field = field?;
    match field.data()? {
        Value::Null => None,
        data => Some((field, data)),
    }
}

fn unsupported(field: &Field, target: &'static str) -> Error {
    tracing::debug!(field = %field.name(), ty = %field.ty(), to = target, "unsupported field read");
    Error::unsupported_read_conversion(field.name(), field.ty(), target)
}
