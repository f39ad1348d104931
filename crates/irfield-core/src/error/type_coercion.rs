use super::Error;
use crate::ir::{FieldType, Value};

/// Error when a written value is neither the field's native type nor one of
/// the accepted conversions into it.
///
/// The field is left untouched when this is raised: no record is appended.
#[derive(Debug)]
pub(super) struct TypeCoercionError {
    field: Box<str>,
    ty: FieldType,
    value: Value,
}

impl std::error::Error for TypeCoercionError {}

impl core::fmt::Display for TypeCoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot coerce {} value {} into field `{}` of type {}",
            self.value.kind(),
            self.value,
            self.field,
            self.ty
        )
    }
}

impl Error {
    /// Creates a type coercion error.
    ///
    /// This is used when `value` cannot be stored in a field declared as `ty`.
    pub fn type_coercion(field: impl Into<String>, ty: FieldType, value: Value) -> Error {
        Error::from(super::ErrorKind::TypeCoercion(TypeCoercionError {
            field: field.into().into(),
            ty,
            value,
        }))
    }

    /// Returns `true` if this error is a type coercion error.
    pub fn is_type_coercion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeCoercion(_))
    }
}
