use super::Error;
use crate::ir::FieldType;

/// Error when a typed accessor has no conversion from the field's declared
/// type.
///
/// This occurs when:
/// - Any accessor reads a `LargeNumber` field
/// - A numeric accessor reads a `Path` field
/// - `as_path` reads a `Bool` or `Number` field
/// - `as_nullable_bool` reads a `Path` field
#[derive(Debug)]
pub(super) struct UnsupportedReadConversionError {
    field: Box<str>,
    ty: FieldType,
    target: &'static str,
}

impl std::error::Error for UnsupportedReadConversionError {}

impl core::fmt::Display for UnsupportedReadConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot convert field `{}` with type {} to {}",
            self.field, self.ty, self.target
        )
    }
}

impl Error {
    /// Creates an unsupported read conversion error.
    ///
    /// `target` names the requested representation, e.g. `"boolean"`.
    pub fn unsupported_read_conversion(
        field: impl Into<String>,
        ty: FieldType,
        target: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedReadConversion(
            UnsupportedReadConversionError {
                field: field.into().into(),
                ty,
                target,
            },
        ))
    }

    /// Returns `true` if this error is an unsupported read conversion error.
    pub fn is_unsupported_read_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedReadConversion(_))
    }
}
