use super::Error;

/// Error when a field type name does not match any known type tag.
#[derive(Debug)]
pub(super) struct InvalidFieldTypeError {
    name: Box<str>,
}

impl std::error::Error for InvalidFieldTypeError {}

impl core::fmt::Display for InvalidFieldTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field type `{}`", self.name)
    }
}

impl Error {
    /// Creates an invalid field type error.
    pub fn invalid_field_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFieldType(InvalidFieldTypeError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid field type error.
    pub fn is_invalid_field_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldType(_))
    }
}
