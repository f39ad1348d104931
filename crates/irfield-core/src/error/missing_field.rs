use super::Error;

/// Error when a write targets a field that does not exist and no definition
/// was supplied to create it.
#[derive(Debug)]
pub(super) struct MissingFieldError;

impl std::error::Error for MissingFieldError {}

impl core::fmt::Display for MissingFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("field is missing; no definition to create it from")
    }
}

impl Error {
    /// Creates a missing field error.
    pub fn missing_field() -> Error {
        Error::from(super::ErrorKind::MissingField(MissingFieldError))
    }

    /// Returns `true` if this error is a missing field error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingField(_))
    }
}
