use super::Error;

/// Error when a string field is read as a number but its text is not a
/// 32-bit integer.
#[derive(Debug)]
pub(super) struct UnparseableNumberError {
    field: Box<str>,
    text: Box<str>,
}

impl std::error::Error for UnparseableNumberError {}

impl core::fmt::Display for UnparseableNumberError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` holds {:?}, which is not a valid number",
            self.field, self.text
        )
    }
}

impl Error {
    /// Creates an unparseable number error.
    pub fn unparseable_number(field: impl Into<String>, text: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnparseableNumber(UnparseableNumberError {
            field: field.into().into(),
            text: text.into().into(),
        }))
    }

    /// Returns `true` if this error is an unparseable number error.
    pub fn is_unparseable_number(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnparseableNumber(_))
    }
}
