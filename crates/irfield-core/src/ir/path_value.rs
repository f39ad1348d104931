use std::fmt;

/// A string that denotes a filesystem path rather than plain text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathValue {
    pub path: String,
}

impl PathValue {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<String> for PathValue {
    fn from(path: String) -> Self {
        Self { path }
    }
}

impl From<&str> for PathValue {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
