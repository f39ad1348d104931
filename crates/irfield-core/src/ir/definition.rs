use super::FieldType;

use std::sync::Arc;

/// The declaration of a logical field: its name and its type.
///
/// Built once and shared (through `Arc`) by every [`Field`](super::Field)
/// that represents the same column in different IR rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDefinition {
    name: String,
    ty: FieldType,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Wrap the definition for sharing across fields.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the declared type.
    pub fn ty(&self) -> FieldType {
        self.ty
    }
}
