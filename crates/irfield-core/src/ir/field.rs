use super::{FieldDefinition, FieldType, History, Value, ValueRecord};

use std::sync::Arc;

/// A typed cell holding the write history of one field of one IR row.
///
/// Writes go through [`Field::set`], which coerces the input into the declared
/// type and prepends a [`ValueRecord`]. Reads go through the typed accessors
/// (`as_bool`, `as_number`, ...), which convert the newest record.
///
/// Cloning a field is cheap: the clone shares the existing history and the
/// two diverge from there.
#[derive(Debug, Clone)]
pub struct Field {
    /// Shared declaration of name and type
    definition: Arc<FieldDefinition>,

    /// Head of the history chain; `None` until the first write
    value: Option<Arc<ValueRecord>>,
}

impl Field {
    /// Creates a field that has never been written.
    pub fn new(definition: Arc<FieldDefinition>) -> Self {
        Self {
            definition,
            value: None,
        }
    }

    /// Gets the shared definition.
    pub fn definition(&self) -> &Arc<FieldDefinition> {
        &self.definition
    }

    /// Gets the field name.
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// Gets the declared type.
    pub fn ty(&self) -> FieldType {
        self.definition.ty()
    }

    /// Gets the newest record, or `None` if the field was never written.
    pub fn value(&self) -> Option<&Arc<ValueRecord>> {
        self.value.as_ref()
    }

    /// Gets the newest payload without any conversion.
    ///
    /// A cleared field yields `Some(&Value::Null)`; a never-written field
    /// yields `None`.
    pub fn data(&self) -> Option<&Value> {
        self.value.as_deref().map(ValueRecord::data)
    }

    /// Gets the provenance label of the newest record.
    pub fn context(&self) -> Option<&str> {
        self.value.as_deref().and_then(ValueRecord::context)
    }

    /// Iterates every record of the field, newest first.
    pub fn history(&self) -> History<'_> {
        History::new(self.value.as_deref())
    }

    /// Number of successful writes.
    pub fn history_len(&self) -> usize {
        self.history().count()
    }

    pub fn is_written(&self) -> bool {
        self.value.is_some()
    }

    pub(super) fn publish(&mut self, record: ValueRecord) {
        self.value = Some(Arc::new(record));
    }
}
