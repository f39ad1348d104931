use super::{History, Value};

use std::fmt;
use std::sync::Arc;

/// One immutable entry in a field's write history.
///
/// Records link to the record they superseded, newest first. A record is
/// never changed after construction, so a head obtained from
/// [`Field::value`](super::Field::value) can be walked from any thread while
/// the field keeps receiving writes.
pub struct ValueRecord {
    /// Coerced payload; matches the field's declared type unless null
    data: Value,

    /// Provenance label active when the record was written
    context: Option<Arc<str>>,

    /// The record this one superseded
    previous: Option<Arc<ValueRecord>>,
}

impl ValueRecord {
    pub(super) fn new(
        data: Value,
        context: Option<Arc<str>>,
        previous: Option<Arc<ValueRecord>>,
    ) -> Self {
        Self {
            data,
            context,
            previous,
        }
    }

    /// Gets the stored payload.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Gets the provenance label this record was written under.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Gets the record this one replaced, if any.
    pub fn previous(&self) -> Option<&Arc<ValueRecord>> {
        self.previous.as_ref()
    }

    /// Iterates this record and every earlier one, newest first.
    pub fn history(&self) -> History<'_> {
        History::new(Some(self))
    }
}

impl Drop for ValueRecord {
    // Unlink iteratively; the default recursive drop overflows the stack on
    // long histories.
    fn drop(&mut self) {
        let mut next = self.previous.take();
        while let Some(record) = next {
            match Arc::try_unwrap(record) {
                Ok(mut record) => next = record.previous.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for ValueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRecord")
            .field("data", &self.data)
            .field("context", &self.context)
            .field("depth", &self.history().count())
            .finish()
    }
}
