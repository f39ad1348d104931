use super::{Field, FieldDefinition, Value, ValueRecord};
use crate::{provenance, Error, Result};

use std::sync::Arc;

impl Field {
    /// Coerce `value` into the declared type and append it to the history.
    ///
    /// The new record is tagged with the ambient
    /// [provenance context](crate::provenance). On error the field is left
    /// exactly as it was.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        self.append(value.into(), provenance::context())
    }

    /// Like [`Field::set`], but tags the record with `context` instead of the
    /// ambient label.
    pub fn set_with_context(
        &mut self,
        value: impl Into<Value>,
        context: Option<&str>,
    ) -> Result<&mut Self> {
        self.append(value.into(), context.map(Arc::from))
    }

    fn append(&mut self, value: Value, context: Option<Arc<str>>) -> Result<&mut Self> {
        let ty = self.ty();

        let data = match ty.coerce(value) {
            Ok(data) => data,
            Err(rejected) => {
                tracing::debug!(
                    field = %self.name(),
                    %ty,
                    value = %rejected,
                    "rejected field write"
                );
                return Err(Error::type_coercion(self.name(), ty, rejected));
            }
        };

        tracing::trace!(
            field = %self.name(),
            %ty,
            data = %data,
            context = context.as_deref().unwrap_or(""),
            "appending field value"
        );

        let record = ValueRecord::new(data, context, self.value().cloned());
        self.publish(record);
        Ok(self)
    }
}

/// Write `value` into `field`.
///
/// Fails with a missing field error when there is no field to write to.
pub fn set(field: Option<&mut Field>, value: impl Into<Value>) -> Result<&mut Field> {
    match field {
        Some(field) => field.set(value),
        None => Err(Error::missing_field()),
    }
}

/// Write `value` into the field held by `slot`, creating the field from
/// `definition` first if the slot is empty.
///
/// A newly created field is only stored in `slot` once the write succeeded,
/// so a rejected value leaves an empty slot empty.
pub fn set_with_definition<'a>(
    slot: &'a mut Option<Field>,
    definition: &Arc<FieldDefinition>,
    value: impl Into<Value>,
) -> Result<&'a mut Field> {
    match slot {
        Some(field) => field.set(value),
        None => {
            let mut field = Field::new(definition.clone());
            field.set(value)?;
            Ok(slot.insert(field))
        }
    }
}
