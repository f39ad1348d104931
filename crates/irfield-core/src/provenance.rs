//! Ambient provenance labels.
//!
//! Each thread carries one optional label. Every record appended by
//! [`Field::set`](crate::Field::set) copies the label that is current at
//! that moment, so a batch of writes can be attributed to a phase of
//! processing without passing the label to every call. The label stays in
//! effect until it is changed or cleared; writes do not reset it.
//!
//! ```
//! use irfield_core::{provenance, Field, FieldDefinition, FieldType};
//!
//! let mut field = Field::new(FieldDefinition::new("Id", FieldType::String).into_shared());
//!
//! {
//!     let _scope = provenance::scope("link");
//!     field.set("A")?;
//! }
//! field.set("B")?;
//!
//! let labels: Vec<_> = field.history().map(|record| record.context()).collect();
//! assert_eq!(labels, [None, Some("link")]);
//! # Ok::<(), irfield_core::Error>(())
//! ```

use std::cell::RefCell;
use std::sync::Arc;

thread_local! {
    static CONTEXT: RefCell<Option<Arc<str>>> = const { RefCell::new(None) };
}

/// Gets the label current on this thread.
pub fn context() -> Option<Arc<str>> {
    CONTEXT.with(|slot| slot.borrow().clone())
}

/// Sets the label for subsequent writes on this thread.
pub fn set_context(label: impl Into<Arc<str>>) {
    replace(Some(label.into()));
}

/// Clears the label; subsequent writes on this thread carry none.
pub fn clear_context() {
    replace(None);
}

/// Installs `label` until the returned guard is dropped, then restores
/// whatever label was current before.
///
/// Guards restore in last-in, first-out order: drop nested scopes before
/// the scopes that enclose them, and change the label only through nested
/// scopes while a guard is alive. Debug builds panic when a guard is
/// dropped while another label is current.
pub fn scope(label: impl Into<Arc<str>>) -> ProvenanceScope {
    let installed = label.into();
    ProvenanceScope {
        previous: replace(Some(installed.clone())),
        installed,
    }
}

/// Runs `f` with `label` installed, restoring the previous label afterwards.
pub fn with_context<R>(label: impl Into<Arc<str>>, f: impl FnOnce() -> R) -> R {
    let _scope = scope(label);
    f()
}

fn replace(label: Option<Arc<str>>) -> Option<Arc<str>> {
    CONTEXT.with(|slot| slot.replace(label))
}

/// Guard returned by [`scope`].
#[must_use = "the label is restored as soon as the scope is dropped"]
#[derive(Debug)]
pub struct ProvenanceScope {
    previous: Option<Arc<str>>,
    installed: Arc<str>,
}

impl Drop for ProvenanceScope {
    fn drop(&mut self) {
        debug_assert!(
            is_current(&self.installed),
            "provenance scope `{}` dropped out of order; current label is {:?}",
            self.installed,
            context()
        );
        replace(self.previous.take());
    }
}

fn is_current(label: &Arc<str>) -> bool {
    CONTEXT.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, label))
    })
}
