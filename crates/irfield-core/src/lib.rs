//! Typed, versioned scalar cells for a build toolchain's intermediate
//! representation.
//!
//! A [`Field`] is declared once with a [`FieldType`] and then accepts writes
//! of loosely typed [`Value`]s, coercing each into the declared type. Every
//! accepted write is kept as an immutable [`ValueRecord`], so the full history
//! of a field, and the [provenance](provenance) label active for each write,
//! stays inspectable.
//!
//! ```
//! use irfield_core::{provenance, Field, FieldDefinition, FieldType};
//!
//! let def = FieldDefinition::new("Sequence", FieldType::Number).into_shared();
//! let mut field = Field::new(def);
//!
//! provenance::set_context("parse");
//! field.set("42")?;
//! provenance::clear_context();
//!
//! assert_eq!(field.as_number()?, 42);
//! assert_eq!(field.as_string()?.as_deref(), Some("42"));
//! assert_eq!(field.context(), Some("parse"));
//! # Ok::<(), irfield_core::Error>(())
//! ```

mod error;
pub use error::{Error, IntoError};

pub mod ir;
pub use ir::{Field, FieldDefinition, FieldType, History, PathValue, Value, ValueRecord};

pub mod provenance;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
