mod definition;
pub use definition::FieldDefinition;

mod field;
pub use field::Field;

mod history;
pub use history::History;

mod path_value;
pub use path_value::PathValue;

mod read;
pub use read::{as_bool, as_nullable_bool, as_nullable_number, as_number, as_path, as_string};

mod record;
pub use record::ValueRecord;

mod ty;
pub use ty::FieldType;

mod value;
pub use value::Value;

mod write;
pub use write::{set, set_with_definition};
