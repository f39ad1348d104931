use irfield_core::{Field, FieldDefinition, FieldType, PathValue, Value};
use test_util::prelude::*;

fn field(ty: FieldType) -> Field {
    Field::new(FieldDefinition::new("Test", ty).into_shared())
}

fn stored(ty: FieldType, value: impl Into<Value>) -> Value {
    let mut field = field(ty);
    assert_ok!(field.set(value));
    field.data().cloned().unwrap()
}

// ---------------------------------------------------------------------------
// String fields
// ---------------------------------------------------------------------------

#[test]
fn string_accepts_string() {
    assert_eq!(stored(FieldType::String, "hello"), Value::from("hello"));
}

#[test]
fn string_formats_i32() {
    assert_eq!(stored(FieldType::String, 7), Value::from("7"));
    assert_eq!(stored(FieldType::String, -12), Value::from("-12"));
}

#[test]
fn string_formats_bool() {
    assert_eq!(stored(FieldType::String, true), Value::from("true"));
    assert_eq!(stored(FieldType::String, false), Value::from("false"));
}

// ---------------------------------------------------------------------------
// Number fields
// ---------------------------------------------------------------------------

#[test]
fn number_accepts_i32() {
    assert_eq!(stored(FieldType::Number, 42), Value::I32(42));
}

#[test]
fn number_parses_string() {
    assert_eq!(stored(FieldType::Number, "42"), Value::I32(42));
    assert_eq!(stored(FieldType::Number, "-2147483648"), Value::I32(i32::MIN));
    assert_eq!(stored(FieldType::Number, " 8 "), Value::I32(8));
}

// ---------------------------------------------------------------------------
// Bool fields
// ---------------------------------------------------------------------------

#[test]
fn bool_accepts_bool() {
    assert_eq!(stored(FieldType::Bool, true), Value::Bool(true));
}

#[test]
fn bool_from_i32_is_non_zero() {
    assert_eq!(stored(FieldType::Bool, 0), Value::Bool(false));
    assert_eq!(stored(FieldType::Bool, 1), Value::Bool(true));
    assert_eq!(stored(FieldType::Bool, -3), Value::Bool(true));
}

#[test]
fn bool_from_words_ignores_case() {
    for word in ["yes", "YES", "true", "True"] {
        assert_eq!(stored(FieldType::Bool, word), Value::Bool(true), "{word}");
    }
    for word in ["no", "No", "false", "FALSE"] {
        assert_eq!(stored(FieldType::Bool, word), Value::Bool(false), "{word}");
    }
}

// ---------------------------------------------------------------------------
// Path fields
// ---------------------------------------------------------------------------

#[test]
fn path_accepts_path() {
    assert_eq!(
        stored(FieldType::Path, PathValue::new("bin/app.exe")),
        Value::Path(PathValue::new("bin/app.exe"))
    );
}

#[test]
fn path_wraps_string() {
    assert_eq!(
        stored(FieldType::Path, "C:\\foo"),
        Value::Path(PathValue::new("C:\\foo"))
    );
}

// ---------------------------------------------------------------------------
// LargeNumber fields
// ---------------------------------------------------------------------------

#[test]
fn large_number_accepts_i64() {
    assert_eq!(stored(FieldType::LargeNumber, i64::MAX), Value::I64(i64::MAX));
}

#[test]
fn large_number_widens_i32() {
    assert_eq!(stored(FieldType::LargeNumber, 5), Value::I64(5));
    assert_eq!(stored(FieldType::LargeNumber, i32::MIN), Value::I64(i32::MIN as i64));
}

#[test]
fn large_number_parses_string() {
    assert_eq!(
        stored(FieldType::LargeNumber, "9999999999"),
        Value::I64(9_999_999_999)
    );
}

// ---------------------------------------------------------------------------
// Null clears every type
// ---------------------------------------------------------------------------

#[test]
fn null_is_accepted_by_every_type() {
    for ty in FieldType::ALL {
        let mut field = field(ty);
        assert_ok!(field.set(Value::Null));
        assert_eq!(field.data(), Some(&Value::Null));
        assert_eq!(field.history_len(), 1);
    }
}

#[test]
fn null_write_appends_a_record() {
    let mut field = field(FieldType::Number);
    assert_ok!(field.set(3));
    let before = field.value().cloned().unwrap();

    assert_ok!(field.set(None::<i32>));

    let head = field.value().unwrap();
    assert!(head.data().is_null());
    assert!(std::sync::Arc::ptr_eq(head.previous().unwrap(), &before));
    assert_eq!(field.history_len(), 2);
}

// ---------------------------------------------------------------------------
// Stored payloads always match the declared type
// ---------------------------------------------------------------------------

#[test]
fn stored_payload_matches_declared_type() {
    let inputs = [
        Value::I32(1),
        Value::I64(1),
        Value::Bool(true),
        Value::from("1"),
        Value::from("yes"),
        Value::from(PathValue::new("a")),
    ];

    for ty in FieldType::ALL {
        let mut field = field(ty);
        for input in inputs.iter().cloned() {
            let _ = field.set(input);
        }
        assert!(field.history().all(|record| record.data().is_a(ty)), "{ty}");
    }
}

#[test]
fn set_returns_the_field_for_chaining() {
    let mut field = field(FieldType::Number);
    assert_ok!(assert_ok!(field.set(1)).set("2"));
    assert_eq!(field.history_len(), 2);
    assert_eq!(field.data(), Some(&Value::I32(2)));
}

#[test]
fn coerce_without_a_field() {
    assert_eq!(FieldType::Bool.coerce(Value::from("no")), Ok(Value::Bool(false)));
    assert_eq!(FieldType::String.coerce(Value::I64(1)), Err(Value::I64(1)));
}
