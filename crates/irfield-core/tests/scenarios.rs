use irfield_core::{provenance, Field, FieldDefinition, FieldType, PathValue, Value};
use test_util::prelude::*;

fn field(name: &str, ty: FieldType) -> Field {
    Field::new(FieldDefinition::new(name, ty).into_shared())
}

#[test]
fn number_round_trips_through_text() {
    let mut field = field("Sequence", FieldType::Number);
    assert_ok!(field.set("42"));
    assert_eq!(field.as_string().unwrap().as_deref(), Some("42"));
    assert_eq!(field.as_number().unwrap(), 42);
}

#[test]
fn string_round_trips_number() {
    let mut field = field("Version", FieldType::String);
    assert_ok!(field.set(7));
    assert_eq!(field.as_string().unwrap().as_deref(), Some("7"));
}

#[test]
fn bool_field_yes_then_maybe() {
    let mut field = field("Secure", FieldType::Bool);
    assert_rejected!(field, "maybe");
    assert_none!(field.value());

    assert_ok!(field.set("yes"));
    assert_eq!(field.data(), Some(&Value::Bool(true)));

    assert_rejected!(field, "maybe");
    assert_eq!(field.data(), Some(&Value::Bool(true)));
    assert!(field.as_bool().unwrap());
}

#[test]
fn path_field_reads_back_as_path_and_string() {
    let mut field = field("Source", FieldType::Path);
    assert_ok!(field.set("C:\\foo"));
    assert_eq!(field.as_path().unwrap(), Some(PathValue::new("C:\\foo")));
    assert_eq!(field.as_string().unwrap().as_deref(), Some("C:\\foo"));
}

#[test]
fn path_field_bool_reads_differ() {
    let mut field = field("Source", FieldType::Path);
    assert!(!field.as_bool().unwrap());

    assert_ok!(field.set(""));
    assert!(!field.as_bool().unwrap());
    assert!(field.as_nullable_bool().unwrap_err().is_unsupported_read_conversion());
}

#[test]
fn large_number_keeps_widened_predecessor() {
    let mut field = field("FileSize", FieldType::LargeNumber);
    assert_ok!(field.set(5));
    assert_ok!(field.set("9999999999"));

    let head = field.value().unwrap();
    assert_eq!(head.data(), &Value::I64(9_999_999_999));
    assert_eq!(head.previous().unwrap().data(), &Value::I64(5));
}

#[test]
fn history_explains_who_set_a_value() {
    let def = FieldDefinition::new("Manufacturer", FieldType::String).into_shared();
    let mut field = Field::new(def);

    provenance::with_context("compile", || field.set("Contoso").map(|_| ())).unwrap();
    provenance::with_context("link", || field.set("Fabrikam").map(|_| ())).unwrap();

    let trail: Vec<_> = field
        .history()
        .map(|record| (record.context(), record.data().clone()))
        .collect();

    assert_eq!(
        trail,
        vec![
            (Some("link"), Value::from("Fabrikam")),
            (Some("compile"), Value::from("Contoso")),
        ]
    );
}
