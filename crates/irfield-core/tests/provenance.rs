use irfield_core::{provenance, Field, FieldDefinition, FieldType};
use test_util::prelude::*;

fn field(ty: FieldType) -> Field {
    Field::new(FieldDefinition::new("Test", ty).into_shared())
}

#[test]
fn records_copy_the_ambient_label() {
    let mut field = field(FieldType::String);

    provenance::set_context("phase-A");
    assert_ok!(field.set("x"));
    assert_eq!(field.context(), Some("phase-A"));

    provenance::clear_context();
    assert_ok!(field.set("y"));
    assert_none!(field.context());

    let previous = field.value().unwrap().previous().unwrap();
    assert_eq!(previous.context(), Some("phase-A"));
}

#[test]
fn label_persists_across_writes_and_fields() {
    let mut a = field(FieldType::Number);
    let mut b = field(FieldType::Bool);

    provenance::set_context("bind");
    assert_ok!(a.set(1));
    assert_ok!(b.set(true));
    assert_ok!(a.set(2));
    provenance::clear_context();

    assert!(a.history().all(|record| record.context() == Some("bind")));
    assert_eq!(b.context(), Some("bind"));
}

#[test]
fn rejected_write_does_not_consume_label() {
    let mut field = field(FieldType::Number);

    provenance::set_context("parse");
    let _ = field.set("nope");
    assert_ok!(field.set(4));
    provenance::clear_context();

    assert_eq!(field.history_len(), 1);
    assert_eq!(field.context(), Some("parse"));
}

#[test]
fn scope_tags_a_batch() {
    let mut field = field(FieldType::Path);
    provenance::clear_context();

    {
        let _scope = provenance::scope("layout");
        assert_ok!(field.set("a"));
        assert_ok!(field.set("b"));
    }
    assert_ok!(field.set("c"));

    let labels: Vec<_> = field.history().map(|record| record.context()).collect();
    assert_eq!(labels, [None, Some("layout"), Some("layout")]);
}

#[test]
fn explicit_context_overrides_ambient_label() {
    let mut field = field(FieldType::String);

    provenance::set_context("ambient");
    assert_ok!(field.set_with_context("v", Some("explicit")));
    assert_eq!(field.context(), Some("explicit"));

    assert_ok!(field.set_with_context("w", None));
    assert_none!(field.context());

    assert_eq!(provenance::context().as_deref(), Some("ambient"));
    provenance::clear_context();
}

#[test]
fn threads_tag_independently() {
    let handles: Vec<_> = ["left", "right"]
        .into_iter()
        .map(|label| {
            std::thread::spawn(move || {
                let mut field = field(FieldType::Number);
                provenance::set_context(label);
                for n in 0..100 {
                    field.set(n).unwrap();
                }
                (label, field)
            })
        })
        .collect();

    for handle in handles {
        let (label, field) = handle.join().unwrap();
        assert!(field.history().all(|record| record.context() == Some(label)));
    }
}
