use crate::domain::{detect_changes, Snapshot};
use crate::tests::utils::{listing, listing_from_snapshot};
use serde_json::{json, Value};

#[test]
fn absent_fields_are_defaulted() {
    let snap = Snapshot::from_listing(&listing(json!({"token": "T"})));

    assert_eq!(snap.token, json!("T"));
    assert_eq!(snap.name, json!(""));
    assert_eq!(snap.amount, json!(""));
    assert_eq!(snap.phase, json!(""));
    assert_eq!(snap.completed, Value::Bool(false));
}

#[test]
fn null_fields_are_treated_as_absent() {
    let snap = Snapshot::from_listing(&listing(json!({"token": "T", "time": null, "completed": null})));

    assert_eq!(snap.time, json!(""));
    assert_eq!(snap.completed, Value::Bool(false));
}

#[test]
fn raw_values_are_kept() {
    let snap = Snapshot::from_listing(&listing(json!({
        "token": "T", "amount": 100, "phase": 2, "completed": "true"
    })));

    assert_eq!(snap.amount, json!(100));
    assert_eq!(snap.phase, json!(2));
    assert_eq!(snap.completed, json!("true"));
}

#[test]
fn missing_completed_matches_explicit_false() {
    let without = listing(json!({"token": "T", "date": "2024-01-01", "amount": "100"}));
    let with_false = listing(json!({
        "token": "T", "date": "2024-01-01", "amount": "100", "completed": false
    }));

    assert!(detect_changes(&Snapshot::from_listing(&without), &with_false).is_empty());
    assert!(detect_changes(&Snapshot::from_listing(&with_false), &without).is_empty());
}

#[test]
fn stored_values_compare_unchanged() {
    let snap = Snapshot::from_listing(&listing(json!({
        "token": "T", "date": "2024-01-01", "name": "Test",
        "time": "", "amount": "100", "type": "grab", "completed": true
    })));

    assert!(detect_changes(&snap, &listing_from_snapshot(&snap)).is_empty());
}

#[test]
fn serializes_fields_in_document_order() {
    let snap = Snapshot::from_listing(&listing(json!({"token": "T", "date": "2024-01-01"})));
    let text = serde_json::to_string(&snap).unwrap();

    assert_eq!(
        text,
        r#"{"token":"T","name":"","date":"2024-01-01","time":"","amount":"","points":"","type":"","phase":"","completed":false}"#
    );
}

#[test]
fn partial_documents_fill_defaults() {
    let snap: Snapshot = serde_json::from_value(json!({"token": "T", "amount": "5"})).unwrap();

    assert_eq!(snap.amount, json!("5"));
    assert_eq!(snap.kind, json!(""));
    assert_eq!(snap.completed, Value::Bool(false));
}
