use crate::domain::normalize::{NO, TBA, YES};
use crate::domain::changes::ChangeRecord;
use crate::domain::{detect_changes, Snapshot};
use crate::tests::utils::listing;
use serde_json::json;

fn base() -> Snapshot {
    Snapshot::from_listing(&listing(json!({
        "token": "T", "date": "2024-01-01", "phase": 1,
        "name": "Test", "time": "", "amount": "100", "points": "200", "type": "tge"
    })))
}

#[test]
fn amount_change_is_reported() {
    let changes = detect_changes(
        &base(),
        &listing(json!({
            "token": "T", "date": "2024-01-01", "phase": 1,
            "name": "Test", "amount": "150", "points": "200", "type": "tge"
        })),
    );

    assert_eq!(
        changes,
        vec![ChangeRecord {
            field: "数量".into(),
            old: "100".into(),
            new: "150".into(),
        }]
    );
}

#[test]
fn changes_follow_fixed_field_order() {
    // Fields deliberately listed in reverse.
    let changes = detect_changes(
        &base(),
        &listing(json!({
            "completed": true, "type": "tge", "points": "200",
            "amount": "90", "time": "", "name": "Renamed",
            "token": "T", "date": "2024-01-01"
        })),
    );

    let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, vec!["项目名称", "数量", "状态"]);
    assert_eq!(changes[2].old, NO);
    assert_eq!(changes[2].new, YES);
}

#[test]
fn empty_side_shows_placeholder() {
    let changes = detect_changes(
        &base(),
        &listing(json!({
            "name": "Test", "time": "10:00", "amount": "-", "points": "200", "type": "tge"
        })),
    );

    assert_eq!(
        changes,
        vec![
            ChangeRecord {
                field: "时间".into(),
                old: TBA.into(),
                new: "10:00".into(),
            },
            ChangeRecord {
                field: "数量".into(),
                old: "100".into(),
                new: TBA.into(),
            },
        ]
    );
}

#[test]
fn representation_drift_is_not_a_change() {
    let changes = detect_changes(
        &base(),
        &listing(json!({
            "name": " Test ", "time": "null", "amount": 100,
            "points": "200", "type": "tge", "completed": "False"
        })),
    );

    assert!(changes.is_empty(), "unexpected changes: {changes:?}");
}

#[test]
fn unmonitored_fields_are_ignored() {
    let changes = detect_changes(
        &base(),
        &listing(json!({
            "name": "Test", "amount": "100", "points": "200", "type": "tge",
            "chain": "BSC", "contract": "0xabc"
        })),
    );

    assert!(changes.is_empty());
}
