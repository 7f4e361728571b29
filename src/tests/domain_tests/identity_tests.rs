use crate::domain::derive_key;
use crate::tests::utils::listing;
use serde_json::json;

#[test]
fn key_is_token_date_phase() {
    let l = listing(json!({"token": "ABC", "date": "2024-01-01", "phase": 2}));
    assert_eq!(derive_key(&l), "ABC_2024-01-01_P2");
}

#[test]
fn phase_defaults_to_one() {
    let l = listing(json!({"token": "ABC", "date": "2024-01-01"}));
    assert_eq!(derive_key(&l), "ABC_2024-01-01_P1");

    let null_phase = listing(json!({"token": "ABC", "date": "2024-01-01", "phase": null}));
    assert_eq!(derive_key(&null_phase), "ABC_2024-01-01_P1");
}

#[test]
fn key_ignores_monitored_fields() {
    let a = listing(json!({
        "token": "T", "date": "2024-01-01", "phase": 1,
        "name": "One", "amount": "100", "completed": false
    }));
    let b = listing(json!({
        "token": "T", "date": "2024-01-01", "phase": 1,
        "name": "Renamed", "amount": "150", "type": "tge", "completed": true
    }));

    assert_eq!(derive_key(&a), derive_key(&b));
}

#[test]
fn missing_token_and_date_use_defaults() {
    let l = listing(json!({"name": "no identity"}));
    assert_eq!(derive_key(&l), "UNKNOWN__P1");

    let null_token = listing(json!({"token": null, "date": ""}));
    assert_eq!(derive_key(&null_token), "UNKNOWN__P1");
}

#[test]
fn non_string_identity_values_render_as_text() {
    let l = listing(json!({"token": 42, "date": "2024-02-02", "phase": "2"}));
    assert_eq!(derive_key(&l), "42_2024-02-02_P2");
}
