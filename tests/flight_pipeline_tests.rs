//! End-to-end tests of the flight ingestion pipeline: shape probing plus
//! normalization over realistic API documents.

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::{json, Value};

use lti_rust::flightdata::{locate_record_array, normalize_records, ShapeError};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

#[test]
fn test_bare_array_document() {
    let doc = json!([
        {"flight_number": "MH1432", "name": "Malaysia Airlines", "origin": {"city": "Kuala Lumpur"}},
        {"flight_number": "AK5642", "name": "AirAsia", "origin": {"city": "Singapore"}},
    ]);

    let records = locate_record_array(&doc).unwrap();
    let arrivals = normalize_records(&records, day(), 1);

    assert_eq!(arrivals.len(), 2);
    assert_eq!(arrivals[0].flight_number, "MH1432");
    assert_eq!(arrivals[0].origin_city, "Kuala Lumpur");
    assert_eq!(arrivals[1].airline_name, "AirAsia");
    assert!(arrivals.iter().all(|a| a.date == day()));
}

#[test]
fn test_wrapped_document_with_noise_siblings() {
    // The record array sits next to a pagination array; key sniffing must
    // pick the flight-shaped one.
    let doc = json!({
        "pages": [1, 2, 3],
        "data": [
            {"flightNumber": "FD3311", "airline": "Thai AirAsia", "from": "Bangkok", "std": "14:20"},
        ],
        "total": 1,
    });

    let records = locate_record_array(&doc).unwrap();
    let arrivals = normalize_records(&records, day(), 1);

    assert_eq!(arrivals[0].flight_number, "FD3311");
    assert_eq!(arrivals[0].airline_name, "Thai AirAsia");
    assert_eq!(arrivals[0].origin_city, "Bangkok");
    assert_eq!(arrivals[0].scheduled_time, "14:20");
}

#[test]
fn test_nested_envelope() {
    let doc = json!({
        "meta": {"source": "aggregator"},
        "response": {
            "arrivals": [{"flight_id": "QZ502", "departure_airport": "Jakarta"}],
        },
    });

    let records = locate_record_array(&doc).unwrap();
    let arrivals = normalize_records(&records, day(), 1);

    assert_eq!(arrivals[0].flight_number, "QZ502");
    assert_eq!(arrivals[0].origin_city, "Jakarta");
}

#[test]
fn test_shapeless_document_is_rejected() {
    let doc = json!({"error": "rate limited", "retry_after": 60});
    match locate_record_array(&doc) {
        Err(ShapeError::NotFound { document }) => assert_eq!(document, doc),
        other => panic!("expected ShapeError::NotFound, got {:?}", other),
    }
}

#[test]
fn test_every_field_always_present() {
    // Records with wildly different shapes all come out fully populated.
    let docs = vec![
        json!({}),
        json!({"flight_number": "MH1"}),
        json!({"unrelated": true, "fields": [1, 2]}),
        json!({"origin": {"country": "MY"}}),
    ];
    let arrivals = normalize_records(&docs, day(), 5);

    for (i, arrival) in arrivals.iter().enumerate() {
        assert!(!arrival.id.is_empty(), "record {} missing id", i);
        assert!(!arrival.flight_number.is_empty());
        assert!(!arrival.status.is_empty());
        assert_eq!(arrival.date, day());
    }
    assert_eq!(arrivals[0].flight_number, "UNKNOWN-0");
    assert_eq!(arrivals[2].flight_number, "UNKNOWN-2");
    // An origin object without a city degrades to empty, not an error.
    assert_eq!(arrivals[3].origin_city, "");
}

#[test]
fn test_same_inputs_same_outputs() {
    let raw = vec![
        json!({"flight_number": "MH1432", "scheduled_time": "09:30"}),
        json!({"id": "fixed-id", "flightNumber": "AK5642"}),
    ];
    let first = normalize_records(&raw, day(), 777);
    let second = normalize_records(&raw, day(), 777);
    assert_eq!(first, second);

    // A different batch timestamp only moves the synthesized id.
    let third = normalize_records(&raw, day(), 778);
    assert_ne!(first[0].id, third[0].id);
    assert_eq!(first[1].id, third[1].id);
    assert_eq!(first[0].flight_number, third[0].flight_number);
}

// Recursive strategy over arbitrary JSON values, depth-bounded like the
// prober itself.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9:_-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,10}", inner, 0..6)
                .prop_map(|m| { Value::Object(m.into_iter().collect()) }),
        ]
    })
}

proptest! {
    // Normalization is total: any array of JSON values yields one fully
    // populated arrival per input, without panicking.
    #[test]
    fn prop_normalize_never_fails(records in prop::collection::vec(arb_json(), 0..8)) {
        let arrivals = normalize_records(&records, day(), 1);
        prop_assert_eq!(arrivals.len(), records.len());
        for arrival in &arrivals {
            prop_assert!(!arrival.flight_number.is_empty());
            prop_assert!(!arrival.status.is_empty());
            prop_assert_eq!(arrival.date, day());
        }
    }

    // The prober either finds a non-empty array (or the document itself, when
    // it is an array) or reports NotFound; it never panics.
    #[test]
    fn prop_probe_total(doc in arb_json()) {
        match locate_record_array(&doc) {
            Ok(records) => {
                if !doc.is_array() {
                    prop_assert!(!records.is_empty());
                }
            }
            Err(ShapeError::NotFound { document }) => prop_assert_eq!(document, doc),
        }
    }
}
