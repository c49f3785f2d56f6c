//! Field normalizer: map loosely-typed flight records into the canonical
//! [`FlightArrival`] shape.
//!
//! Field names differ across the upstream sources the flight API aggregates,
//! so each canonical field resolves through an ordered alias list (first
//! present, non-null value wins). Normalization is total: it never fails, and
//! unresolvable fields degrade to `""` so a row is always available.

use chrono::NaiveDate;
use serde_json::Value;

use super::SCHEDULED_STATUS;
use crate::db::models::FlightArrival;

// Alias tables, evaluated top to bottom. Kept declarative so the alias
// policy stays auditable in one place.
const FLIGHT_NUMBER_ALIASES: &[&str] = &["flight_number", "flightNumber", "flight_id"];
const AIRLINE_NAME_ALIASES: &[&str] = &["name", "airline_name", "airlineName", "airline"];
const AIRLINE_CODE_ALIASES: &[&str] = &["airline_code", "airlineCode"];
const ORIGIN_ALIASES: &[&str] = &["origin", "from", "departure_airport"];
const SCHEDULED_TIME_ALIASES: &[&str] = &["scheduled_time", "scheduledTime", "std"];
const ESTIMATED_TIME_ALIASES: &[&str] = &["estimated_time", "estimatedTime", "etd"];

/// Normalize a batch of raw records for `today`.
///
/// `today` becomes the `date` of every row regardless of any date field in
/// the source. `batch_epoch_ms` seeds synthesized identifiers for records
/// without a source `id`; callers pass one timestamp per batch so the
/// function stays pure and reproducible under test.
pub fn normalize_records(
    raw: &[Value],
    today: NaiveDate,
    batch_epoch_ms: i64,
) -> Vec<FlightArrival> {
    let records: Vec<FlightArrival> = raw
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_one(record, index, today, batch_epoch_ms))
        .collect();

    // Operator aid only; the contract is the returned batch.
    for sample in records.iter().take(2) {
        log::debug!(
            "normalized flight {} from {} ({})",
            sample.flight_number,
            sample.origin_city,
            sample.status
        );
    }

    records
}

fn normalize_one(
    record: &Value,
    index: usize,
    today: NaiveDate,
    batch_epoch_ms: i64,
) -> FlightArrival {
    let flight_number = first_string(record, FLIGHT_NUMBER_ALIASES)
        .unwrap_or_else(|| format!("UNKNOWN-{}", index));

    let id = match record.get("id").filter(|v| !v.is_null()) {
        Some(value) => coerce_string(value).unwrap_or_else(|| value.to_string()),
        // Weak uniqueness: distinct only while flight numbers differ within
        // the batch. Each sync replaces the whole day, so collisions cannot
        // accumulate across syncs.
        None => format!("live-{}-{}", flight_number, batch_epoch_ms),
    };

    FlightArrival {
        id,
        airline_code: first_string(record, AIRLINE_CODE_ALIASES).unwrap_or_default(),
        airline_name: first_string(record, AIRLINE_NAME_ALIASES).unwrap_or_default(),
        flight_number,
        origin_city: extract_origin(record),
        scheduled_time: first_string(record, SCHEDULED_TIME_ALIASES).unwrap_or_default(),
        estimated_time: first_string(record, ESTIMATED_TIME_ALIASES).unwrap_or_default(),
        status: first_string(record, &["status"])
            .unwrap_or_else(|| SCHEDULED_STATUS.to_string()),
        terminal: first_string(record, &["terminal"]).unwrap_or_default(),
        date: today,
    }
}

/// Origin is special-cased: some sources send `{"origin": {"city": "..."}}`,
/// others a plain string under one of the aliases.
fn extract_origin(record: &Value) -> String {
    if let Some(Value::Object(origin)) = record.get("origin") {
        if let Some(city) = origin.get("city").and_then(coerce_string) {
            return city;
        }
    }
    first_string(record, ORIGIN_ALIASES).unwrap_or_default()
}

/// First alias whose value is present and coercible to a string.
fn first_string(record: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(coerce_string)
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // Some sources send flight numbers and terminals as bare numbers.
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_alias_resolution_and_origin_object() {
        let raw = vec![json!({
            "flight_number": "MH1",
            "origin": {"city": "KUL"},
        })];
        let records = normalize_records(&raw, day(), 1_700_000_000_000);
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.flight_number, "MH1");
        assert_eq!(rec.origin_city, "KUL");
        assert_eq!(rec.date, day());
        assert_eq!(rec.airline_code, "");
        assert_eq!(rec.airline_name, "");
        assert_eq!(rec.scheduled_time, "");
        assert_eq!(rec.estimated_time, "");
        assert_eq!(rec.terminal, "");
        assert_eq!(rec.status, "Scheduled");
    }

    #[test]
    fn test_empty_record_synthesizes_flight_number() {
        let records = normalize_records(&[json!({})], day(), 42);
        let rec = &records[0];
        assert_eq!(rec.flight_number, "UNKNOWN-0");
        assert_eq!(rec.id, "live-UNKNOWN-0-42");
        assert_eq!(rec.status, "Scheduled");
        assert_eq!(rec.origin_city, "");
    }

    #[test]
    fn test_camel_case_and_short_code_aliases() {
        let raw = vec![json!({
            "flightNumber": "AK5642",
            "airlineName": "AirAsia",
            "airlineCode": "AK",
            "from": "Singapore",
            "std": "11:45",
            "etd": "11:52",
            "status": "Delayed",
            "terminal": 2,
        })];
        let rec = &normalize_records(&raw, day(), 0)[0];
        assert_eq!(rec.flight_number, "AK5642");
        assert_eq!(rec.airline_name, "AirAsia");
        assert_eq!(rec.airline_code, "AK");
        assert_eq!(rec.origin_city, "Singapore");
        assert_eq!(rec.scheduled_time, "11:45");
        assert_eq!(rec.estimated_time, "11:52");
        assert_eq!(rec.status, "Delayed");
        assert_eq!(rec.terminal, "2");
    }

    #[test]
    fn test_alias_priority_first_present_wins() {
        let raw = vec![json!({
            "flight_number": "MH1",
            "flightNumber": "SHOULD-LOSE",
            "name": "Malaysia Airlines",
            "airline": "should lose too",
        })];
        let rec = &normalize_records(&raw, day(), 0)[0];
        assert_eq!(rec.flight_number, "MH1");
        assert_eq!(rec.airline_name, "Malaysia Airlines");
    }

    #[test]
    fn test_source_id_preserved() {
        let raw = vec![json!({"id": "abc-123", "flight_id": "FD3311"})];
        let rec = &normalize_records(&raw, day(), 99)[0];
        assert_eq!(rec.id, "abc-123");
        assert_eq!(rec.flight_number, "FD3311");
    }

    #[test]
    fn test_null_alias_values_are_skipped() {
        let raw = vec![json!({
            "flight_number": null,
            "flightNumber": "AK1",
        })];
        let rec = &normalize_records(&raw, day(), 0)[0];
        assert_eq!(rec.flight_number, "AK1");
    }

    #[test]
    fn test_idempotent_for_fixed_inputs() {
        let raw = vec![json!({"flight_number": "MH1", "origin": "KUL"})];
        let first = normalize_records(&raw, day(), 1234);
        let second = normalize_records(&raw, day(), 1234);
        assert_eq!(first, second);
    }

    #[test]
    fn test_indices_count_per_batch() {
        let records = normalize_records(&[json!({}), json!({}), json!({})], day(), 7);
        let numbers: Vec<&str> = records.iter().map(|r| r.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["UNKNOWN-0", "UNKNOWN-1", "UNKNOWN-2"]);
    }
}
