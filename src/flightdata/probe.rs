//! Shape prober: locate the flight-record array inside an arbitrary JSON
//! envelope.
//!
//! Observed API responses wrap the record array in several different ways: a
//! bare top-level array, an object with the array under some wrapper key
//! (`data`, `flights`, `results`, ...), or an object nesting the array one
//! level deeper. Rather than chase upstream schema changes, this module does a
//! bounded-depth search scored by key presence.

use serde_json::Value;

/// Keys that identify an object as a flight record. Mirrors the alias table
/// in [`crate::flightdata::normalize`]: any alias of flight-number,
/// airline-name, or origin counts.
const FLIGHT_KEYS: &[&str] = &[
    "flight_number",
    "flightNumber",
    "flight_id",
    "name",
    "airline_name",
    "airlineName",
    "airline",
    "origin",
    "from",
    "departure_airport",
];

/// Error returned when no candidate array exists at depth 0-2.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// No record array found. Carries the original document so operators can
    /// inspect what the API actually returned.
    #[error("no flight record array found in API response")]
    NotFound { document: Value },
}

/// Locate the array of per-flight records inside `doc`.
///
/// Search order, first match wins:
/// 1. `doc` itself is an array.
/// 2. Among the object's immediate array-valued properties (document order),
///    the single candidate whose first element carries a flight-identifying
///    key.
/// 3. Failing that, the first array-valued property in document order.
/// 4. Failing that, one level deeper: the first non-empty array inside any
///    object-valued property.
///
/// Pure function; the chosen path is logged at debug level as an operator
/// aid, nothing more.
pub fn locate_record_array(doc: &Value) -> Result<Vec<Value>, ShapeError> {
    if let Value::Array(records) = doc {
        log::debug!("flight records found at document root ({} items)", records.len());
        return Ok(records.clone());
    }

    if let Value::Object(map) = doc {
        let candidates: Vec<(&String, &Vec<Value>)> = map
            .iter()
            .filter_map(|(key, value)| match value {
                Value::Array(items) if !items.is_empty() => Some((key, items)),
                _ => None,
            })
            .collect();

        let qualified: Vec<&(&String, &Vec<Value>)> = candidates
            .iter()
            .filter(|(_, items)| looks_like_flight_record(&items[0]))
            .collect();

        // Exactly one key-qualified candidate wins outright; with zero or
        // several, fall back to plain document order.
        if qualified.len() == 1 {
            let (key, items) = qualified[0];
            log::debug!("flight records found under key '{}' by key-sniffing", key);
            return Ok((*items).clone());
        }
        if let Some((key, items)) = candidates.first() {
            log::debug!("flight records assumed under first array key '{}'", key);
            return Ok((*items).clone());
        }

        // No top-level array at all: recurse one level into object-valued
        // properties and take the first non-empty array found.
        for (outer_key, value) in map {
            if let Value::Object(inner) = value {
                for (inner_key, inner_value) in inner {
                    if let Value::Array(items) = inner_value {
                        if !items.is_empty() {
                            log::debug!(
                                "flight records found at nested path '{}.{}'",
                                outer_key,
                                inner_key
                            );
                            return Ok(items.clone());
                        }
                    }
                }
            }
        }
    }

    Err(ShapeError::NotFound {
        document: doc.clone(),
    })
}

fn looks_like_flight_record(value: &Value) -> bool {
    match value {
        Value::Object(map) => FLIGHT_KEYS.iter().any(|key| map.contains_key(*key)),
        _ => false,
    }
}
