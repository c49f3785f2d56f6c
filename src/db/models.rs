//! Row types for the tourism statistics tables.
//!
//! These mirror the hosted database schema one-to-one. Every table row derives
//! Serialize/Deserialize so it can travel through the REST API unchanged.
//! The `New*` companions are the insert/update payloads: same shape minus the
//! server-assigned `id`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Monthly visitor counts, split by domestic/international.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorStat {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub domestic_count: i64,
    pub international_count: i64,
}

impl VisitorStat {
    /// Combined visitor count for the month.
    pub fn total(&self) -> i64 {
        self.domestic_count + self.international_count
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVisitorStat {
    pub year: i32,
    pub month: i32,
    pub domestic_count: i64,
    pub international_count: i64,
}

/// Yearly visitor totals per origin country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginCountry {
    pub id: String,
    pub name: String,
    pub visitors: i64,
    pub percentage: f64,
    pub change: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOriginCountry {
    pub name: String,
    pub visitors: i64,
    pub percentage: f64,
    pub change: String,
    pub year: i32,
}

/// Monthly hotel occupancy rate (percent, 0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRate {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOccupancyRate {
    pub year: i32,
    pub month: i32,
    pub rate: f64,
}

/// Monthly average tourist spending (RM).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouristSpending {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub average_spending: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTouristSpending {
    pub year: i32,
    pub month: i32,
    pub average_spending: f64,
}

/// Tourist attraction with map coordinates and popularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub visitor_count: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttraction {
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub visitor_count: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One arrival at Langkawi International Airport, in canonical form.
///
/// Produced either by the admin CRUD endpoints or by the live-sync normalizer
/// (`crate::flightdata::normalize`). Invariant: every string field is always
/// present, with `""` as the absence marker, so consumers never null-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightArrival {
    /// Source id when the upstream record had one, otherwise a synthesized
    /// `live-{flight_number}-{timestamp}` identifier.
    pub id: String,
    pub airline_code: String,
    pub airline_name: String,
    pub flight_number: String,
    pub origin_city: String,
    pub scheduled_time: String,
    pub estimated_time: String,
    pub status: String,
    pub terminal: String,
    /// Calendar date the record belongs to (the sync date, never sourced
    /// from the upstream payload).
    pub date: NaiveDate,
}

/// Admin create/update payload for a flight arrival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFlightArrival {
    #[serde(default)]
    pub airline_code: String,
    #[serde(default)]
    pub airline_name: String,
    pub flight_number: String,
    #[serde(default)]
    pub origin_city: String,
    #[serde(default)]
    pub scheduled_time: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub terminal: String,
    pub date: NaiveDate,
}

fn default_status() -> String {
    crate::flightdata::SCHEDULED_STATUS.to_string()
}

/// Per-user profile row; `role == "admin"` unlocks the admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// User id issued by the external identity provider.
    pub id: String,
    pub full_name: String,
    pub role: String,
}

impl Profile {
    pub const ADMIN_ROLE: &'static str = "admin";

    pub fn is_admin(&self) -> bool {
        self.role == Self::ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_stat_total() {
        let stat = VisitorStat {
            id: "v1".to_string(),
            year: 2024,
            month: 3,
            domestic_count: 12_000,
            international_count: 8_500,
        };
        assert_eq!(stat.total(), 20_500);
    }

    #[test]
    fn test_profile_role_check() {
        let admin = Profile {
            id: "u1".to_string(),
            full_name: "Ops".to_string(),
            role: "admin".to_string(),
        };
        let viewer = Profile {
            id: "u2".to_string(),
            full_name: "Viewer".to_string(),
            role: "user".to_string(),
        };
        assert!(admin.is_admin());
        assert!(!viewer.is_admin());
    }

    #[test]
    fn test_new_flight_arrival_defaults() {
        let json = r#"{"flight_number":"MH1432","date":"2024-05-15"}"#;
        let arrival: NewFlightArrival = serde_json::from_str(json).unwrap();
        assert_eq!(arrival.status, "Scheduled");
        assert_eq!(arrival.terminal, "");
    }
}
