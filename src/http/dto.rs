//! Data Transfer Objects for the HTTP API.
//!
//! Table rows and the `New*` payloads already derive Serialize/Deserialize
//! and travel through the API unchanged; this module adds the wrapper and
//! query types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    Attraction, ChangeMode, DashboardSummary, DerivedStat, FlightArrival, NewAttraction,
    NewFlightArrival, NewOccupancyRate, NewOriginCountry, NewTouristSpending, NewVisitorStat,
    OccupancyRate, OriginCountry, Profile, SyncOutcome, TouristSpending, VisitorStat,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Generic list wrapper used by the table read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// One day's flight arrivals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightListResponse {
    pub date: NaiveDate,
    pub arrivals: Vec<FlightArrival>,
    pub total: usize,
}

/// Query parameters for the flights endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlightsQuery {
    /// Calendar date to list; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Response for a triggered flight sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    pub inserted_count: usize,
    pub date: NaiveDate,
    pub message: String,
}
