//! Public API surface for the Rust backend.
//!
//! This file consolidates the data types exposed through the REST API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::db::models::{
    Attraction, FlightArrival, NewAttraction, NewFlightArrival, NewOccupancyRate,
    NewOriginCountry, NewTouristSpending, NewVisitorStat, OccupancyRate, OriginCountry, Profile,
    TouristSpending, VisitorStat,
};

use serde::{Deserialize, Serialize};

/// How the period-over-period delta of a series is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeMode {
    /// `(current - previous) / previous * 100`, for counts and amounts.
    Relative,
    /// `current - previous`, for series that are already percentages, where
    /// the delta reads in percentage points (e.g. occupancy rate).
    PercentagePoints,
}

/// Latest value of a series plus its change versus the previous point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStat {
    pub latest: f64,
    pub percent_change: f64,
}

impl DerivedStat {
    pub const ZERO: DerivedStat = DerivedStat {
        latest: 0.0,
        percent_change: 0.0,
    };
}

/// Headline metrics for the dashboard stat grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Monthly visitor total (domestic + international), relative change.
    pub visitors: DerivedStat,
    /// Monthly occupancy rate, change in percentage points.
    pub occupancy: DerivedStat,
    /// Monthly average spending, relative change.
    pub spending: DerivedStat,
    /// Flight arrivals today vs yesterday, relative change.
    pub flights: DerivedStat,
}

/// Outcome of a flight sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub inserted_count: usize,
}
