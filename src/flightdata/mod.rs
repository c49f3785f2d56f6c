//! Live flight-arrival ingestion.
//!
//! The third-party flight API does not commit to a stable response shape:
//! the record array moves between nesting levels and the per-record field
//! names vary by upstream source. This module deals with that in two passes:
//!
//! - [`probe`]: find the array of flight records inside an arbitrary JSON
//!   envelope (bounded-depth heuristic search).
//! - [`normalize`]: map each loosely-typed record into the fixed
//!   [`crate::db::models::FlightArrival`] shape, degrading missing fields to
//!   empty strings instead of erroring.
//!
//! [`client`] is the thin reqwest wrapper that fetches the raw document.

pub mod client;
pub mod normalize;
pub mod probe;

pub use client::{FlightApiClient, FlightApiError, FlightDataSource};
pub use normalize::normalize_records;
pub use probe::{locate_record_array, ShapeError};

/// Status assigned to records whose source carries none.
pub const SCHEDULED_STATUS: &str = "Scheduled";
