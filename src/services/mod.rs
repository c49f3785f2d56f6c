//! Service layer for business logic and orchestration.
//!
//! This module sits between the repository layer and the HTTP handlers.
//! Services orchestrate repository calls and implement the derived-statistics
//! and flight-sync logic.

pub mod stats;

pub mod sync;

pub use stats::{dashboard_summary, latest_and_change};
pub use sync::{sync_flights, SyncError};

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
