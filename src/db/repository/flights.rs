//! Repository trait for flight arrivals.
//!
//! Besides the admin CRUD surface, this trait carries the two operations the
//! sync orchestrator is built on: a date-scoped delete and a batch insert.
//! The orchestrator calls them back to back to replace one day's snapshot.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::db::models::{FlightArrival, NewFlightArrival};

/// Repository trait for flight arrival data.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// List arrivals for one calendar date, ascending by scheduled time.
    async fn list_arrivals_for_date(
        &self,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<FlightArrival>>;

    /// List every stored arrival (admin table view), newest date first.
    async fn list_all_arrivals(&self) -> RepositoryResult<Vec<FlightArrival>>;

    /// Count arrivals for one calendar date.
    async fn count_arrivals_for_date(&self, date: NaiveDate) -> RepositoryResult<usize>;

    /// Delete every arrival for `date` (scoped delete, not a truncate).
    ///
    /// # Returns
    /// Number of rows deleted.
    async fn delete_arrivals_for_date(&self, date: NaiveDate) -> RepositoryResult<usize>;

    /// Insert a normalized batch as-is, ids included.
    ///
    /// # Returns
    /// Number of rows inserted.
    async fn insert_arrivals(&self, arrivals: &[FlightArrival]) -> RepositoryResult<usize>;

    /// Insert a single admin-entered arrival; the id is server-assigned.
    async fn insert_arrival(&self, arrival: NewFlightArrival) -> RepositoryResult<FlightArrival>;

    /// Replace the fields of an existing arrival. Fails with `NotFound` when
    /// the id does not exist.
    async fn update_arrival(
        &self,
        id: &str,
        arrival: NewFlightArrival,
    ) -> RepositoryResult<FlightArrival>;

    /// Delete one arrival by id. Fails with `NotFound` when the id does not
    /// exist.
    async fn delete_arrival(&self, id: &str) -> RepositoryResult<()>;
}
