//! Repository trait definitions.
//!
//! The traits split by concern (tourism tables, flight arrivals, profiles);
//! [`FullRepository`] is the umbrella every storage backend implements and
//! the type the rest of the crate programs against.

pub mod error;
pub mod flights;
pub mod profiles;
pub mod tourism;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use flights::FlightRepository;
pub use profiles::ProfileRepository;
pub use tourism::TourismRepository;

use async_trait::async_trait;

/// Combined repository interface.
///
/// Backends: [`crate::db::repositories::LocalRepository`] (in-memory) and,
/// behind the `postgres-repo` feature,
/// `crate::db::repositories::PostgresRepository`.
#[async_trait]
pub trait FullRepository:
    TourismRepository + FlightRepository + ProfileRepository + Send + Sync
{
    /// Verify the backend is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` when a round trip succeeds
    async fn health_check(&self) -> RepositoryResult<bool>;
}
