//! Repository trait for the tourism statistics tables.
//!
//! Covers the five chart-backing tables: visitor stats, origin countries,
//! occupancy rates, tourist spending, and attractions. Reads come back in
//! presentation order (time series ascending by year/month, rankings
//! descending by visitor volume) so callers never re-sort.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::{
    Attraction, NewAttraction, NewOccupancyRate, NewOriginCountry, NewTouristSpending,
    NewVisitorStat, OccupancyRate, OriginCountry, TouristSpending, VisitorStat,
};

/// Repository trait for tourism statistics.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TourismRepository: Send + Sync {
    // ==================== Visitor stats ====================

    /// List all visitor stats, ascending by (year, month).
    async fn list_visitor_stats(&self) -> RepositoryResult<Vec<VisitorStat>>;

    /// Insert a visitor stat row; the id is server-assigned.
    async fn insert_visitor_stat(&self, stat: NewVisitorStat) -> RepositoryResult<VisitorStat>;

    /// Replace the fields of an existing row. Fails with `NotFound` when the
    /// id does not exist.
    async fn update_visitor_stat(
        &self,
        id: &str,
        stat: NewVisitorStat,
    ) -> RepositoryResult<VisitorStat>;

    /// Delete a row by id. Fails with `NotFound` when the id does not exist.
    async fn delete_visitor_stat(&self, id: &str) -> RepositoryResult<()>;

    // ==================== Origin countries ====================

    /// List all origin countries, descending by visitor count.
    async fn list_origin_countries(&self) -> RepositoryResult<Vec<OriginCountry>>;

    async fn insert_origin_country(
        &self,
        country: NewOriginCountry,
    ) -> RepositoryResult<OriginCountry>;

    async fn update_origin_country(
        &self,
        id: &str,
        country: NewOriginCountry,
    ) -> RepositoryResult<OriginCountry>;

    async fn delete_origin_country(&self, id: &str) -> RepositoryResult<()>;

    // ==================== Occupancy rates ====================

    /// List all occupancy rates, ascending by (year, month).
    async fn list_occupancy_rates(&self) -> RepositoryResult<Vec<OccupancyRate>>;

    async fn insert_occupancy_rate(
        &self,
        rate: NewOccupancyRate,
    ) -> RepositoryResult<OccupancyRate>;

    async fn update_occupancy_rate(
        &self,
        id: &str,
        rate: NewOccupancyRate,
    ) -> RepositoryResult<OccupancyRate>;

    async fn delete_occupancy_rate(&self, id: &str) -> RepositoryResult<()>;

    // ==================== Tourist spending ====================

    /// List all spending rows, ascending by (year, month).
    async fn list_tourist_spending(&self) -> RepositoryResult<Vec<TouristSpending>>;

    async fn insert_tourist_spending(
        &self,
        spending: NewTouristSpending,
    ) -> RepositoryResult<TouristSpending>;

    async fn update_tourist_spending(
        &self,
        id: &str,
        spending: NewTouristSpending,
    ) -> RepositoryResult<TouristSpending>;

    async fn delete_tourist_spending(&self, id: &str) -> RepositoryResult<()>;

    // ==================== Attractions ====================

    /// List all attractions, descending by visitor count.
    async fn list_attractions(&self) -> RepositoryResult<Vec<Attraction>>;

    async fn insert_attraction(&self, attraction: NewAttraction) -> RepositoryResult<Attraction>;

    async fn update_attraction(
        &self,
        id: &str,
        attraction: NewAttraction,
    ) -> RepositoryResult<Attraction>;

    async fn delete_attraction(&self, id: &str) -> RepositoryResult<()>;
}
