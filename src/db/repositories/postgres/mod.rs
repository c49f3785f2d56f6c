//! Postgres repository implementation using Diesel.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic migration execution on startup
//! - Blocking Diesel calls wrapped in `spawn_blocking`
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::upsert::excluded;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;
use tokio::task;
use uuid::Uuid;

use crate::db::models::{
    Attraction, FlightArrival, NewAttraction, NewFlightArrival, NewOccupancyRate,
    NewOriginCountry, NewTouristSpending, NewVisitorStat, OccupancyRate, OriginCountry, Profile,
    TouristSpending, VisitorStat,
};
use crate::db::repository::{
    ErrorContext, FlightRepository, FullRepository, ProfileRepository, RepositoryError,
    RepositoryResult, TourismRepository,
};

mod models;
mod schema;

use models::{
    AttractionRow, FlightArrivalRow, OccupancyRateRow, OriginCountryRow, ProfileRow,
    TouristSpendingRow, VisitorStatRow,
};
use schema::{
    attractions, flight_arrivals, occupancy_rates, origin_countries, profiles, tourist_spending,
    visitor_stats,
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Postgres connection settings.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl PostgresConfig {
    /// Read configuration from environment variables.
    pub fn from_env() -> RepositoryResult<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| {
                RepositoryError::configuration(
                    "DATABASE_URL or PG_DATABASE_URL must be set for the postgres repository",
                )
            })?;

        Ok(Self {
            database_url,
            max_connections: env_u32("PG_POOL_MAX", 10),
            min_connections: env_u32("PG_POOL_MIN", 1),
            connect_timeout: Duration::from_secs(env_u32("PG_CONN_TIMEOUT_SEC", 30) as u64),
        })
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Diesel-backed repository over the tourism schema.
pub struct PostgresRepository {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl PostgresRepository {
    /// Build the pool and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_connections))
            .connection_timeout(config.connect_timeout)
            .build(manager)?;

        let mut conn = pool.get()?;
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::configuration(format!("failed to run migrations: {}", e))
        })?;

        Ok(Self { pool })
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Run a blocking Diesel closure on the blocking pool.
    async fn run<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("task join error: {}", e)))?
    }

    fn not_found(entity: &'static str, id: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("{} {} not found", entity, id),
            ErrorContext::default()
                .with_entity(entity)
                .with_entity_id(id),
        )
    }
}

#[async_trait]
impl TourismRepository for PostgresRepository {
    async fn list_visitor_stats(&self) -> RepositoryResult<Vec<VisitorStat>> {
        self.run(|conn| {
            let rows = visitor_stats::table
                .order((visitor_stats::year.asc(), visitor_stats::month.asc()))
                .load::<VisitorStatRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn insert_visitor_stat(&self, stat: NewVisitorStat) -> RepositoryResult<VisitorStat> {
        self.run(move |conn| {
            let row = VisitorStatRow::from_new(Self::next_id(), stat);
            let inserted = diesel::insert_into(visitor_stats::table)
                .values(&row)
                .get_result::<VisitorStatRow>(conn)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn update_visitor_stat(
        &self,
        id: &str,
        stat: NewVisitorStat,
    ) -> RepositoryResult<VisitorStat> {
        let id = id.to_string();
        self.run(move |conn| {
            let row = VisitorStatRow::from_new(id.clone(), stat);
            let updated = diesel::update(visitor_stats::table.find(&id))
                .set(&row)
                .get_result::<VisitorStatRow>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => Self::not_found("visitor_stat", &id),
                    other => other.into(),
                })?;
            Ok(updated.into())
        })
        .await
    }

    async fn delete_visitor_stat(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.run(move |conn| {
            let deleted = diesel::delete(visitor_stats::table.find(&id)).execute(conn)?;
            if deleted == 0 {
                return Err(Self::not_found("visitor_stat", &id));
            }
            Ok(())
        })
        .await
    }

    async fn list_origin_countries(&self) -> RepositoryResult<Vec<OriginCountry>> {
        self.run(|conn| {
            let rows = origin_countries::table
                .order(origin_countries::visitors.desc())
                .load::<OriginCountryRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn insert_origin_country(
        &self,
        country: NewOriginCountry,
    ) -> RepositoryResult<OriginCountry> {
        self.run(move |conn| {
            let row = OriginCountryRow::from_new(Self::next_id(), country);
            let inserted = diesel::insert_into(origin_countries::table)
                .values(&row)
                .get_result::<OriginCountryRow>(conn)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn update_origin_country(
        &self,
        id: &str,
        country: NewOriginCountry,
    ) -> RepositoryResult<OriginCountry> {
        let id = id.to_string();
        self.run(move |conn| {
            let row = OriginCountryRow::from_new(id.clone(), country);
            let updated = diesel::update(origin_countries::table.find(&id))
                .set(&row)
                .get_result::<OriginCountryRow>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => Self::not_found("origin_country", &id),
                    other => other.into(),
                })?;
            Ok(updated.into())
        })
        .await
    }

    async fn delete_origin_country(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.run(move |conn| {
            let deleted = diesel::delete(origin_countries::table.find(&id)).execute(conn)?;
            if deleted == 0 {
                return Err(Self::not_found("origin_country", &id));
            }
            Ok(())
        })
        .await
    }

    async fn list_occupancy_rates(&self) -> RepositoryResult<Vec<OccupancyRate>> {
        self.run(|conn| {
            let rows = occupancy_rates::table
                .order((occupancy_rates::year.asc(), occupancy_rates::month.asc()))
                .load::<OccupancyRateRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn insert_occupancy_rate(
        &self,
        rate: NewOccupancyRate,
    ) -> RepositoryResult<OccupancyRate> {
        self.run(move |conn| {
            let row = OccupancyRateRow::from_new(Self::next_id(), rate);
            let inserted = diesel::insert_into(occupancy_rates::table)
                .values(&row)
                .get_result::<OccupancyRateRow>(conn)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn update_occupancy_rate(
        &self,
        id: &str,
        rate: NewOccupancyRate,
    ) -> RepositoryResult<OccupancyRate> {
        let id = id.to_string();
        self.run(move |conn| {
            let row = OccupancyRateRow::from_new(id.clone(), rate);
            let updated = diesel::update(occupancy_rates::table.find(&id))
                .set(&row)
                .get_result::<OccupancyRateRow>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => Self::not_found("occupancy_rate", &id),
                    other => other.into(),
                })?;
            Ok(updated.into())
        })
        .await
    }

    async fn delete_occupancy_rate(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.run(move |conn| {
            let deleted = diesel::delete(occupancy_rates::table.find(&id)).execute(conn)?;
            if deleted == 0 {
                return Err(Self::not_found("occupancy_rate", &id));
            }
            Ok(())
        })
        .await
    }

    async fn list_tourist_spending(&self) -> RepositoryResult<Vec<TouristSpending>> {
        self.run(|conn| {
            let rows = tourist_spending::table
                .order((tourist_spending::year.asc(), tourist_spending::month.asc()))
                .load::<TouristSpendingRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn insert_tourist_spending(
        &self,
        spending: NewTouristSpending,
    ) -> RepositoryResult<TouristSpending> {
        self.run(move |conn| {
            let row = TouristSpendingRow::from_new(Self::next_id(), spending);
            let inserted = diesel::insert_into(tourist_spending::table)
                .values(&row)
                .get_result::<TouristSpendingRow>(conn)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn update_tourist_spending(
        &self,
        id: &str,
        spending: NewTouristSpending,
    ) -> RepositoryResult<TouristSpending> {
        let id = id.to_string();
        self.run(move |conn| {
            let row = TouristSpendingRow::from_new(id.clone(), spending);
            let updated = diesel::update(tourist_spending::table.find(&id))
                .set(&row)
                .get_result::<TouristSpendingRow>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => Self::not_found("tourist_spending", &id),
                    other => other.into(),
                })?;
            Ok(updated.into())
        })
        .await
    }

    async fn delete_tourist_spending(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.run(move |conn| {
            let deleted = diesel::delete(tourist_spending::table.find(&id)).execute(conn)?;
            if deleted == 0 {
                return Err(Self::not_found("tourist_spending", &id));
            }
            Ok(())
        })
        .await
    }

    async fn list_attractions(&self) -> RepositoryResult<Vec<Attraction>> {
        self.run(|conn| {
            let rows = attractions::table
                .order(attractions::visitor_count.desc())
                .load::<AttractionRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn insert_attraction(&self, attraction: NewAttraction) -> RepositoryResult<Attraction> {
        self.run(move |conn| {
            let row = AttractionRow::from_new(Self::next_id(), attraction);
            let inserted = diesel::insert_into(attractions::table)
                .values(&row)
                .get_result::<AttractionRow>(conn)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn update_attraction(
        &self,
        id: &str,
        attraction: NewAttraction,
    ) -> RepositoryResult<Attraction> {
        let id = id.to_string();
        self.run(move |conn| {
            let row = AttractionRow::from_new(id.clone(), attraction);
            let updated = diesel::update(attractions::table.find(&id))
                .set(&row)
                .get_result::<AttractionRow>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => Self::not_found("attraction", &id),
                    other => other.into(),
                })?;
            Ok(updated.into())
        })
        .await
    }

    async fn delete_attraction(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.run(move |conn| {
            let deleted = diesel::delete(attractions::table.find(&id)).execute(conn)?;
            if deleted == 0 {
                return Err(Self::not_found("attraction", &id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl FlightRepository for PostgresRepository {
    async fn list_arrivals_for_date(
        &self,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<FlightArrival>> {
        self.run(move |conn| {
            let rows = flight_arrivals::table
                .filter(flight_arrivals::date.eq(date))
                .order(flight_arrivals::scheduled_time.asc())
                .load::<FlightArrivalRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn list_all_arrivals(&self) -> RepositoryResult<Vec<FlightArrival>> {
        self.run(|conn| {
            let rows = flight_arrivals::table
                .order((
                    flight_arrivals::date.desc(),
                    flight_arrivals::scheduled_time.asc(),
                ))
                .load::<FlightArrivalRow>(conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn count_arrivals_for_date(&self, date: NaiveDate) -> RepositoryResult<usize> {
        self.run(move |conn| {
            let count: i64 = flight_arrivals::table
                .filter(flight_arrivals::date.eq(date))
                .count()
                .get_result(conn)?;
            Ok(count as usize)
        })
        .await
    }

    async fn delete_arrivals_for_date(&self, date: NaiveDate) -> RepositoryResult<usize> {
        self.run(move |conn| {
            let deleted =
                diesel::delete(flight_arrivals::table.filter(flight_arrivals::date.eq(date)))
                    .execute(conn)?;
            Ok(deleted)
        })
        .await
    }

    async fn insert_arrivals(&self, arrivals: &[FlightArrival]) -> RepositoryResult<usize> {
        let rows: Vec<FlightArrivalRow> =
            arrivals.iter().cloned().map(FlightArrivalRow::from).collect();
        self.run(move |conn| {
            let inserted = diesel::insert_into(flight_arrivals::table)
                .values(&rows)
                .execute(conn)?;
            Ok(inserted)
        })
        .await
    }

    async fn insert_arrival(&self, arrival: NewFlightArrival) -> RepositoryResult<FlightArrival> {
        self.run(move |conn| {
            let row = FlightArrivalRow::from_new(Self::next_id(), arrival);
            let inserted = diesel::insert_into(flight_arrivals::table)
                .values(&row)
                .get_result::<FlightArrivalRow>(conn)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn update_arrival(
        &self,
        id: &str,
        arrival: NewFlightArrival,
    ) -> RepositoryResult<FlightArrival> {
        let id = id.to_string();
        self.run(move |conn| {
            let row = FlightArrivalRow::from_new(id.clone(), arrival);
            let updated = diesel::update(flight_arrivals::table.find(&id))
                .set(&row)
                .get_result::<FlightArrivalRow>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => Self::not_found("flight_arrival", &id),
                    other => other.into(),
                })?;
            Ok(updated.into())
        })
        .await
    }

    async fn delete_arrival(&self, id: &str) -> RepositoryResult<()> {
        let id = id.to_string();
        self.run(move |conn| {
            let deleted = diesel::delete(flight_arrivals::table.find(&id)).execute(conn)?;
            if deleted == 0 {
                return Err(Self::not_found("flight_arrival", &id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ProfileRepository for PostgresRepository {
    async fn get_profile(&self, user_id: &str) -> RepositoryResult<Option<Profile>> {
        let user_id = user_id.to_string();
        self.run(move |conn| {
            let row = profiles::table
                .find(&user_id)
                .first::<ProfileRow>(conn)
                .optional()?;
            Ok(row.map(Into::into))
        })
        .await
    }

    async fn upsert_profile(&self, profile: Profile) -> RepositoryResult<Profile> {
        self.run(move |conn| {
            let row = ProfileRow::from(profile);
            let stored = diesel::insert_into(profiles::table)
                .values(&row)
                .on_conflict(profiles::id)
                .do_update()
                .set((
                    profiles::full_name.eq(excluded(profiles::full_name)),
                    profiles::role.eq(excluded(profiles::role)),
                ))
                .get_result::<ProfileRow>(conn)?;
            Ok(stored.into())
        })
        .await
    }
}

#[async_trait]
impl FullRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.run(|conn| {
            sql_query("SELECT 1").execute(conn)?;
            Ok(true)
        })
        .await
    }
}
