//! Flight sync orchestrator: fetch, locate, normalize, persist.
//!
//! Replaces one day's persisted flight arrivals with a freshly fetched and
//! normalized batch. The delete and insert are not wrapped in a transaction
//! (the local backend has none to offer): a crash between them leaves the
//! day empty until the next successful sync. Concurrent sync calls cannot
//! interleave, however; all runs serialize on a process-wide mutex, so a
//! second caller's delete never lands between a first caller's delete and
//! insert.

use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;

use crate::api::SyncOutcome;
use crate::db::repository::{FlightRepository, FullRepository, RepositoryError};
use crate::flightdata::{locate_record_array, normalize_records, FlightApiError, FlightDataSource, ShapeError};

/// Serializes sync runs within the process.
static SYNC_GATE: Mutex<()> = Mutex::const_new(());

/// Errors from a sync run, tagged with the failing stage.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("flight sync failed at fetch: {0}")]
    Fetch(#[from] FlightApiError),
    #[error("flight sync failed at locate: {0}")]
    Locate(#[from] ShapeError),
    #[error("flight sync failed at persist: {0}")]
    Persist(#[from] RepositoryError),
}

impl SyncError {
    /// Stage name surfaced to the operator.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Locate(_) => "locate",
            Self::Persist(_) => "persist",
        }
    }
}

/// Refresh the persisted flight arrivals for `today`.
///
/// Steps: fetch the raw document, locate the record array, normalize, delete
/// the day's existing rows, insert the new batch. No automatic retry at any
/// stage; failures surface to the operator who re-triggers the sync.
pub async fn sync_flights(
    source: &dyn FlightDataSource,
    repo: &dyn FullRepository,
    today: NaiveDate,
) -> Result<SyncOutcome, SyncError> {
    let _gate = SYNC_GATE.lock().await;

    let document = source.fetch_document().await?;
    let raw_records = locate_record_array(&document)?;

    let batch_epoch_ms = Utc::now().timestamp_millis();
    let arrivals = normalize_records(&raw_records, today, batch_epoch_ms);

    let deleted = repo.delete_arrivals_for_date(today).await?;
    let inserted_count = repo.insert_arrivals(&arrivals).await?;

    log::info!(
        "flight sync for {}: {} rows replaced by {} fresh arrivals",
        today,
        deleted,
        inserted_count
    );

    Ok(SyncOutcome { inserted_count })
}
