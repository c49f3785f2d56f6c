//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::flightdata::FlightDataSource;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Flight API source; `None` when no endpoint is configured, which
    /// disables the live-sync route but nothing else.
    pub flight_source: Option<Arc<dyn FlightDataSource>>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            flight_source: None,
        }
    }

    /// Attach a flight data source, enabling the sync route.
    pub fn with_flight_source(mut self, source: Arc<dyn FlightDataSource>) -> Self {
        self.flight_source = Some(source);
        self
    }
}
