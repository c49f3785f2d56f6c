//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Chart data
        .route("/stats/visitors", get(handlers::list_visitor_stats))
        .route("/stats/origin-countries", get(handlers::list_origin_countries))
        .route("/stats/occupancy", get(handlers::list_occupancy_rates))
        .route("/stats/spending", get(handlers::list_tourist_spending))
        .route("/attractions", get(handlers::list_attractions))
        .route("/dashboard/summary", get(handlers::get_dashboard_summary))
        // Flights
        .route("/flights", get(handlers::list_flights))
        .route("/flights/sync", post(handlers::trigger_flight_sync))
        // Profile
        .route("/profile", get(handlers::get_profile))
        // Admin CRUD
        .route("/admin/visitors", post(handlers::create_visitor_stat))
        .route(
            "/admin/visitors/{id}",
            put(handlers::update_visitor_stat).delete(handlers::delete_visitor_stat),
        )
        .route("/admin/origin-countries", post(handlers::create_origin_country))
        .route(
            "/admin/origin-countries/{id}",
            put(handlers::update_origin_country).delete(handlers::delete_origin_country),
        )
        .route("/admin/occupancy", post(handlers::create_occupancy_rate))
        .route(
            "/admin/occupancy/{id}",
            put(handlers::update_occupancy_rate).delete(handlers::delete_occupancy_rate),
        )
        .route("/admin/spending", post(handlers::create_tourist_spending))
        .route(
            "/admin/spending/{id}",
            put(handlers::update_tourist_spending).delete(handlers::delete_tourist_spending),
        )
        .route("/admin/attractions", post(handlers::create_attraction))
        .route(
            "/admin/attractions/{id}",
            put(handlers::update_attraction).delete(handlers::delete_attraction),
        )
        .route(
            "/admin/flights",
            get(handlers::list_all_flights).post(handlers::create_flight_arrival),
        )
        .route(
            "/admin/flights/{id}",
            put(handlers::update_flight_arrival).delete(handlers::delete_flight_arrival),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
