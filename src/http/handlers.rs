//! HTTP handlers for the REST API.
//!
//! Read endpoints delegate straight to the repository; the dashboard summary
//! and flight sync go through the service layer. All mutating endpoints
//! require the admin role via the [`AdminUser`] extractor.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::auth::{AdminUser, AuthedUser};
use super::dto::{FlightListResponse, FlightsQuery, HealthResponse, ListResponse, SyncResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    Attraction, DashboardSummary, FlightArrival, NewAttraction, NewFlightArrival,
    NewOccupancyRate, NewOriginCountry, NewTouristSpending, NewVisitorStat, OccupancyRate,
    OriginCountry, Profile, TouristSpending, VisitorStat,
};
use crate::db::repository::{FlightRepository, FullRepository, TourismRepository};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the database
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Chart data
// =============================================================================

/// GET /v1/stats/visitors
pub async fn list_visitor_stats(
    State(state): State<AppState>,
) -> HandlerResult<ListResponse<VisitorStat>> {
    let rows = state.repository.list_visitor_stats().await?;
    Ok(Json(rows.into()))
}

/// GET /v1/stats/origin-countries
pub async fn list_origin_countries(
    State(state): State<AppState>,
) -> HandlerResult<ListResponse<OriginCountry>> {
    let rows = state.repository.list_origin_countries().await?;
    Ok(Json(rows.into()))
}

/// GET /v1/stats/occupancy
pub async fn list_occupancy_rates(
    State(state): State<AppState>,
) -> HandlerResult<ListResponse<OccupancyRate>> {
    let rows = state.repository.list_occupancy_rates().await?;
    Ok(Json(rows.into()))
}

/// GET /v1/stats/spending
pub async fn list_tourist_spending(
    State(state): State<AppState>,
) -> HandlerResult<ListResponse<TouristSpending>> {
    let rows = state.repository.list_tourist_spending().await?;
    Ok(Json(rows.into()))
}

/// GET /v1/attractions
pub async fn list_attractions(
    State(state): State<AppState>,
) -> HandlerResult<ListResponse<Attraction>> {
    let rows = state.repository.list_attractions().await?;
    Ok(Json(rows.into()))
}

/// GET /v1/dashboard/summary
///
/// Headline metrics for the stat grid: latest value plus period-over-period
/// change per measure.
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
) -> HandlerResult<DashboardSummary> {
    let today = Utc::now().date_naive();
    let summary = services::dashboard_summary(state.repository.as_ref(), today).await?;
    Ok(Json(summary))
}

// =============================================================================
// Flights
// =============================================================================

/// GET /v1/flights?date=YYYY-MM-DD
///
/// List one day's arrivals; defaults to today.
pub async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> HandlerResult<FlightListResponse> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let arrivals = state.repository.list_arrivals_for_date(date).await?;
    let total = arrivals.len();

    Ok(Json(FlightListResponse {
        date,
        arrivals,
        total,
    }))
}

/// POST /v1/flights/sync
///
/// Replace today's arrivals with a freshly fetched batch from the flight
/// API. Admin only; runs serialize process-wide, so a double-click cannot
/// interleave two syncs.
pub async fn trigger_flight_sync(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> HandlerResult<SyncResponse> {
    let source = state.flight_source.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("flight API endpoint is not configured".to_string())
    })?;

    let today = Utc::now().date_naive();
    let outcome = services::sync_flights(source.as_ref(), state.repository.as_ref(), today).await?;

    Ok(Json(SyncResponse {
        inserted_count: outcome.inserted_count,
        date: today,
        message: format!("Synced {} arrivals for {}", outcome.inserted_count, today),
    }))
}

// =============================================================================
// Profile
// =============================================================================

/// GET /v1/profile
///
/// The caller's own profile row.
pub async fn get_profile(user: AuthedUser) -> HandlerResult<Profile> {
    Ok(Json(user.profile))
}

// =============================================================================
// Admin CRUD
// =============================================================================

/// POST /v1/admin/visitors
pub async fn create_visitor_stat(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(stat): Json<NewVisitorStat>,
) -> Result<(StatusCode, Json<VisitorStat>), AppError> {
    let created = state.repository.insert_visitor_stat(stat).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/admin/visitors/{id}
pub async fn update_visitor_stat(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(stat): Json<NewVisitorStat>,
) -> HandlerResult<VisitorStat> {
    let updated = state.repository.update_visitor_stat(&id, stat).await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/visitors/{id}
pub async fn delete_visitor_stat(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_visitor_stat(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/origin-countries
pub async fn create_origin_country(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(country): Json<NewOriginCountry>,
) -> Result<(StatusCode, Json<OriginCountry>), AppError> {
    let created = state.repository.insert_origin_country(country).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/admin/origin-countries/{id}
pub async fn update_origin_country(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(country): Json<NewOriginCountry>,
) -> HandlerResult<OriginCountry> {
    let updated = state.repository.update_origin_country(&id, country).await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/origin-countries/{id}
pub async fn delete_origin_country(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_origin_country(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/occupancy
pub async fn create_occupancy_rate(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(rate): Json<NewOccupancyRate>,
) -> Result<(StatusCode, Json<OccupancyRate>), AppError> {
    let created = state.repository.insert_occupancy_rate(rate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/admin/occupancy/{id}
pub async fn update_occupancy_rate(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(rate): Json<NewOccupancyRate>,
) -> HandlerResult<OccupancyRate> {
    let updated = state.repository.update_occupancy_rate(&id, rate).await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/occupancy/{id}
pub async fn delete_occupancy_rate(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_occupancy_rate(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/spending
pub async fn create_tourist_spending(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(spending): Json<NewTouristSpending>,
) -> Result<(StatusCode, Json<TouristSpending>), AppError> {
    let created = state.repository.insert_tourist_spending(spending).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/admin/spending/{id}
pub async fn update_tourist_spending(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(spending): Json<NewTouristSpending>,
) -> HandlerResult<TouristSpending> {
    let updated = state
        .repository
        .update_tourist_spending(&id, spending)
        .await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/spending/{id}
pub async fn delete_tourist_spending(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_tourist_spending(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/admin/attractions
pub async fn create_attraction(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(attraction): Json<NewAttraction>,
) -> Result<(StatusCode, Json<Attraction>), AppError> {
    let created = state.repository.insert_attraction(attraction).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/admin/attractions/{id}
pub async fn update_attraction(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(attraction): Json<NewAttraction>,
) -> HandlerResult<Attraction> {
    let updated = state.repository.update_attraction(&id, attraction).await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/attractions/{id}
pub async fn delete_attraction(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_attraction(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/admin/flights
///
/// Full arrivals table across all dates, for the admin data grid.
pub async fn list_all_flights(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> HandlerResult<ListResponse<FlightArrival>> {
    let rows = state.repository.list_all_arrivals().await?;
    Ok(Json(rows.into()))
}

/// POST /v1/admin/flights
pub async fn create_flight_arrival(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(arrival): Json<NewFlightArrival>,
) -> Result<(StatusCode, Json<FlightArrival>), AppError> {
    let created = state.repository.insert_arrival(arrival).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/admin/flights/{id}
pub async fn update_flight_arrival(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(arrival): Json<NewFlightArrival>,
) -> HandlerResult<FlightArrival> {
    let updated = state.repository.update_arrival(&id, arrival).await?;
    Ok(Json(updated))
}

/// DELETE /v1/admin/flights/{id}
pub async fn delete_flight_arrival(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_arrival(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
