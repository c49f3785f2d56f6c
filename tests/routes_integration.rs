//! Handler-level integration tests: role gating, CRUD flows, and the sync
//! route, all running against the in-memory repository.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::Request;
use axum::Json;
use serde_json::{json, Value};

use lti_rust::db::models::{NewVisitorStat, Profile};
use lti_rust::db::repositories::LocalRepository;
use lti_rust::db::repository::{FullRepository, ProfileRepository};
use lti_rust::flightdata::{FlightApiError, FlightDataSource};
use lti_rust::http::auth::{AdminUser, AuthedUser};
use lti_rust::http::dto::FlightsQuery;
use lti_rust::http::error::AppError;
use lti_rust::http::{create_router, handlers, AppState};

const ADMIN_ID: &str = "11111111-1111-1111-1111-111111111111";
const VIEWER_ID: &str = "22222222-2222-2222-2222-222222222222";

struct StubSource {
    document: Value,
}

#[async_trait]
impl FlightDataSource for StubSource {
    async fn fetch_document(&self) -> Result<Value, FlightApiError> {
        Ok(self.document.clone())
    }
}

async fn seeded_state() -> AppState {
    let repo = Arc::new(LocalRepository::new());
    repo.upsert_profile(Profile {
        id: ADMIN_ID.to_string(),
        full_name: "Ops".to_string(),
        role: "admin".to_string(),
    })
    .await
    .unwrap();
    repo.upsert_profile(Profile {
        id: VIEWER_ID.to_string(),
        full_name: "Viewer".to_string(),
        role: "user".to_string(),
    })
    .await
    .unwrap();

    AppState::new(repo as Arc<dyn FullRepository>)
}

async fn extract_admin(state: &AppState, user_id: Option<&str>) -> Result<AdminUser, AppError> {
    let mut builder = Request::builder().uri("/v1/admin/visitors");
    if let Some(id) = user_id {
        builder = builder.header("x-user-id", id);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    AdminUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_admin_extractor_accepts_admin() {
    let state = seeded_state().await;
    let admin = extract_admin(&state, Some(ADMIN_ID)).await.unwrap();
    assert!(admin.profile.is_admin());
}

#[tokio::test]
async fn test_admin_extractor_rejects_viewer() {
    let state = seeded_state().await;
    let err = extract_admin(&state, Some(VIEWER_ID)).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
async fn test_admin_extractor_rejects_unknown_and_missing() {
    let state = seeded_state().await;

    // Valid uuid with no profile row: same 403 as a wrong role.
    let err = extract_admin(&state, Some("33333333-3333-3333-3333-333333333333"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = extract_admin(&state, None).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));

    let err = extract_admin(&state, Some("not-a-uuid")).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn test_authed_user_returns_own_profile() {
    let state = seeded_state().await;
    let req = Request::builder()
        .uri("/v1/profile")
        .header("x-user-id", VIEWER_ID)
        .body(())
        .unwrap();
    let (mut parts, ()) = req.into_parts();
    let user = AuthedUser::from_request_parts(&mut parts, &state).await.unwrap();

    let Json(profile) = handlers::get_profile(user).await.unwrap();
    assert_eq!(profile.id, VIEWER_ID);
    assert_eq!(profile.full_name, "Viewer");
}

#[tokio::test]
async fn test_visitor_stat_crud_flow() {
    let state = seeded_state().await;
    let admin = extract_admin(&state, Some(ADMIN_ID)).await.unwrap();

    let (status, Json(created)) = handlers::create_visitor_stat(
        State(state.clone()),
        admin.clone(),
        Json(NewVisitorStat {
            year: 2024,
            month: 4,
            domestic_count: 50_000,
            international_count: 30_000,
        }),
    )
    .await
    .unwrap();
    assert_eq!(status, axum::http::StatusCode::CREATED);

    let Json(updated) = handlers::update_visitor_stat(
        State(state.clone()),
        admin.clone(),
        Path(created.id.clone()),
        Json(NewVisitorStat {
            year: 2024,
            month: 4,
            domestic_count: 55_000,
            international_count: 30_000,
        }),
    )
    .await
    .unwrap();
    assert_eq!(updated.domestic_count, 55_000);

    let Json(listed) = handlers::list_visitor_stats(State(state.clone())).await.unwrap();
    assert_eq!(listed.total, 1);

    let status = handlers::delete_visitor_stat(
        State(state.clone()),
        admin.clone(),
        Path(created.id.clone()),
    )
    .await
    .unwrap();
    assert_eq!(status, axum::http::StatusCode::NO_CONTENT);

    // Deleting again surfaces the repository NotFound.
    let err = handlers::delete_visitor_stat(State(state.clone()), admin, Path(created.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Repository(e) if e.is_not_found()));
}

#[tokio::test]
async fn test_sync_route_unconfigured_is_service_unavailable() {
    let state = seeded_state().await;
    let admin = extract_admin(&state, Some(ADMIN_ID)).await.unwrap();

    let err = handlers::trigger_flight_sync(State(state), admin).await.unwrap_err();
    assert!(matches!(err, AppError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_sync_route_end_to_end() {
    let state = seeded_state().await.with_flight_source(Arc::new(StubSource {
        document: json!({
            "flights": [
                {"flight_number": "MH1432", "name": "Malaysia Airlines", "origin": {"city": "Kuala Lumpur"}},
                {"flightNumber": "AK5642", "airline": "AirAsia", "from": "Singapore"},
            ],
        }),
    }));
    let admin = extract_admin(&state, Some(ADMIN_ID)).await.unwrap();

    let Json(response) = handlers::trigger_flight_sync(State(state.clone()), admin)
        .await
        .unwrap();
    assert_eq!(response.inserted_count, 2);

    // The list route (defaulting to today) observes the fresh batch.
    let Json(listed) = handlers::list_flights(State(state), Query(FlightsQuery::default()))
        .await
        .unwrap();
    assert_eq!(listed.total, 2);
    assert!(listed.arrivals.iter().any(|a| a.flight_number == "MH1432"));
}

#[tokio::test]
async fn test_sync_route_shape_failure_reports_stage() {
    let state = seeded_state().await.with_flight_source(Arc::new(StubSource {
        document: json!({"error": "maintenance"}),
    }));
    let admin = extract_admin(&state, Some(ADMIN_ID)).await.unwrap();

    let err = handlers::trigger_flight_sync(State(state), admin).await.unwrap_err();
    match err {
        AppError::Sync(sync_err) => assert_eq!(sync_err.stage(), "locate"),
        other => panic!("expected sync error, got {:?}", other),
    }
}

#[test]
fn test_router_builds_with_all_routes() {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>;
    let _router = create_router(AppState::new(repo));
}
