//! Role gating for the admin endpoints.
//!
//! Session handling belongs to the external identity provider; what reaches
//! this backend is the caller's user id in the `X-User-Id` header. The
//! extractors below resolve that id against the profiles table:
//!
//! - [`AuthedUser`]: any caller with a profile row.
//! - [`AdminUser`]: callers whose profile carries the `admin` role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use super::error::AppError;
use super::state::AppState;
use crate::db::models::Profile;
use crate::db::repository::ProfileRepository;

/// Header carrying the identity-provider user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for any authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub profile: Profile,
}

/// Extractor that additionally requires the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub profile: Profile,
}

/// Pull and validate the user id header.
fn user_id_from_parts(parts: &Parts) -> Result<String, AppError> {
    let raw = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing X-User-Id header".to_string()))?;

    let user_id = Uuid::parse_str(raw)
        .map_err(|_| AppError::Unauthorized("X-User-Id is not a valid user id".to_string()))?;

    Ok(user_id.to_string())
}

impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = user_id_from_parts(parts)?;
        let profile = state
            .repository
            .get_profile(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no profile for user {}", user_id)))?;

        Ok(AuthedUser { profile })
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = user_id_from_parts(parts)?;
        let profile = state.repository.get_profile(&user_id).await?;

        match profile {
            Some(profile) if profile.is_admin() => Ok(AdminUser { profile }),
            // Missing profile and wrong role get the same answer; no need to
            // leak which one it was.
            _ => Err(AppError::Forbidden(
                "admin role required for this endpoint".to_string(),
            )),
        }
    }
}
