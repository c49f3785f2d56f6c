//! Repository trait for user profiles and role lookup.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::Profile;

/// Repository trait for the profiles table.
///
/// The role check behind the admin endpoints is a single read of one row
/// keyed by user id; `"admin"` is the only privileged value.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch a profile by user id. `Ok(None)` when no row exists; absence
    /// is an ordinary outcome here, not an error.
    async fn get_profile(&self, user_id: &str) -> RepositoryResult<Option<Profile>>;

    /// Insert or replace a profile row keyed by user id.
    async fn upsert_profile(&self, profile: Profile) -> RepositoryResult<Profile>;
}
