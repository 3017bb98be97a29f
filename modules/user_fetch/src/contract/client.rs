use async_trait::async_trait;

use crate::contract::{error::UserFetchError, model::UserResponse};

/// Public API of the user_fetch module.
///
/// Every call performs exactly one request; there is no caching and no retry.
/// Calls are independent and may run concurrently.
#[async_trait]
pub trait UserFetchApi: Send + Sync {
    /// Fetch the user with the given id.
    async fn fetch_user(&self, id: u64) -> Result<UserResponse, UserFetchError>;
}
