use async_trait::async_trait;
use modkit::TracedClient;
use reqwest::{header::CONTENT_TYPE, Method, Url};
use tracing::{debug, instrument};

use crate::config::UserFetchConfig;
use crate::contract::client::UserFetchApi;
use crate::contract::error::UserFetchError;
use crate::contract::model::UserResponse;
use crate::infra::http::dto::{ErrorMessageDto, UserResponseDto};

/// reqwest adapter for `GET {base_url}/api/users/{id}`.
///
/// Holds a clone of the process-wide [`TracedClient`], so all instances share
/// one connection pool.
#[derive(Clone, Debug)]
pub struct HttpUserFetchClient {
    client: TracedClient,
    base_url: Url,
}

impl HttpUserFetchClient {
    pub fn new(client: TracedClient, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(client: TracedClient, cfg: &UserFetchConfig) -> Result<Self, UserFetchError> {
        let base_url = Url::parse(cfg.base_url.trim()).map_err(|e| {
            UserFetchError::invalid_url(format!("base_url '{}': {}", cfg.base_url, e))
        })?;
        Ok(Self::new(client, base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/api/users/{id}`; fails for URLs that cannot carry a path.
    pub fn endpoint(&self, id: u64) -> Result<Url, UserFetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                UserFetchError::invalid_url(format!("'{}' cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(&["api", "users", &id.to_string()]);
        Ok(url)
    }
}

/// Best-effort `{"error": ...}` extraction from a failed response body.
fn diagnostic_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorMessageDto>(body)
        .ok()
        .map(|m| m.error)
}

#[async_trait]
impl UserFetchApi for HttpUserFetchClient {
    #[instrument(
        name = "user_fetch.http.fetch_user",
        skip_all,
        fields(user_id = id, base_url = %self.base_url)
    )]
    async fn fetch_user(&self, id: u64) -> Result<UserResponse, UserFetchError> {
        let url = self.endpoint(id)?;

        let request = self
            .client
            .request(Method::GET, url)
            .header(CONTENT_TYPE, "application/json")
            .build()
            .map_err(|e| UserFetchError::invalid_url(e.to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| UserFetchError::invalid_response(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // the body only feeds the log line; read and parse failures are ignored
            match response.bytes().await.ok().as_deref().and_then(diagnostic_message) {
                Some(message) => debug!(status = status.as_u16(), %message, "user request rejected"),
                None => debug!(status = status.as_u16(), "user request rejected"),
            }
            return Err(UserFetchError::request_failed(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UserFetchError::invalid_response(e.to_string()))?;

        let decoded: UserResponseDto = serde_json::from_slice(&body)
            .map_err(|e| UserFetchError::decoding_failed(e.to_string()))?;

        debug!("user fetched");
        Ok(decoded.into())
    }
}
