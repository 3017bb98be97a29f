//! Traced HTTP client
//!
//! Wraps `reqwest::Client` so every outgoing request runs inside an
//! `outgoing_http` span and carries a W3C `traceparent` header.

use crate::http::simple_otel;
use tracing::{field::Empty, Instrument, Level};

/// Shared HTTP client. Cloning is cheap and reuses the same connection pool.
#[derive(Clone, Debug)]
pub struct TracedClient {
    inner: reqwest::Client,
}

impl TracedClient {
    pub fn new(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// Execute a built request, injecting trace headers and recording the
    /// response status on the span.
    pub async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        let span = tracing::span!(
            Level::INFO,
            "outgoing_http",
            http.method = %req.method(),
            http.url = %req.url(),
            http.status_code = Empty,
            trace_id = Empty,
            error = Empty,
            otel.kind = "client",
        );

        simple_otel::inject_trace_context(req.headers_mut(), &span);

        let inner = self.inner.clone();
        async move {
            let result = inner.execute(req).await;
            let span = tracing::Span::current();
            match &result {
                Ok(response) => {
                    let status = response.status();
                    span.record("http.status_code", status.as_u16());
                    tracing::debug!(status = status.as_u16(), "outgoing request completed");
                    if status.is_client_error() || status.is_server_error() {
                        span.record("error", true);
                    }
                }
                Err(e) => {
                    span.record("error", true);
                    tracing::debug!(error = %e, "outgoing request failed");
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Convenience method for GET requests
    pub async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        let req = self.inner.get(url).build()?;
        self.execute(req).await
    }

    /// Start a request; finish it with `build()` and pass it to [`Self::execute`].
    pub fn request(&self, method: reqwest::Method, url: reqwest::Url) -> reqwest::RequestBuilder {
        self.inner.request(method, url)
    }
}

impl From<reqwest::Client> for TracedClient {
    fn from(c: reqwest::Client) -> Self {
        Self::new(c)
    }
}

impl Default for TracedClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_traced_client_injects_trace_headers() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/ping")
                .header_exists(simple_otel::TRACEPARENT);
            then.status(200).body("ok");
        });

        let client = TracedClient::from(reqwest::Client::new());
        let resp = client.get(&server.url("/ping")).await.unwrap();

        assert!(resp.status().is_success());
        m.assert();
    }

    #[tokio::test]
    async fn test_request_builder_keeps_custom_headers() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/json")
                .header("content-type", "application/json")
                .header_exists(simple_otel::TRACEPARENT);
            then.status(204);
        });

        let client = TracedClient::default();
        let url = reqwest::Url::parse(&server.url("/json")).unwrap();
        let req = client
            .request(reqwest::Method::GET, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .build()
            .unwrap();
        let resp = client.execute(req).await.unwrap();

        assert_eq!(resp.status().as_u16(), 204);
        m.assert();
    }

    #[tokio::test]
    #[traced_test]
    async fn test_outgoing_span_is_emitted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let client = TracedClient::default();
        let resp = client.get(&server.url("/missing")).await.unwrap();

        assert_eq!(resp.status().as_u16(), 404);
        assert!(logs_contain("outgoing_http"));
    }

    #[tokio::test]
    async fn test_connection_error_is_returned() {
        let client = TracedClient::default();
        // port 1 is reserved and nothing listens there
        let err = client.get("http://127.0.0.1:1/").await.unwrap_err();
        assert!(err.is_connect() || err.is_request());
    }
}
