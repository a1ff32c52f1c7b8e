//! Main network lists API client implementation.

use crate::api::{ActivationsApi, ListsApi, NotificationsApi};
use crate::config::RateLimitConfig;
use crate::signer::{NoopSigner, RequestSigner};
use governor::DefaultDirectRateLimiter;
use netlist_core::{NetlistError, Result};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Path prefix of the versioned API
pub(crate) const API_PREFIX: &str = "/network-list/v2";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Network lists API client
///
/// Cheap to clone; clones share the connection pool and rate limiter.
#[derive(Clone)]
pub struct NetlistClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
    timeout: Duration,
    account_switch_key: Option<String>,
    signer: Box<dyn RequestSigner>,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl std::fmt::Debug for NetlistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetlistClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("account_switch_key", &self.inner.account_switch_key)
            .finish_non_exhaustive()
    }
}

impl NetlistClient {
    /// Create a client for the given API host using default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        NetlistClientBuilder::new(base_url).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> NetlistClientBuilder {
        NetlistClientBuilder::new(base_url)
    }

    /// Access list endpoints
    #[must_use]
    pub fn lists(&self) -> ListsApi<'_> {
        ListsApi::new(self)
    }

    /// Access activation endpoints
    #[must_use]
    pub fn activations(&self) -> ActivationsApi<'_> {
        ActivationsApi::new(self)
    }

    /// Access notification subscription endpoints
    #[must_use]
    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let body = self.send::<()>(Method::GET, path, params, None).await?;
        decode(&body)
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = self.send(Method::POST, path, &[], Some(body)).await?;
        decode(&body)
    }

    /// Perform a POST request whose response body is ignored
    pub(crate) async fn post_empty<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::POST, path, &[], Some(body)).await.map(drop)
    }

    /// Perform a DELETE request, returning the raw response body
    pub(crate) async fn delete(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        self.send::<()>(Method::DELETE, path, params, None).await
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<String> {
        let url = self.build_url(path, params);
        debug!(method = %method, url = %url, "network list request");

        let mut builder = self.inner.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let mut request = builder
            .build()
            .map_err(|e| NetlistError::transport(e.to_string()))?;
        self.inner.signer.sign(&mut request)?;

        if let Some(limiter) = &self.inner.rate_limiter {
            limiter.until_ready().await;
        }

        let response = self
            .inner
            .http
            .execute(request)
            .await
            .map_err(|e| self.transport_error(&e))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters (including the account switch key)
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.inner.base_url.clone();
        let full_path = format!("{}{API_PREFIX}{path}", url.path().trim_end_matches('/'));
        url.set_path(&full_path);

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            if let Some(key) = &self.inner.account_switch_key {
                query.append_pair("accountSwitchKey", key);
            }
        }

        if url.query() == Some("") {
            url.set_query(None);
        }

        url
    }

    fn transport_error(&self, err: &reqwest::Error) -> NetlistError {
        if err.is_timeout() {
            NetlistError::transport(format!(
                "request timed out after {} seconds",
                self.inner.timeout.as_secs()
            ))
        } else if err.is_connect() {
            NetlistError::transport(format!("connection failed: {err}"))
        } else {
            NetlistError::transport(err.to_string())
        }
    }

    /// Return the body of a successful response, or classify the failure
    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetlistError::transport(e.to_string()))?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify_error(status.as_u16(), body))
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(NetlistError::from)
}

/// Convert an error response into a [`NetlistError`]
fn classify_error(status: u16, body: String) -> NetlistError {
    // Problem+json bodies carry `title` and `detail`
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("title"))
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        })
        .unwrap_or(body);

    match status {
        404 => NetlistError::NotFound { resource: message },
        400 | 409 | 422 => NetlistError::Validation(message),
        _ => {
            if status == 429 {
                warn!("rate limited by network lists API");
            } else if status >= 500 {
                warn!(status, "network lists API server error");
            }
            NetlistError::Service {
                status: Some(status),
                message,
            }
        }
    }
}

/// Builder for configuring a [`NetlistClient`]
pub struct NetlistClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    account_switch_key: Option<String>,
    rate_limit: Option<RateLimitConfig>,
    signer: Box<dyn RequestSigner>,
}

impl NetlistClientBuilder {
    /// Create a new builder for the given API host
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("netlist/{}", env!("CARGO_PKG_VERSION")),
            account_switch_key: None,
            rate_limit: Some(RateLimitConfig::default()),
            signer: Box::new(NoopSigner),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Act on behalf of another account
    #[must_use]
    pub fn account_switch_key(mut self, key: impl Into<String>) -> Self {
        self.account_switch_key = Some(key.into());
        self
    }

    /// Set the client-side rate limit, `None` disables it
    #[must_use]
    pub const fn rate_limit(mut self, config: Option<RateLimitConfig>) -> Self {
        self.rate_limit = config;
        self
    }

    /// Set the request signer
    #[must_use]
    pub fn signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Box::new(signer);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<NetlistClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| NetlistError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(NetlistError::Config(format!(
                "base URL {} cannot carry a path",
                self.base_url
            )));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| NetlistError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(NetlistClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                account_switch_key: self.account_switch_key,
                signer: self.signer,
                rate_limiter: self.rate_limit.map(RateLimitConfig::limiter),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_appends_account_switch_key() {
        let client = NetlistClient::builder("https://api.example.net")
            .account_switch_key("1-ABC:1-2RBL")
            .build()
            .unwrap();
        let url = client
            .build_url("/network-lists", &[("listType", "IP"), ("search", "office net")]);
        assert_eq!(
            url.as_str(),
            "https://api.example.net/network-list/v2/network-lists?listType=IP&search=office+net&accountSwitchKey=1-ABC%3A1-2RBL"
        );
    }

    #[test]
    fn test_build_url_keeps_base_path_and_omits_empty_query() {
        let client = NetlistClient::new("http://127.0.0.1:8080/proxy/").unwrap();
        let url = client.build_url("/network-lists/1_A", &[]);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/proxy/network-list/v2/network-lists/1_A"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = NetlistClient::new("not a url").unwrap_err();
        assert_eq!(err.kind(), netlist_core::ErrorKind::Config);
    }

    #[test]
    fn test_classify_error_statuses() {
        let problem = r#"{"type":"x","title":"Bad Request","detail":"invalid element 999.1.1.1"}"#;
        match classify_error(400, problem.to_string()) {
            NetlistError::Validation(msg) => assert_eq!(msg, "invalid element 999.1.1.1"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(classify_error(404, "{}".into()).is_not_found());
        assert_eq!(classify_error(503, "down".into()).status_code(), Some(503));
    }
}
