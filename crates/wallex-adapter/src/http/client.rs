/*
[INPUT]:  Client configuration (api key, timeout, client-wide options, error mode)
[OUTPUT]: Dispatched requests and typed responses or classified errors
[POS]:    HTTP layer - core client implementation and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{RawRequest, RawResponse, Result, WallexError};
use super::options::{MergePrecedence, PreparedRequest, RequestOptions, prepare_options};

/// Base URL for the Wallex API
pub const DEFAULT_BASE_URL: &str = "https://api.wallex.ir";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

const ENV_API_KEY: &str = "WALLEX_API_KEY";
const ENV_TIMEOUT_MS: &str = "WALLEX_TIMEOUT_MS";
const ENV_BASE_URL: &str = "WALLEX_BASE_URL";
const ENV_DETAILED_ERRORS: &str = "WALLEX_DETAILED_ERRORS";

/// URL version prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP client configuration
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Options merged into every call
    pub request_options: RequestOptions,
    pub raise_detailed_errors: bool,
    pub base_url: String,
    pub merge_precedence: MergePrecedence,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: Duration::from_secs(10),
            request_options: RequestOptions::default(),
            raise_detailed_errors: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            merge_precedence: MergePrecedence::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_options", &self.request_options)
            .field("raise_detailed_errors", &self.raise_detailed_errors)
            .field("base_url", &self.base_url)
            .field("merge_precedence", &self.merge_precedence)
            .finish()
    }
}

impl ClientConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_request_options(mut self, options: RequestOptions) -> Self {
        self.request_options = options;
        self
    }

    pub fn with_detailed_errors(mut self, enabled: bool) -> Self {
        self.raise_detailed_errors = enabled;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_merge_precedence(mut self, precedence: MergePrecedence) -> Self {
        self.merge_precedence = precedence;
        self
    }

    /// Defaults overridden by `WALLEX_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Override fields that have a `WALLEX_*` environment variable set
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_lookup_overrides(|name| std::env::var(name).ok())
    }

    #[cfg(test)]
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::default().with_lookup_overrides(lookup)
    }

    pub(crate) fn with_lookup_overrides(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = self;

        if let Some(key) = lookup(ENV_API_KEY).filter(|key| !key.is_empty()) {
            config.api_key = Some(key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                WallexError::Config(format!("{ENV_TIMEOUT_MS} must be milliseconds, got {raw:?}"))
            })?;
            config.timeout = Duration::from_millis(millis);
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_DETAILED_ERRORS) {
            config.raise_detailed_errors = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }
}

/// Main HTTP client for the Wallex API
#[derive(Debug, Clone)]
pub struct WallexClient {
    http_client: Client,
    base_url: String,
    config: ClientConfig,
}

impl WallexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(default_headers)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| WallexError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn request_timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
    }

    pub fn request_options(&self) -> &RequestOptions {
        &self.config.request_options
    }

    pub fn set_request_options(&mut self, options: RequestOptions) {
        self.config.request_options = options;
    }

    /// Client-wide options, mutable between calls
    pub fn request_options_mut(&mut self) -> &mut RequestOptions {
        &mut self.config.request_options
    }

    /// Configured timeout; zero falls back to [`DEFAULT_TIMEOUT`]
    fn default_timeout(&self) -> Duration {
        if self.config.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.config.timeout
        }
    }

    /// Build the full URI for an endpoint path
    ///
    /// The path is used as given; dynamic segments must already be encoded.
    pub fn build_uri(&self, path: &str, version: ApiVersion) -> String {
        format!("{}/{}/{}", self.base_url, version, path)
    }

    /// Merge client and call options and shape the payload for `method`
    pub fn prepare_options(
        &self,
        method: &Method,
        signed: bool,
        options: RequestOptions,
    ) -> PreparedRequest {
        prepare_options(
            method,
            signed,
            options,
            &self.config.request_options,
            self.config.merge_precedence,
            self.default_timeout(),
            self.config.api_key.as_deref(),
        )
    }

    /// Perform one request against a full URI
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        uri: &str,
        signed: bool,
        options: RequestOptions,
    ) -> Result<T> {
        let prepared = self.prepare_options(&method, signed, options);
        let url = Url::parse(uri)?;

        debug!(
            method = %prepared.method,
            url = %url,
            signed,
            timeout_ms = prepared.timeout.as_millis() as u64,
            "dispatching request"
        );

        let mut builder = self
            .http_client
            .request(prepared.method.clone(), url)
            .timeout(prepared.timeout);
        if !prepared.query.is_empty() {
            builder = builder.query(&prepared.query);
        }
        builder = builder.headers(request_headers(&prepared.headers)?);
        if let Some(body) = &prepared.body {
            builder = builder.json(body);
        }

        let request = builder.build().map_err(|err| {
            warn!(error = %err, "failed to build request");
            WallexError::from_transport(&err)
        })?;
        let raw_request = RawRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: header_map(request.headers()),
        };

        let response = self.http_client.execute(request).await.map_err(|err| {
            warn!(error = %err, url = %raw_request.url, "no response received");
            WallexError::from_transport(&err)
        })?;

        let status = response.status();
        let headers = header_map(response.headers());
        let body = response.text().await.map_err(|err| {
            warn!(error = %err, url = %raw_request.url, "failed to read response body");
            WallexError::from_transport(&err)
        })?;
        debug!(status = status.as_u16(), url = %raw_request.url, "response received");

        if !status.is_success() {
            warn!(status = status.as_u16(), url = %raw_request.url, "api returned error status");
            return Err(WallexError::from_response(
                self.config.raise_detailed_errors,
                RawResponse {
                    status: status.as_u16(),
                    headers,
                    body,
                },
                raw_request,
            ));
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        signed: bool,
        version: ApiVersion,
        options: RequestOptions,
    ) -> Result<T> {
        let uri = self.build_uri(path, version);
        self.dispatch(method, &uri, signed, options).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        signed: bool,
        version: ApiVersion,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::GET, path, signed, version, options).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        signed: bool,
        version: ApiVersion,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::POST, path, signed, version, options).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        signed: bool,
        version: ApiVersion,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::DELETE, path, signed, version, options)
            .await
    }
}

/// One value per header name; a later value replaces an earlier one
fn request_headers(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            warn!(error = %err, header = %name, "invalid header name");
            WallexError::request_failed()
        })?;
        let value = HeaderValue::from_str(value).map_err(|err| {
            warn!(error = %err, header = %name, "invalid header value");
            WallexError::request_failed()
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}
