//! # aex-client -- Request helper for the Automation Exercise API
//!
//! A thin wrapper over `reqwest` that issues `GET`/`POST`/`PUT`/`DELETE`
//! against a fixed base address and hands back the raw [`ApiResponse`]:
//! status, headers and body, untouched. Whether a status is acceptable and
//! whether the body conforms is decided by the caller (`aex-schema`,
//! `aex-suite`).
//!
//! ## Body encoding
//!
//! Bodies are JSON unless the request sets
//! `Content-Type: application/x-www-form-urlencoded`, in which case the JSON
//! object is flattened into form pairs. See [`request`].
//!
//! ## URL convention
//!
//! `{base_url}{path}`, e.g. `https://automationexercise.com/api` +
//! `/productsList`.

pub mod config;
pub mod error;
pub mod request;
pub mod response;

pub use config::{ApiConfig, ConfigError};
pub use error::ClientError;
pub use request::{EncodedBody, RequestOptions, FORM_CONTENT_TYPE};
pub use response::{ApiResponse, ResponseBody};
pub use reqwest::header::HeaderMap;

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

/// Path probed by [`ApiClient::health_check`].
pub const HEALTH_CHECK_PATH: &str = "/productsList";

/// Result of probing the API before a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The probe answered with a 2xx status.
    Healthy,
    /// The service answered, but not with success.
    Degraded(u16),
    /// No HTTP response at all.
    Unreachable(String),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// HTTP client bound to one API base address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/html, */*"));
                headers
            })
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self { http, config })
    }

    /// Create a client from `AEX_BASE_URL` / `AEX_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {base_url}{path}`.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, path, None, options).await
    }

    /// `POST {base_url}{path}` with an optional body.
    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, path, body, options).await
    }

    /// `PUT {base_url}{path}` with an optional body.
    pub async fn put(
        &self,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::PUT, path, body, options).await
    }

    /// `DELETE {base_url}{path}`; the body, if any, comes from `options.data`.
    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ClientError> {
        let data = options.data.clone();
        self.send(Method::DELETE, path, data.as_ref(), options).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = format!("{method} {path}");
        let url = self.config.endpoint_url(path);

        let mut builder = self.http.request(method, &url).headers(header_map(&options)?);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        builder = match request::encode_body(&endpoint, body, &options)? {
            EncodedBody::Empty => builder,
            EncodedBody::Form(form) => builder.body(form),
            EncodedBody::Json(json) if options.content_type().is_none() => builder
                .header(CONTENT_TYPE, "application/json")
                .body(json.to_string()),
            EncodedBody::Json(json) => builder.body(json.to_string()),
        };

        tracing::info!(%endpoint, %url, "sending request");
        let resp = builder.send().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let text = resp.text().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        tracing::info!(%endpoint, status, bytes = text.len(), "response received");

        let response = ApiResponse::new(endpoint, status, headers, text);
        response.log();
        Ok(response)
    }

    /// Probe `GET /productsList`.
    ///
    /// Never fails: transport errors become [`HealthStatus::Unreachable`].
    pub async fn health_check(&self) -> HealthStatus {
        match self.get(HEALTH_CHECK_PATH, RequestOptions::new()).await {
            Ok(resp) if (200..300).contains(&resp.status()) => {
                tracing::info!(base_url = %self.config.base_url, "API health check passed");
                HealthStatus::Healthy
            }
            Ok(resp) => {
                tracing::warn!(
                    base_url = %self.config.base_url,
                    status = resp.status(),
                    "API health check returned non-success status"
                );
                HealthStatus::Degraded(resp.status())
            }
            Err(e) => {
                tracing::warn!(base_url = %self.config.base_url, error = %e, "API unreachable");
                HealthStatus::Unreachable(e.to_string())
            }
        }
    }
}

fn header_map(options: &RequestOptions) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &options.headers {
        let invalid = |reason: String| ClientError::InvalidHeader {
            name: name.clone(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_map_rejects_bad_names() {
        let opts = RequestOptions::new().header("bad header", "x");
        let err = header_map(&opts).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader { ref name, .. } if name == "bad header"));
    }

    #[test]
    fn header_map_keeps_last_duplicate() {
        let opts = RequestOptions::new().header("X-Trace", "1").header("x-trace", "2");
        let map = header_map(&opts).unwrap();
        assert_eq!(map.get("x-trace").unwrap(), "2");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn health_status_helpers() {
        assert!(HealthStatus::Healthy.is_healthy());
        assert!(!HealthStatus::Degraded(503).is_healthy());
        assert!(!HealthStatus::Unreachable("refused".into()).is_healthy());
    }
}
