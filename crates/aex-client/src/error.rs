//! Request helper errors.

use crate::config::ConfigError;

/// Failure to issue a request or read its response.
///
/// An HTTP status is never an error at this layer; the caller decides which
/// statuses it accepts.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, body read.
    #[error("HTTP request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Form encoding needs a flat JSON object.
    #[error("form-encoded body for {endpoint} must be a JSON object, got {kind}")]
    FormBody { endpoint: String, kind: &'static str },

    /// The response body is not JSON.
    #[error("response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}
