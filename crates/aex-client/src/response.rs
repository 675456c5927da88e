//! Raw response access.
//!
//! The body is read once into memory and handed out unchanged: as text, as
//! parsed JSON, or as whichever of the two it turns out to be.

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::ClientError;

/// Parsed body: JSON when the payload parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

/// Status, headers and body of a completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    endpoint: String,
    status: u16,
    headers: HeaderMap,
    text: String,
}

impl ApiResponse {
    /// Assemble a response from its parts.
    pub fn new(endpoint: String, status: u16, headers: HeaderMap, text: String) -> Self {
        Self {
            endpoint,
            status,
            headers,
            text,
        }
    }

    /// `METHOD /path` this response answers.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Body parsed as JSON.
    ///
    /// The Automation Exercise API labels its JSON bodies `text/html`, so the
    /// content type is not consulted.
    ///
    /// # Errors
    ///
    /// `ClientError::Decode` if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, ClientError> {
        serde_json::from_str(&self.text).map_err(|source| ClientError::Decode {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    pub fn body(&self) -> ResponseBody {
        match serde_json::from_str(&self.text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(self.text.clone()),
        }
    }

    /// Dump status, headers and body at `debug`.
    pub fn log(&self) {
        let body = match self.body() {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.text.clone())
            }
            ResponseBody::Text(text) => text,
        };
        tracing::debug!(
            endpoint = %self.endpoint,
            status = self.status,
            headers = ?self.headers,
            "response body:\n{body}"
        );
    }
}
