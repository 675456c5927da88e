//! # Request Options and Body Encoding
//!
//! Every call takes a [`RequestOptions`] carrying extra headers, query
//! parameters and, for `DELETE`, a `data` body. The body is encoded from
//! the `Content-Type` header the caller set:
//!
//! - `application/x-www-form-urlencoded`: the JSON object is flattened into
//!   `key=value&...` pairs. Strings are sent as-is, every other value as its
//!   JSON text (`true`, `42`, `null`).
//! - anything else: the value is sent as a JSON document.
//!
//! A missing or `null` body sends nothing.

use serde_json::Value;

use crate::error::ClientError;

/// Media type of HTML form submissions, used by every `POST`/`PUT`/`DELETE`
/// endpoint of the Automation Exercise API.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Per-request headers, query parameters and `DELETE` body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub data: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options preset with the form content type.
    pub fn form() -> Self {
        Self::new().header("Content-Type", FORM_CONTENT_TYPE)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Body for `DELETE`, which takes no positional body argument.
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Value of the last `Content-Type` header, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the body will be form-encoded.
    pub fn is_form(&self) -> bool {
        self.content_type().is_some_and(|ct| {
            ct.trim()
                .to_ascii_lowercase()
                .starts_with(FORM_CONTENT_TYPE)
        })
    }
}

/// A body ready to attach to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedBody {
    Empty,
    Form(String),
    Json(Value),
}

/// Encode `body` according to the content type in `options`.
///
/// # Errors
///
/// `ClientError::FormBody` if a form content type is set and the body is
/// not a JSON object.
pub fn encode_body(
    endpoint: &str,
    body: Option<&Value>,
    options: &RequestOptions,
) -> Result<EncodedBody, ClientError> {
    let body = match body {
        None | Some(Value::Null) => return Ok(EncodedBody::Empty),
        Some(body) => body,
    };

    if !options.is_form() {
        return Ok(EncodedBody::Json(body.clone()));
    }

    let Value::Object(fields) = body else {
        return Err(ClientError::FormBody {
            endpoint: endpoint.to_string(),
            kind: json_kind(body),
        });
    };

    let mut form = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        match value {
            Value::String(s) => form.append_pair(key, s),
            other => form.append_pair(key, &other.to_string()),
        };
    }
    Ok(EncodedBody::Form(form.finish()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
