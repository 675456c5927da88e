//! Code-and-message bodies shared by success acknowledgements and errors.

use serde::{Deserialize, Serialize};

/// Fixed message of every 405 response.
pub const METHOD_NOT_SUPPORTED_MESSAGE: &str = "This request method is not supported.";

/// Fixed message of every 400 missing-parameter response.
pub const MISSING_PARAMETER_MESSAGE: &str =
    "Bad request, some parameter is missing in POST request.";

/// `{responseCode, message}` body.
///
/// Which codes and messages are acceptable depends on the schema the body
/// was validated against, not on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    #[serde(deserialize_with = "crate::number::integral")]
    pub response_code: u16,
    pub message: String,
}

/// Per-field detail of a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 400/422 body with an optional list of per-field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    #[serde(deserialize_with = "crate::number::integral")]
    pub response_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}
