//! Suite errors.
//!
//! A failing scenario returns one of these; its `Display` is the message a
//! test run reports, with the underlying cause preserved as `source`.

use aex_client::ClientError;
use aex_schema::{OutcomeError, SchemaValidationError};

use crate::fixtures::FixtureError;

#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Schema(#[from] SchemaValidationError),

    #[error(transparent)]
    Outcome(#[from] OutcomeError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{endpoint} returned status {actual}, expected one of {expected:?}")]
    StatusMismatch {
        endpoint: String,
        expected: Vec<u16>,
        actual: u16,
    },

    #[error("response body has no '{key}' field")]
    MissingKey { key: String },

    #[error("response message {actual:?} does not contain {expected:?}")]
    MessageMismatch { expected: String, actual: String },

    #[error("response has no products, brands or root array")]
    NotAnArray,

    #[error("response array has {actual} entries, expected at least {min}")]
    ArrayTooShort { min: usize, actual: usize },
}
