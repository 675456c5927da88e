//! # Test Data
//!
//! Login credentials and the account template, embedded from
//! `data/test_data.json` and parsed once. The account template is checked
//! against the create-account request schema at load time, so a broken
//! fixture fails every scenario that uses it with the same message.

use std::sync::OnceLock;

use aex_schema::facade::validate_create_user_request;
use aex_schema::{CreateUserRequest, LoginRequest};
use serde::Deserialize;
use serde_json::Value;

const TEST_DATA_JSON: &str = include_str!("../data/test_data.json");

/// A login body that omits `email`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissingEmailCredentials {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub valid: LoginRequest,
    pub invalid: LoginRequest,
    pub missing_email: MissingEmailCredentials,
}

/// Contents of `data/test_data.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestData {
    pub login_credentials: LoginCredentials,
    pub valid_user: CreateUserRequest,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FixtureError {
    #[error("test data is not valid JSON: {0}")]
    Parse(String),

    #[error("test data field '{field}' is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl TestData {
    /// The embedded fixture, parsed on first use.
    pub fn embedded() -> Result<&'static TestData, FixtureError> {
        static EMBEDDED: OnceLock<Result<TestData, FixtureError>> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| Self::parse(TEST_DATA_JSON))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Parse a fixture document.
    pub fn parse(json: &str) -> Result<Self, FixtureError> {
        let doc: Value = serde_json::from_str(json).map_err(|e| FixtureError::Parse(e.to_string()))?;

        let login_credentials = doc
            .get("loginCredentials")
            .cloned()
            .ok_or_else(|| missing("loginCredentials"))
            .and_then(|v| {
                serde_json::from_value(v).map_err(|e| FixtureError::Invalid {
                    field: "loginCredentials",
                    reason: e.to_string(),
                })
            })?;

        let valid_user = doc.get("validUser").ok_or_else(|| missing("validUser"))?;
        let valid_user = validate_create_user_request(valid_user).map_err(|e| FixtureError::Invalid {
            field: "validUser",
            reason: e.to_string(),
        })?;

        Ok(Self {
            login_credentials,
            valid_user,
        })
    }

    /// The account template under a fresh email.
    pub fn unique_user(&self) -> CreateUserRequest {
        self.valid_user.clone().with_email(unique_email())
    }
}

fn missing(field: &'static str) -> FixtureError {
    FixtureError::Invalid {
        field,
        reason: "missing".into(),
    }
}

/// `testuser_<unix millis>@example.com`.
pub fn unique_email() -> String {
    format!("testuser_{}@example.com", chrono::Utc::now().timestamp_millis())
}
