//! Login request shape (API 7, 8, 10).

use serde::{Deserialize, Serialize};

/// Form body of `POST /verifyLogin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
