//! Response expectations.
//!
//! Checks layered on top of schema validation: which statuses a scenario
//! accepts, which top-level keys must be present, what a free-text message
//! must contain, and how long a listing must be.

use aex_client::ApiResponse;
use serde_json::Value;

use crate::error::SuiteError;

/// Status must equal `expected`.
pub fn expect_status(response: &ApiResponse, expected: u16) -> Result<(), SuiteError> {
    expect_status_in(response, &[expected]).map(|_| ())
}

/// Status must be one of `expected`; returns it.
pub fn expect_status_in(response: &ApiResponse, expected: &[u16]) -> Result<u16, SuiteError> {
    let actual = response.status();
    if expected.contains(&actual) {
        Ok(actual)
    } else {
        Err(SuiteError::StatusMismatch {
            endpoint: response.endpoint().to_string(),
            expected: expected.to_vec(),
            actual,
        })
    }
}

/// Every key in `keys` must be a top-level field of `body`.
pub fn expect_keys(body: &Value, keys: &[&str]) -> Result<(), SuiteError> {
    match keys.iter().find(|key| body.get(**key).is_none()) {
        Some(key) => Err(SuiteError::MissingKey {
            key: (*key).to_string(),
        }),
        None => Ok(()),
    }
}

/// `body.message` must contain `expected`.
pub fn expect_message_contains(body: &Value, expected: &str) -> Result<(), SuiteError> {
    let actual = body
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| SuiteError::MissingKey {
            key: "message".into(),
        })?;
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(SuiteError::MessageMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// The listing in `body` (`products`, else `brands`, else the body itself)
/// must be an array of at least `min` entries; returns its length.
pub fn expect_array_min_len(body: &Value, min: usize) -> Result<usize, SuiteError> {
    let listing = body
        .get("products")
        .or_else(|| body.get("brands"))
        .unwrap_or(body);
    let actual = listing.as_array().ok_or(SuiteError::NotAnArray)?.len();
    if actual >= min {
        Ok(actual)
    } else {
        Err(SuiteError::ArrayTooShort { min, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aex_client::HeaderMap;
    use serde_json::json;

    fn response(status: u16) -> ApiResponse {
        ApiResponse::new("POST /createAccount".into(), status, HeaderMap::new(), String::new())
    }

    #[test]
    fn status_checks() {
        expect_status(&response(201), 201).unwrap();
        assert_eq!(expect_status_in(&response(400), &[201, 400]).unwrap(), 400);

        let err = expect_status_in(&response(500), &[201, 400]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "POST /createAccount returned status 500, expected one of [201, 400]"
        );
    }

    #[test]
    fn keys_report_first_missing() {
        let body = json!({"responseCode": 200});
        expect_keys(&body, &["responseCode"]).unwrap();
        let err = expect_keys(&body, &["responseCode", "products", "brands"]).unwrap_err();
        assert!(matches!(err, SuiteError::MissingKey { ref key } if key == "products"));
    }

    #[test]
    fn message_contains() {
        let body = json!({"message": "User not found!"});
        expect_message_contains(&body, "User not found").unwrap();
        assert!(matches!(
            expect_message_contains(&body, "User created"),
            Err(SuiteError::MessageMismatch { .. })
        ));
        assert!(matches!(
            expect_message_contains(&json!({"message": 3}), "x"),
            Err(SuiteError::MissingKey { .. })
        ));
    }

    #[test]
    fn array_lookup_order() {
        assert_eq!(expect_array_min_len(&json!({"products": [1, 2]}), 1).unwrap(), 2);
        assert_eq!(expect_array_min_len(&json!({"brands": [1]}), 1).unwrap(), 1);
        assert_eq!(expect_array_min_len(&json!([]), 0).unwrap(), 0);
        assert!(matches!(
            expect_array_min_len(&json!({"products": []}), 1),
            Err(SuiteError::ArrayTooShort { min: 1, actual: 0 })
        ));
        assert!(matches!(
            expect_array_min_len(&json!({"message": "x"}), 0),
            Err(SuiteError::NotAnArray)
        ));
    }
}
