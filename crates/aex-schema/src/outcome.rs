//! # Endpoint Outcomes
//!
//! The Automation Exercise API answers every documented request with one of
//! a small, closed set of bodies. [`ApiOutcome`] names each of them, keyed
//! by [`Endpoint`] and HTTP status, so a test can match on what came back
//! instead of probing an untyped JSON document.
//!
//! | Endpoint | Status | Variant |
//! |----------|--------|---------|
//! | any | 405 | `MethodNotSupported` |
//! | productsList | 200 | `ProductsList` |
//! | brandsList | 200 | `BrandsList` |
//! | searchProduct | 200, 400 | `SearchResults`, `SearchMissingParameter` |
//! | verifyLogin | 200, 400, 404 | `LoginSucceeded`, `LoginMissingParameter`, `LoginFailed` |
//! | createAccount | 201, 400 | `UserCreated`, `UserExists` |
//! | deleteAccount | 200, 404 | `UserDeleted`, `UserNotFound` |
//! | updateAccount | 200, 404 | `UserUpdated`, `UserNotFound` |
//! | getUserDetailByEmail | 200, 404 | `UserDetail`, `UserNotFound` |

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::brands::BrandsListResponse;
use crate::facade;
use crate::products::{ProductsListResponse, SearchProductResponse};
use crate::status::StatusMessage;
use crate::user::GetUserAccountResponse;
use crate::validate::SchemaValidationError;

/// A documented resource of the API, relative to its base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ProductsList,
    BrandsList,
    SearchProduct,
    VerifyLogin,
    CreateAccount,
    DeleteAccount,
    UpdateAccount,
    GetUserDetailByEmail,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::ProductsList,
        Endpoint::BrandsList,
        Endpoint::SearchProduct,
        Endpoint::VerifyLogin,
        Endpoint::CreateAccount,
        Endpoint::DeleteAccount,
        Endpoint::UpdateAccount,
        Endpoint::GetUserDetailByEmail,
    ];

    /// Path of the resource, with a leading slash.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ProductsList => "/productsList",
            Endpoint::BrandsList => "/brandsList",
            Endpoint::SearchProduct => "/searchProduct",
            Endpoint::VerifyLogin => "/verifyLogin",
            Endpoint::CreateAccount => "/createAccount",
            Endpoint::DeleteAccount => "/deleteAccount",
            Endpoint::UpdateAccount => "/updateAccount",
            Endpoint::GetUserDetailByEmail => "/getUserDetailByEmail",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Every documented response, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    ProductsList(ProductsListResponse),
    BrandsList(BrandsListResponse),
    SearchResults(SearchProductResponse),
    SearchMissingParameter(StatusMessage),
    LoginSucceeded(StatusMessage),
    LoginMissingParameter(StatusMessage),
    LoginFailed(StatusMessage),
    UserCreated(StatusMessage),
    UserExists(StatusMessage),
    UserDeleted(StatusMessage),
    UserUpdated(StatusMessage),
    UserDetail(GetUserAccountResponse),
    UserNotFound(StatusMessage),
    MethodNotSupported(StatusMessage),
}

/// Why a response could not be classified.
#[derive(Error, Debug, Clone)]
pub enum OutcomeError {
    /// The endpoint does not document this status.
    #[error("{endpoint} has no documented response with status {status}")]
    UnexpectedStatus { endpoint: Endpoint, status: u16 },

    /// The status is documented but the body does not match its schema.
    #[error("{endpoint} returned {status} with a non-conforming body: {source}")]
    Schema {
        endpoint: Endpoint,
        status: u16,
        #[source]
        source: SchemaValidationError,
    },
}

impl ApiOutcome {
    /// Pick the variant for `(endpoint, status)` and validate `body` as it.
    ///
    /// # Errors
    ///
    /// `UnexpectedStatus` if the pair is undocumented, `Schema` if the body
    /// does not conform to the variant's schema.
    pub fn classify(endpoint: Endpoint, status: u16, body: &Value) -> Result<Self, OutcomeError> {
        use Endpoint as E;

        let decoded = match (endpoint, status) {
            (_, 405) => facade::validate_method_not_supported(body).map(Self::MethodNotSupported),
            (E::ProductsList, 200) => facade::validate_products_list(body).map(Self::ProductsList),
            (E::BrandsList, 200) => facade::validate_brands_list(body).map(Self::BrandsList),
            (E::SearchProduct, 200) => facade::validate_search_product(body).map(Self::SearchResults),
            (E::SearchProduct, 400) => {
                facade::validate_search_missing_parameter(body).map(Self::SearchMissingParameter)
            }
            (E::VerifyLogin, 200) => facade::validate_login_success(body).map(Self::LoginSucceeded),
            (E::VerifyLogin, 400) => {
                facade::validate_login_missing_parameter(body).map(Self::LoginMissingParameter)
            }
            (E::VerifyLogin, 404) => facade::validate_login_failed(body).map(Self::LoginFailed),
            (E::CreateAccount, 201) => facade::validate_create_user_success(body).map(Self::UserCreated),
            (E::CreateAccount, 400) => facade::validate_user_exists(body).map(Self::UserExists),
            (E::DeleteAccount, 200) => facade::validate_delete_user_success(body).map(Self::UserDeleted),
            (E::UpdateAccount, 200) => facade::validate_update_user_success(body).map(Self::UserUpdated),
            (E::GetUserDetailByEmail, 200) => facade::validate_get_user_account(body).map(Self::UserDetail),
            (E::DeleteAccount | E::UpdateAccount | E::GetUserDetailByEmail, 404) => {
                facade::validate_user_not_found(body).map(Self::UserNotFound)
            }
            _ => return Err(OutcomeError::UnexpectedStatus { endpoint, status }),
        };

        decoded.map_err(|source| OutcomeError::Schema {
            endpoint,
            status,
            source,
        })
    }

    /// The `responseCode` the body carried.
    pub fn response_code(&self) -> u16 {
        match self {
            ApiOutcome::ProductsList(r) => r.response_code,
            ApiOutcome::BrandsList(r) => r.response_code,
            ApiOutcome::SearchResults(r) => r.response_code,
            ApiOutcome::UserDetail(r) => r.response_code,
            ApiOutcome::SearchMissingParameter(m)
            | ApiOutcome::LoginSucceeded(m)
            | ApiOutcome::LoginMissingParameter(m)
            | ApiOutcome::LoginFailed(m)
            | ApiOutcome::UserCreated(m)
            | ApiOutcome::UserExists(m)
            | ApiOutcome::UserDeleted(m)
            | ApiOutcome::UserUpdated(m)
            | ApiOutcome::UserNotFound(m)
            | ApiOutcome::MethodNotSupported(m) => m.response_code,
        }
    }

    /// The message, for variants that carry one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiOutcome::ProductsList(_)
            | ApiOutcome::BrandsList(_)
            | ApiOutcome::SearchResults(_)
            | ApiOutcome::UserDetail(_) => None,
            ApiOutcome::SearchMissingParameter(m)
            | ApiOutcome::LoginSucceeded(m)
            | ApiOutcome::LoginMissingParameter(m)
            | ApiOutcome::LoginFailed(m)
            | ApiOutcome::UserCreated(m)
            | ApiOutcome::UserExists(m)
            | ApiOutcome::UserDeleted(m)
            | ApiOutcome::UserUpdated(m)
            | ApiOutcome::UserNotFound(m)
            | ApiOutcome::MethodNotSupported(m) => Some(&m.message),
        }
    }
}
