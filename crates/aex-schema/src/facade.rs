//! # Validation Facade
//!
//! One function per (endpoint, outcome) pair so call sites name what they
//! expect ("this should be a products list") instead of picking a schema.
//! Every function takes the raw parsed body, validates it against the
//! embedded schema, and returns the decoded value or the aggregated
//! [`SchemaValidationError`].
//!
//! The functions are pure: no state beyond the shared, immutable registry.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::brands::{Brand, BrandsListResponse};
use crate::login::LoginRequest;
use crate::products::{Product, ProductsListResponse, SearchProductResponse};
use crate::registry::{SchemaId, SchemaRegistry};
use crate::search::SearchProductRequest;
use crate::status::{StatusMessage, ValidationErrorResponse};
use crate::user::{
    CreateUserRequest, DeleteUserRequest, GetUserAccountResponse, UpdateUserRequest, UserAccount,
};
use crate::validate::SchemaValidationError;

type Result<T> = std::result::Result<T, SchemaValidationError>;

/// Validate `body` against an arbitrary shape and decode it.
pub fn validate<T: DeserializeOwned>(body: &Value, schema: SchemaId) -> Result<T> {
    SchemaRegistry::global()?.decode(body, schema)
}

// -- API 1: products list -----------------------------------------------------

/// `GET /productsList` success (API 1).
pub fn validate_products_list(body: &Value) -> Result<ProductsListResponse> {
    validate(body, SchemaId::ProductsList)
}

/// A single product.
pub fn validate_product(body: &Value) -> Result<Product> {
    validate(body, SchemaId::Product)
}

// -- API 2, 4, 9: unsupported method --------------------------------------------

/// 405 with the fixed message (API 2, 4, 9).
pub fn validate_method_not_supported(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::MethodNotSupported)
}

// -- API 3: brands list -------------------------------------------------------

/// `GET /brandsList` success (API 3).
pub fn validate_brands_list(body: &Value) -> Result<BrandsListResponse> {
    validate(body, SchemaId::BrandsList)
}

/// A single brand.
pub fn validate_brand(body: &Value) -> Result<Brand> {
    validate(body, SchemaId::Brand)
}

// -- API 5, 6: search ---------------------------------------------------------

/// `POST /searchProduct` success (API 5).
pub fn validate_search_product(body: &Value) -> Result<SearchProductResponse> {
    validate(body, SchemaId::SearchProduct)
}

/// `POST /searchProduct` form body.
pub fn validate_search_request(body: &Value) -> Result<SearchProductRequest> {
    validate(body, SchemaId::SearchRequest)
}

/// `POST /searchProduct` without `search_product` (API 6).
pub fn validate_search_missing_parameter(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::SearchMissingParameter)
}

// -- API 7–10: verify login ---------------------------------------------------

/// `POST /verifyLogin` with valid details (API 7).
pub fn validate_login_success(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::LoginSuccess)
}

/// `POST /verifyLogin` form body.
pub fn validate_login_request(body: &Value) -> Result<LoginRequest> {
    validate(body, SchemaId::LoginRequest)
}

/// `POST /verifyLogin` without email (API 8).
pub fn validate_login_missing_parameter(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::LoginMissingParameter)
}

/// `DELETE /verifyLogin` (API 9).
pub fn validate_login_method_not_supported(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::LoginMethodNotSupported)
}

/// `POST /verifyLogin` with invalid details (API 10).
pub fn validate_login_failed(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::LoginFailed)
}

// -- API 11: create account ---------------------------------------------------

/// `POST /createAccount` success (API 11).
pub fn validate_create_user_success(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::CreateUserSuccess)
}

/// `POST /createAccount` for an already registered email.
pub fn validate_user_exists(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::UserExists)
}

/// `POST /createAccount` form body.
pub fn validate_create_user_request(body: &Value) -> Result<CreateUserRequest> {
    validate(body, SchemaId::CreateUserRequest)
}

// -- API 12: delete account ---------------------------------------------------

/// `DELETE /deleteAccount` success (API 12).
pub fn validate_delete_user_success(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::DeleteUserSuccess)
}

/// `DELETE /deleteAccount` form body.
pub fn validate_delete_user_request(body: &Value) -> Result<DeleteUserRequest> {
    validate(body, SchemaId::DeleteUserRequest)
}

// -- API 13: update account ---------------------------------------------------

/// `PUT /updateAccount` success (API 13).
pub fn validate_update_user_success(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::UpdateUserSuccess)
}

/// `PUT /updateAccount` form body.
pub fn validate_update_user_request(body: &Value) -> Result<UpdateUserRequest> {
    validate(body, SchemaId::UpdateUserRequest)
}

// -- API 14: account detail ---------------------------------------------------

/// `GET /getUserDetailByEmail` success (API 14).
pub fn validate_get_user_account(body: &Value) -> Result<GetUserAccountResponse> {
    validate(body, SchemaId::GetUserAccount)
}

// -- Shared -------------------------------------------------------------------

/// Account lookup miss (API 12, 13, 14).
pub fn validate_user_not_found(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::UserNotFound)
}

/// A user account record.
pub fn validate_user_account(body: &Value) -> Result<UserAccount> {
    validate(body, SchemaId::UserAccount)
}

/// 400 with the fixed missing-parameter message.
pub fn validate_bad_request(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::BadRequest)
}

/// Any 4xx/5xx code with a free-text message.
pub fn validate_error_response(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::GenericError)
}

/// 404 with a free-text message.
pub fn validate_not_found(body: &Value) -> Result<StatusMessage> {
    validate(body, SchemaId::NotFound)
}

/// 400/422 with optional per-field errors.
pub fn validate_validation_error(body: &Value) -> Result<ValidationErrorResponse> {
    validate(body, SchemaId::ValidationError)
}
