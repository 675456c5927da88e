//! # Endpoint Scenarios (API 1–14)
//!
//! One async function per documented case. Each issues its request through
//! [`ApiClient`], checks the status against the set the case accepts,
//! validates the body through the facade, and returns the decoded result.
//! Request bodies are validated against their own schemas before they are
//! sent.
//!
//! The functions are independent and hold no shared state, so they can run
//! concurrently against the live service or against an HTTP double.

use aex_client::{ApiClient, ApiResponse, RequestOptions};
use aex_schema::facade;
use aex_schema::{
    ApiOutcome, BrandsListResponse, DeleteUserRequest, Endpoint, ProductsListResponse,
    SearchProductRequest, SearchProductResponse, StatusMessage, UpdateUserRequest,
    METHOD_NOT_SUPPORTED_MESSAGE, MISSING_PARAMETER_MESSAGE,
};
use serde_json::json;

use crate::error::SuiteError;
use crate::expect::{
    expect_array_min_len, expect_keys, expect_message_contains, expect_status, expect_status_in,
};
use crate::fixtures::TestData;

/// Search term used by API 5.
pub const SEARCH_TERM: &str = "Tshirt";

/// Substring of the API 10 failure message.
pub const USER_NOT_FOUND_TEXT: &str = "User not found";

/// Substring of the API 11 success message.
pub const USER_CREATED_TEXT: &str = "User created";

/// Body of every 405 case.
fn method_not_supported(response: &ApiResponse) -> Result<StatusMessage, SuiteError> {
    expect_status(response, 405)?;
    let body = response.json()?;
    let message = facade::validate_method_not_supported(&body)?;
    expect_message_contains(&body, METHOD_NOT_SUPPORTED_MESSAGE)?;
    Ok(message)
}

/// Status within `accepted`, `responseCode` present, body classified.
fn classified(
    response: &ApiResponse,
    endpoint: Endpoint,
    accepted: &[u16],
) -> Result<ApiOutcome, SuiteError> {
    let status = expect_status_in(response, accepted)?;
    let body = response.json()?;
    expect_keys(&body, &["responseCode"])?;
    Ok(ApiOutcome::classify(endpoint, status, &body)?)
}

/// API 1: `GET /productsList` returns a non-empty product listing.
pub async fn api01_products_list(client: &ApiClient) -> Result<ProductsListResponse, SuiteError> {
    let response = client.get(Endpoint::ProductsList.path(), RequestOptions::new()).await?;
    expect_status(&response, 200)?;
    let body = response.json()?;
    expect_keys(&body, &["responseCode", "products"])?;
    let list = facade::validate_products_list(&body)?;
    expect_array_min_len(&body, 1)?;
    Ok(list)
}

/// API 2: `POST /productsList` is not supported.
pub async fn api02_post_products_list(client: &ApiClient) -> Result<StatusMessage, SuiteError> {
    let response = client
        .post(Endpoint::ProductsList.path(), Some(&json!({})), RequestOptions::new())
        .await?;
    method_not_supported(&response)
}

/// API 3: `GET /brandsList` returns a non-empty brand listing.
pub async fn api03_brands_list(client: &ApiClient) -> Result<BrandsListResponse, SuiteError> {
    let response = client.get(Endpoint::BrandsList.path(), RequestOptions::new()).await?;
    expect_status(&response, 200)?;
    let body = response.json()?;
    expect_keys(&body, &["responseCode", "brands"])?;
    let list = facade::validate_brands_list(&body)?;
    expect_array_min_len(&body, 1)?;
    Ok(list)
}

/// API 4: `PUT /brandsList` is not supported.
pub async fn api04_put_brands_list(client: &ApiClient) -> Result<StatusMessage, SuiteError> {
    let response = client
        .put(Endpoint::BrandsList.path(), Some(&json!({})), RequestOptions::new())
        .await?;
    method_not_supported(&response)
}

/// API 5: `POST /searchProduct` with `search_product=<term>`.
///
/// An empty result set is a valid answer.
pub async fn api05_search_product(
    client: &ApiClient,
    term: &str,
) -> Result<SearchProductResponse, SuiteError> {
    let request = serde_json::to_value(SearchProductRequest::new(term))?;
    facade::validate_search_request(&request)?;

    let response = client
        .post(Endpoint::SearchProduct.path(), Some(&request), RequestOptions::form())
        .await?;
    expect_status(&response, 200)?;
    let body = response.json()?;
    expect_keys(&body, &["responseCode", "products"])?;
    let results = facade::validate_search_product(&body)?;
    expect_array_min_len(&body, 0)?;
    tracing::info!(term, hits = results.products.len(), "search completed");
    Ok(results)
}

/// API 6: `POST /searchProduct` without `search_product`.
pub async fn api06_search_without_parameter(client: &ApiClient) -> Result<StatusMessage, SuiteError> {
    let response = client
        .post(Endpoint::SearchProduct.path(), Some(&json!({})), RequestOptions::form())
        .await?;
    expect_status(&response, 400)?;
    let body = response.json()?;
    let message = facade::validate_search_missing_parameter(&body)?;
    expect_message_contains(&body, MISSING_PARAMETER_MESSAGE)?;
    Ok(message)
}

/// API 7: `POST /verifyLogin` with the fixture's valid credentials.
///
/// The account may not exist on the live service, so 404 is accepted.
pub async fn api07_verify_login_valid(
    client: &ApiClient,
    data: &TestData,
) -> Result<ApiOutcome, SuiteError> {
    let request = serde_json::to_value(&data.login_credentials.valid)?;
    facade::validate_login_request(&request)?;

    let response = client
        .post(Endpoint::VerifyLogin.path(), Some(&request), RequestOptions::form())
        .await?;
    classified(&response, Endpoint::VerifyLogin, &[200, 404])
}

/// API 8: `POST /verifyLogin` with a password but no email.
pub async fn api08_verify_login_without_email(
    client: &ApiClient,
    data: &TestData,
) -> Result<StatusMessage, SuiteError> {
    let request = json!({"password": data.login_credentials.missing_email.password});
    let response = client
        .post(Endpoint::VerifyLogin.path(), Some(&request), RequestOptions::form())
        .await?;
    expect_status(&response, 400)?;
    let body = response.json()?;
    let message = facade::validate_login_missing_parameter(&body)?;
    expect_message_contains(&body, MISSING_PARAMETER_MESSAGE)?;
    Ok(message)
}

/// API 9: `DELETE /verifyLogin` is not supported.
pub async fn api09_delete_verify_login(client: &ApiClient) -> Result<StatusMessage, SuiteError> {
    let response = client.delete(Endpoint::VerifyLogin.path(), RequestOptions::new()).await?;
    expect_status(&response, 405)?;
    let body = response.json()?;
    let message = facade::validate_login_method_not_supported(&body)?;
    expect_message_contains(&body, METHOD_NOT_SUPPORTED_MESSAGE)?;
    Ok(message)
}

/// API 10: `POST /verifyLogin` with credentials that match no account.
pub async fn api10_verify_login_invalid(
    client: &ApiClient,
    data: &TestData,
) -> Result<StatusMessage, SuiteError> {
    let request = serde_json::to_value(&data.login_credentials.invalid)?;
    facade::validate_login_request(&request)?;

    let response = client
        .post(Endpoint::VerifyLogin.path(), Some(&request), RequestOptions::form())
        .await?;
    expect_status(&response, 404)?;
    let body = response.json()?;
    let message = facade::validate_login_failed(&body)?;
    expect_message_contains(&body, USER_NOT_FOUND_TEXT)?;
    Ok(message)
}

/// API 11: `POST /createAccount` with the account template under a fresh
/// email. 400 (already registered) is accepted.
pub async fn api11_create_account(
    client: &ApiClient,
    data: &TestData,
) -> Result<ApiOutcome, SuiteError> {
    let user = data.unique_user();
    let request = serde_json::to_value(&user)?;
    facade::validate_create_user_request(&request)?;

    let response = client
        .post(Endpoint::CreateAccount.path(), Some(&request), RequestOptions::form())
        .await?;
    let status = expect_status_in(&response, &[201, 400])?;
    let body = response.json()?;
    expect_keys(&body, &["responseCode", "message"])?;
    let outcome = ApiOutcome::classify(Endpoint::CreateAccount, status, &body)?;
    if let ApiOutcome::UserCreated(_) = outcome {
        expect_message_contains(&body, USER_CREATED_TEXT)?;
        tracing::info!(email = %user.email, "account created");
    }
    Ok(outcome)
}

/// API 12: `DELETE /deleteAccount` for the fixture's valid credentials.
pub async fn api12_delete_account(
    client: &ApiClient,
    data: &TestData,
) -> Result<ApiOutcome, SuiteError> {
    let credentials = &data.login_credentials.valid;
    let request = serde_json::to_value(DeleteUserRequest {
        email: credentials.email.clone(),
        password: credentials.password.clone(),
    })?;
    facade::validate_delete_user_request(&request)?;

    let response = client
        .delete(Endpoint::DeleteAccount.path(), RequestOptions::form().data(request))
        .await?;
    classified(&response, Endpoint::DeleteAccount, &[200, 404])
}

/// API 13: `PUT /updateAccount` renaming the fixture account.
pub async fn api13_update_account(
    client: &ApiClient,
    data: &TestData,
) -> Result<ApiOutcome, SuiteError> {
    let request = serde_json::to_value(UpdateUserRequest {
        name: Some("Updated Test User".into()),
        firstname: Some("Updated".into()),
        lastname: Some("User".into()),
        ..UpdateUserRequest::new(data.login_credentials.valid.email.clone())
    })?;
    facade::validate_update_user_request(&request)?;

    let response = client
        .put(Endpoint::UpdateAccount.path(), Some(&request), RequestOptions::form())
        .await?;
    classified(&response, Endpoint::UpdateAccount, &[200, 404, 405])
}

/// API 14: `GET /getUserDetailByEmail?email=<valid email>`.
pub async fn api14_user_detail_by_email(
    client: &ApiClient,
    data: &TestData,
) -> Result<ApiOutcome, SuiteError> {
    let email = &data.login_credentials.valid.email;
    let response = client
        .get(
            Endpoint::GetUserDetailByEmail.path(),
            RequestOptions::new().query("email", email.as_str()),
        )
        .await?;
    let outcome = classified(&response, Endpoint::GetUserDetailByEmail, &[200, 404])?;
    if let ApiOutcome::UserDetail(detail) = &outcome {
        tracing::info!(email = %detail.user.email, name = %detail.user.name, "account found");
    }
    Ok(outcome)
}
