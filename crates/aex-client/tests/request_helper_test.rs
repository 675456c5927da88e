//! Tests for ApiClient against a scripted HTTP double.
//!
//! | Concern | Test |
//! |---------|------|
//! | URL = base + path | `get_*` |
//! | form encoding | `post_form_*`, `delete_*` |
//! | JSON bodies | `put_json_*` |
//! | query / headers | `get_with_query_*` |
//! | raw responses | `non_json_*`, `error_status_*` |
//! | transport failure | `unreachable_*` |

use aex_client::{ApiClient, ApiConfig, ClientError, RequestOptions, ResponseBody};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> ApiClient {
    let config = ApiConfig::with_base_url(&format!("{}/api", mock_server.uri()))
        .unwrap()
        .timeout_secs(5);
    ApiClient::new(config).unwrap()
}

// ── GET ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_appends_path_to_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/productsList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": 200,
            "products": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.get("/productsList", RequestOptions::new()).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.endpoint(), "GET /productsList");
    assert_eq!(resp.json().unwrap()["responseCode"], 200);
}

#[tokio::test]
async fn get_with_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/getUserDetailByEmail"))
        .and(query_param("email", "qa@example.com"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseCode": 404, "message": "x"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let opts = RequestOptions::new()
        .query("email", "qa@example.com")
        .header("X-Trace", "abc");
    let resp = client.get("/getUserDetailByEmail", opts).await.unwrap();
    assert_eq!(resp.status(), 200);
}

// ── Bodies ───────────────────────────────────────────────────────────

#[tokio::test]
async fn post_form_sends_urlencoded_pairs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/searchProduct"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("search_product=Tshirt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseCode": 200, "products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = json!({"search_product": "Tshirt"});
    let resp = client
        .post("/searchProduct", Some(&body), RequestOptions::form())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn put_json_without_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/updateAccount"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "a@b.com", "name": "Updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseCode": 200, "message": "User updated!"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = json!({"email": "a@b.com", "name": "Updated"});
    let resp = client
        .put("/updateAccount", Some(&body), RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(resp.json().unwrap()["message"], "User updated!");
}

#[tokio::test]
async fn delete_sends_data_as_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/deleteAccount"))
        .and(body_string("email=qa%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseCode": 404, "message": "Account not found!"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let opts = RequestOptions::form().data(json!({"email": "qa@example.com"}));
    let resp = client.delete("/deleteAccount", opts).await.unwrap();
    assert_eq!(resp.json().unwrap()["responseCode"], 404);
}

// ── Raw responses ────────────────────────────────────────────────────

#[tokio::test]
async fn non_json_body_is_returned_as_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/brandsList"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.get("/brandsList", RequestOptions::new()).await.unwrap();
    assert_eq!(resp.status(), 503);
    assert_eq!(resp.body(), ResponseBody::Text("<html>down</html>".into()));
    assert!(matches!(resp.json(), Err(ClientError::Decode { .. })));
}

#[tokio::test]
async fn error_status_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/productsList"))
        .respond_with(ResponseTemplate::new(405).set_body_json(json!({
            "responseCode": 405,
            "message": "This request method is not supported."
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.post("/productsList", None, RequestOptions::new()).await.unwrap();
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.json().unwrap()["message"], "This request method is not supported.");
    assert!(resp.text().contains("\"responseCode\":405"));
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let config = ApiConfig::with_base_url("http://127.0.0.1:1/api").unwrap().timeout_secs(2);
    let client = ApiClient::new(config).unwrap();
    let err = client.get("/productsList", RequestOptions::new()).await.unwrap_err();
    match err {
        ClientError::Http { endpoint, .. } => assert_eq!(endpoint, "GET /productsList"),
        other => panic!("expected Http, got: {other}"),
    }
}

#[tokio::test]
async fn form_body_must_be_object() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);
    let err = client
        .post("/verifyLogin", Some(&json!("email=a")), RequestOptions::form())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::FormBody { kind: "a string", .. }));
}
