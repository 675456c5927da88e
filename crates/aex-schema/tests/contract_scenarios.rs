//! Documented contract scenarios for the validation facade.
//!
//! Each test feeds a body shaped like a live Automation Exercise response
//! (or a deliberate deviation from one) through the facade and checks that
//! it is accepted or rejected with the expected field paths.

use aex_schema::facade::*;
use aex_schema::{SchemaValidationError, Title, METHOD_NOT_SUPPORTED_MESSAGE, MISSING_PARAMETER_MESSAGE};
use serde_json::{json, Value};

fn product(id: u64) -> Value {
    json!({
        "id": id,
        "name": "T",
        "price": "Rs. 400",
        "brand": "X",
        "category": {"usertype": {"usertype": "Women"}, "category": "Tops"}
    })
}

fn account() -> Value {
    json!({
        "id": 91234,
        "name": "QA Tester",
        "email": "qa.tester@example.com",
        "title": "Mr",
        "birth_date": "15",
        "birth_month": "June",
        "birth_year": "1990",
        "firstname": "QA",
        "lastname": "Tester",
        "company": "Test Corp",
        "address1": "123 Test Street",
        "address2": "",
        "country": "India",
        "zipcode": "110001",
        "state": "Delhi",
        "city": "New Delhi",
        "mobile_number": "9876543210"
    })
}

fn sorted_paths(err: &SchemaValidationError) -> Vec<String> {
    let mut paths: Vec<String> = err.paths().into_iter().map(String::from).collect();
    paths.sort();
    paths
}

// ── Products ─────────────────────────────────────────────────────────

#[test]
fn products_list_scenario_validates() {
    let body = json!({"responseCode": 200, "products": [product(1)]});
    let list = validate_products_list(&body).unwrap();
    assert_eq!(list.products.len(), 1);
    assert_eq!(list.products[0].price, "Rs. 400");
    assert_eq!(list.products[0].category.usertype.usertype, "Women");
}

#[test]
fn empty_products_list_is_rejected() {
    let body = json!({"responseCode": 200, "products": []});
    let err = validate_products_list(&body).unwrap_err();
    assert_eq!(err.paths(), vec!["products"]);
}

#[test]
fn empty_search_results_are_accepted() {
    let body = json!({"responseCode": 200, "products": []});
    let results = validate_search_product(&body).unwrap();
    assert!(results.products.is_empty());
}

#[test]
fn product_id_must_be_numeric() {
    let mut bad = product(1);
    bad["id"] = json!("1");
    let err = validate_product(&bad).unwrap_err();
    assert_eq!(err.paths(), vec!["id"]);
}

#[test]
fn negative_id_is_a_path_violation() {
    let mut bad = product(1);
    bad["id"] = json!(-1);
    let err = validate_product(&bad).unwrap_err();
    assert!(matches!(err, SchemaValidationError::ValidationFailed { .. }), "{err}");
    assert_eq!(err.paths(), vec!["id"]);

    bad["name"] = json!(3);
    let err = validate_product(&bad).unwrap_err();
    assert_eq!(sorted_paths(&err), vec!["id", "name"]);
}

#[test]
fn integral_floats_decode_as_integers() {
    let mut body = product(1);
    body["id"] = json!(7.0);
    assert_eq!(validate_product(&body).unwrap().id, 7);

    let body = json!({"responseCode": 405.0, "message": METHOD_NOT_SUPPORTED_MESSAGE});
    assert_eq!(validate_method_not_supported(&body).unwrap().response_code, 405);

    let body = json!({"responseCode": 200.0, "brands": [{"id": 1.0, "brand": "Polo"}]});
    let list = validate_brands_list(&body).unwrap();
    assert_eq!((list.response_code, list.brands[0].id), (200, 1));
}

#[test]
fn fractional_id_is_a_path_violation() {
    let mut bad = product(1);
    bad["id"] = json!(1.5);
    let err = validate_product(&bad).unwrap_err();
    assert_eq!(err.paths(), vec!["id"]);
}

#[test]
fn missing_nested_category_reports_full_path() {
    let mut bad = product(2);
    bad["category"] = json!({"category": "Tops"});
    let body = json!({"responseCode": 200, "products": [product(1), bad]});
    let err = validate_products_list(&body).unwrap_err();
    assert_eq!(err.paths(), vec!["products.1.category.usertype"]);
    assert!(err.to_string().contains("products.1.category.usertype"));
}

#[test]
fn every_violation_is_reported() {
    let body = json!({
        "responseCode": 201,
        "products": [{"id": "x", "name": 3, "price": "Rs. 1", "brand": "B"}]
    });
    let err = validate_products_list(&body).unwrap_err();
    assert_eq!(
        sorted_paths(&err),
        vec!["products.0.category", "products.0.id", "products.0.name", "responseCode"]
    );
    assert!(err.to_string().starts_with("schema validation failed for 'products-list': "));
}

// ── Brands ───────────────────────────────────────────────────────────

#[test]
fn brands_list_validates_and_rejects_empty() {
    let body = json!({"responseCode": 200, "brands": [{"id": 1, "brand": "Polo"}, {"id": 2, "brand": "H&M"}]});
    assert_eq!(validate_brands_list(&body).unwrap().brands.len(), 2);

    let empty = json!({"responseCode": 200, "brands": []});
    assert!(validate_brands_list(&empty).is_err());
}

#[test]
fn brand_requires_both_fields() {
    let err = validate_brand(&json!({})).unwrap_err();
    assert_eq!(sorted_paths(&err), vec!["brand", "id"]);
}

// ── Literal error bodies ─────────────────────────────────────────────

#[test]
fn search_missing_parameter_literal() {
    let ok = json!({"responseCode": 400, "message": MISSING_PARAMETER_MESSAGE});
    validate_search_missing_parameter(&ok).unwrap();

    let wrong = json!({"responseCode": 400, "message": "wrong text"});
    let err = validate_search_missing_parameter(&wrong).unwrap_err();
    assert_eq!(err.paths(), vec!["message"]);
}

#[test]
fn method_not_supported_literal() {
    let ok = json!({"responseCode": 405, "message": METHOD_NOT_SUPPORTED_MESSAGE});
    validate_method_not_supported(&ok).unwrap();
    validate_login_method_not_supported(&ok).unwrap();

    let lower = json!({"responseCode": 405, "message": "this request method is not supported."});
    assert!(validate_method_not_supported(&lower).is_err());
}

#[test]
fn free_text_messages_accept_any_string() {
    let body = json!({"responseCode": 404, "message": "User not found!"});
    assert_eq!(validate_login_failed(&body).unwrap().message, "User not found!");
    validate_not_found(&body).unwrap();
    validate_user_not_found(&body).unwrap();

    let numeric = json!({"responseCode": 404, "message": 404});
    assert!(validate_not_found(&numeric).is_err());
}

#[test]
fn success_acknowledgements_pin_codes() {
    let created = json!({"responseCode": 201, "message": "User created!"});
    validate_create_user_success(&created).unwrap();
    assert!(validate_update_user_success(&created).is_err());

    let deleted = json!({"responseCode": 200, "message": "Account deleted!"});
    validate_delete_user_success(&deleted).unwrap();
    validate_login_success(&json!({"responseCode": 200, "message": "User exists!"})).unwrap();
}

// ── Accounts ─────────────────────────────────────────────────────────

#[test]
fn user_detail_validates_with_extra_id() {
    let body = json!({"responseCode": 200, "user": account()});
    let detail = validate_get_user_account(&body).unwrap();
    assert_eq!(detail.user.title, Title::Mr);
    assert_eq!(detail.user.company.as_deref(), Some("Test Corp"));
}

#[test]
fn title_outside_closed_set_is_rejected() {
    for title in ["Dr", "mr", "", "Sir"] {
        let mut user = account();
        user["title"] = json!(title);
        let err = validate_user_account(&user).unwrap_err();
        assert_eq!(err.paths(), vec!["title"], "title {title:?} must be rejected");
    }
}

#[test]
fn optional_account_fields_may_be_absent_but_not_null() {
    let mut user = account();
    let obj = user.as_object_mut().unwrap();
    obj.remove("company");
    obj.remove("address2");
    let decoded = validate_user_account(&user).unwrap();
    assert!(decoded.company.is_none());

    user["company"] = Value::Null;
    let err = validate_user_account(&user).unwrap_err();
    assert_eq!(err.paths(), vec!["company"]);
}

#[test]
fn nested_user_violation_is_prefixed() {
    let mut user = account();
    user.as_object_mut().unwrap().remove("mobile_number");
    let body = json!({"responseCode": 200, "user": user});
    let err = validate_get_user_account(&body).unwrap_err();
    assert_eq!(err.paths(), vec!["user.mobile_number"]);
}

#[test]
fn update_request_needs_only_email() {
    let update = validate_update_user_request(&json!({"email": "a@b.com"})).unwrap();
    assert_eq!(update.email, "a@b.com");
    assert!(update.name.is_none());

    let err = validate_update_user_request(&json!({"name": "No Email"})).unwrap_err();
    assert_eq!(err.paths(), vec!["email"]);
}

#[test]
fn create_request_requires_password() {
    let mut body = account();
    body.as_object_mut().unwrap().remove("id");
    let err = validate_create_user_request(&body).unwrap_err();
    assert_eq!(err.paths(), vec!["password"]);

    body["password"] = json!("Test@123");
    let request = validate_create_user_request(&body).unwrap();
    assert_eq!(request.account().email, "qa.tester@example.com");
}

#[test]
fn delete_request_requires_both_fields() {
    validate_delete_user_request(&json!({"email": "a@b.com", "password": "p"})).unwrap();
    let err = validate_delete_user_request(&json!({"email": "a@b.com"})).unwrap_err();
    assert_eq!(err.paths(), vec!["password"]);
}

#[test]
fn non_object_root_is_reported_at_root() {
    let err = validate_brands_list(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(err.paths(), vec![""]);
    assert!(err.to_string().contains("(root): "));
}
