use super::*;

// =============================================================
// Product
// =============================================================

#[test]
fn product_decodes_type_field_as_kind() {
    let raw = r#"{
        "id": 7,
        "name": "Widget",
        "type": "gadget",
        "sku": "W-007",
        "description": "A widget",
        "quantity": 3,
        "price": 12.5,
        "image_url": null,
        "created_by": 1
    }"#;
    let product: Product = serde_json::from_str(raw).unwrap();
    assert_eq!(product.id, 7);
    assert_eq!(product.kind, "gadget");
    assert_eq!(product.description.as_deref(), Some("A widget"));
    assert_eq!(product.created_by, Some(1));
}

#[test]
fn product_optional_fields_default_when_missing() {
    let raw = r#"{"id":1,"name":"N","type":"t","sku":"s","quantity":0,"price":1.0}"#;
    let product: Product = serde_json::from_str(raw).unwrap();
    assert_eq!(product.description, None);
    assert_eq!(product.image_url, None);
    assert_eq!(product.created_by, None);
}

// =============================================================
// ProductListResponse
// =============================================================

#[test]
fn product_list_missing_products_defaults_to_empty() {
    let list: ProductListResponse = serde_json::from_str("{}").unwrap();
    assert!(list.products.is_empty());
    assert_eq!(list.total, None);
}

#[test]
fn product_list_reads_envelope_fields() {
    let raw = r#"{"products":[],"total":12,"page":1,"size":10,"total_pages":2}"#;
    let list: ProductListResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(list.total, Some(12));
    assert_eq!(list.total_pages, Some(2));
}

// =============================================================
// Auth bodies
// =============================================================

#[test]
fn credentials_serialize_as_username_password() {
    let creds = Credentials { username: "alice".to_owned(), password: "secret".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "username": "alice", "password": "secret" })
    );
}

#[test]
fn login_response_token_type_is_optional() {
    let body: LoginResponse = serde_json::from_str(r#"{"access_token":"tok123"}"#).unwrap();
    assert_eq!(body.access_token, "tok123");
    assert_eq!(body.token_type, None);
}

#[test]
fn register_response_message_is_optional() {
    let body: RegisterResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_from_non_json_text_is_empty() {
    assert_eq!(ErrorBody::from_text("Internal Server Error"), ErrorBody::default());
}

#[test]
fn error_body_string_detail() {
    let body = ErrorBody::from_text(r#"{"detail":"Product not found"}"#);
    assert_eq!(body.detail_text().as_deref(), Some("Product not found"));
    assert_eq!(body.message_text(), None);
}

#[test]
fn error_body_validation_detail_joins_messages() {
    let body = ErrorBody::from_text(
        r#"{"detail":[
            {"loc":["body","username"],"msg":"String should have at least 3 characters","type":"string_too_short"},
            {"loc":["body","password"],"msg":"Field required","type":"missing"}
        ]}"#,
    );
    assert_eq!(
        body.detail_text().as_deref(),
        Some("String should have at least 3 characters; Field required")
    );
}

#[test]
fn error_body_empty_strings_count_as_absent() {
    let body = ErrorBody::from_text(r#"{"detail":"","message":""}"#);
    assert_eq!(body.detail_text(), None);
    assert_eq!(body.message_text(), None);
}
