//! Product routes against a stub upstream.

#![allow(clippy::indexing_slicing)]

use axum::http::{Method, StatusCode};
use serde_json::json;

use commerce_bridge_integration_tests::{StubUpstream, bridge_app, get, sample_product, send};

const SITE: &str = "site-1";
const PRODUCTS_PATH: &str = "/1.0/commerce/sites/site-1/products";

#[tokio::test]
async fn list_forwards_filters_and_pagination() {
    let stub = StubUpstream::start().await;
    stub.on(
        Method::GET,
        PRODUCTS_PATH,
        200,
        json!({
            "result": [sample_product("prod-1")],
            "pagination": {"nextPage": "cursor-2", "totalResults": 41}
        }),
    );
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products?limit=5&category=prints&tag=")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "prod-1");
    assert_eq!(body["pagination"]["nextPage"], "cursor-2");
    assert_eq!(body["pagination"]["totalResults"], 41);
    assert!(body.get("error").is_none());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.as_deref(), Some("limit=5&category=prints"));
}

#[tokio::test]
async fn list_defaults_limit() {
    let stub = StubUpstream::start().await;
    stub.on(Method::GET, PRODUCTS_PATH, 200, json!({"result": []}));
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert!(body.get("pagination").is_none());
    assert_eq!(stub.requests()[0].query.as_deref(), Some("limit=20"));
}

#[tokio::test]
async fn invalid_limit_never_reaches_upstream() {
    let stub = StubUpstream::start().await;
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products?limit=abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_parameter");
    assert_eq!(body["error"]["message"], "Invalid limit parameter");
    assert!(body.get("data").is_none());
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn invalid_offset_never_reaches_upstream() {
    let stub = StubUpstream::start().await;
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products?offset=ten")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid offset parameter");
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn variants_match_product_variants() {
    let stub = StubUpstream::start().await;
    stub.on(
        Method::GET,
        "/1.0/commerce/sites/site-1/products/prod-1",
        200,
        sample_product("prod-1"),
    );

    let (_, product) = send(
        bridge_app(&stub, Some("token"), Some(SITE)),
        get("/api/v1/products/prod-1"),
    )
    .await;
    let (status, variants) = send(
        bridge_app(&stub, Some("token"), Some(SITE)),
        get("/api/v1/products/prod-1/variants"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(variants["data"], product["data"]["products"]);
    assert_eq!(variants["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(variants["data"][1]["sku"], "PRINT-A3");
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let stub = StubUpstream::start().await;
    stub.on(
        Method::GET,
        "/1.0/commerce/sites/site-1/products/nope",
        404,
        json!({"type": "NOT_FOUND", "message": "Product not found"}),
    );
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");
    assert_eq!(
        body["error"]["message"],
        "Product not found: API error: NOT_FOUND - Product not found"
    );
}

#[tokio::test]
async fn upstream_failure_on_list_is_api_error() {
    let stub = StubUpstream::start().await;
    stub.on_raw(Method::GET, PRODUCTS_PATH, 502, "<html>Bad Gateway</html>");
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "api_error");
    assert_eq!(
        body["error"]["message"],
        "Failed to fetch products: API request failed with status 502"
    );
}

#[tokio::test]
async fn malformed_success_body_is_api_error() {
    let stub = StubUpstream::start().await;
    stub.on_raw(
        Method::GET,
        "/1.0/commerce/sites/site-1/products/prod-1",
        200,
        "not json",
    );
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products/prod-1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "api_error");
}

#[tokio::test]
async fn undecodable_product_id_is_invalid_parameter() {
    let stub = StubUpstream::start().await;
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products/%FF")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_parameter");
    assert!(body.get("data").is_none());
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn sparse_upstream_product_is_passed_through() {
    let stub = StubUpstream::start().await;
    stub.on(
        Method::GET,
        "/1.0/commerce/sites/site-1/products/p1",
        200,
        json!({"id": "p1", "products": []}),
    );
    let app = bridge_app(&stub, Some("token"), Some(SITE));

    let (status, body) = send(app, get("/api/v1/products/p1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "p1");
    assert_eq!(body["data"]["products"], json!([]));
}
