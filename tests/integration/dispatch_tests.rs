//! Dispatch and credential tests
//!
//! Single-call behavior of the client: success parsing, failure shapes, and
//! token verification headers.

use geoscraper_rs::{ApiResponse, DispatchFailure, build_request, resolve_item};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_dispatch_parses_object_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reviews": []})))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let item = resolve_item(0, &common::review("0x123:0x456")).unwrap();
    let spec = build_request(&item, client.config()).unwrap();

    let response = client.dispatch(&spec, &common::credentials()).await.unwrap();
    assert_eq!(response, ApiResponse::One(json!({"reviews": []})));
}

#[tokio::test]
async fn test_dispatch_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let item = resolve_item(0, &common::map_search("hotels")).unwrap();
    let spec = build_request(&item, client.config()).unwrap();

    let failure = client
        .dispatch(&spec, &common::credentials())
        .await
        .unwrap_err();

    let DispatchFailure::Http { status, body } = failure else {
        panic!("expected HTTP failure");
    };
    assert_eq!(status, 503);
    assert_eq!(body, "overloaded");
}

#[tokio::test]
async fn test_dispatch_rejects_non_json_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let item = resolve_item(0, &common::map_search("hotels")).unwrap();
    let spec = build_request(&item, client.config()).unwrap();

    let failure = client
        .dispatch(&spec, &common::credentials())
        .await
        .unwrap_err();
    assert!(matches!(failure, DispatchFailure::Network { .. }));
}

#[tokio::test]
async fn test_verify_token_sends_both_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-api-key"))
        .and(header("X-Berserker-Token", common::TEST_TOKEN))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    client.verify_token(&common::credentials()).await.unwrap();
}

#[tokio::test]
async fn test_verify_token_rejects_bad_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test-api-key"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = common::client_for(&server);
    let err = client
        .verify_token(&common::credentials())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));
}
