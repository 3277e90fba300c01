mod common;

use axum_test::{TestResponse, TestServer};
use edge_gate::policy::SECURITY_HEADERS;
use uuid::Uuid;

fn assert_security_headers(response: &TestResponse) {
    for (name, value) in SECURITY_HEADERS {
        let got = response.maybe_header(name);
        assert_eq!(
            got.as_ref().and_then(|v| v.to_str().ok()),
            Some(value),
            "header {name} missing or wrong"
        );
    }
}

fn assert_stamped(response: &TestResponse) {
    let id = response.header("x-request-id");
    id.to_str().unwrap().parse::<Uuid>().expect("x-request-id must be a UUID");

    let ts = response.header("x-timestamp");
    let ts = ts.to_str().unwrap();
    assert!(ts.ends_with('Z') && ts.contains('T'), "bad timestamp: {ts}");
}

#[tokio::test]
async fn test_pass_through_carries_headers_and_stamp() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    assert_security_headers(&response);
    assert_stamped(&response);
}

#[tokio::test]
async fn test_rate_limited_response_carries_headers_and_stamp() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    for _ in 0..100 {
        server.get("/").add_header("x-forwarded-for", "1.2.3.4").await;
    }
    let response = server.get("/").add_header("x-forwarded-for", "1.2.3.4").await;

    assert_eq!(response.status_code(), 429);
    assert_security_headers(&response);
    assert_stamped(&response);
}

#[tokio::test]
async fn test_redirect_carries_headers_and_stamp() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server.get("/dashboard").add_header("host", "example.com").await;

    assert_eq!(response.status_code(), 307);
    assert_security_headers(&response);
    assert_stamped(&response);
}

#[tokio::test]
async fn test_csrf_denial_carries_headers_and_stamp() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server
        .post("/submit-form")
        .text("field=value")
        .content_type("application/x-www-form-urlencoded")
        .await;

    assert_eq!(response.status_code(), 403);
    assert_security_headers(&response);
    assert_stamped(&response);
}

#[tokio::test]
async fn test_gateway_own_routes_are_gated_too() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);
    assert_security_headers(&response);
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let first = server.get("/").await.header("x-request-id");
    let second = server.get("/").await.header("x-request-id");

    assert_ne!(first, second);
}
