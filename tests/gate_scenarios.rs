//! End-to-end pipeline scenarios.

mod common;

use axum_test::TestServer;
use edge_gate::policy::SECURITY_HEADERS;

/// 100 requests from one identity succeed inside the window; the 101st
/// is refused with the fixed retry hint, valid session or not.
#[tokio::test]
async fn test_scenario_authenticated_client_hits_rate_limit() {
    let (state, _clock) = common::test_state(common::authenticated());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    for i in 0..100 {
        let response = server
            .get("/dashboard")
            .add_header("x-forwarded-for", "1.2.3.4")
            .await;
        assert_eq!(response.status_code(), 200, "request {} should pass", i + 1);
    }

    let response = server
        .get("/dashboard")
        .add_header("x-forwarded-for", "1.2.3.4")
        .await;

    assert_eq!(response.status_code(), 429);
    assert_eq!(response.header("retry-after"), "900");
}

/// The home page serves anonymous traffic with the full header set.
#[tokio::test]
async fn test_scenario_home_page_anonymous() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    assert!(response.maybe_header("location").is_none());
    for (name, _) in SECURITY_HEADERS {
        assert!(response.maybe_header(name).is_some(), "missing {name}");
    }
}

/// An unauthenticated dashboard visit comes back after sign-in.
#[tokio::test]
async fn test_scenario_dashboard_redirects_to_sign_in() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server.get("/dashboard").add_header("host", "example.com").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "/auth/signin?callbackUrl=https%3A%2F%2Fexample.com%2Fdashboard"
    );
}

/// A plain form submission without the echoed token is refused.
#[tokio::test]
async fn test_scenario_form_post_denied() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server
        .post("/submit-form")
        .text("name=Ada")
        .content_type("application/x-www-form-urlencoded")
        .await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(response.text(), "Invalid CSRF Token");
}

/// Static chunks skip auth and CSRF but still count against the limiter
/// and carry headers.
#[tokio::test]
async fn test_scenario_static_chunk_passes() {
    let (state, _clock) = common::test_state(common::anonymous());
    let server = TestServer::new(common::gated_app(state)).unwrap();

    let response = server.get("/_next/static/chunk.js").await;

    assert_eq!(response.status_code(), 200);
    assert!(response.maybe_header("x-frame-options").is_some());

    // It still consumed one admission from the "unknown" bucket.
    for _ in 0..99 {
        server.get("/_next/static/chunk.js").await;
    }
    let response = server.get("/_next/static/chunk.js").await;
    assert_eq!(response.status_code(), 429);
}
