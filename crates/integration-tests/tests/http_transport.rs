//! Integration tests for request headers, status handling and transport failures.
//!
//! Run with: cargo test -p satellite-billing-integration-tests

#![allow(clippy::unwrap_used)]

use graphql_client::{GraphQLQuery, Response};
use httpmock::prelude::*;
use satellite_billing_client::payment_methods::queries::{
    FetchUserPaymentMethods, fetch_user_payment_methods,
};
use satellite_billing_client::{
    ClientConfig, FetchPolicy, GraphQLTransport, HttpTransport, PaymentMethodsClient,
    PaymentsError, RequestOptions, TransportError,
};
use satellite_billing_core::{PaymentMethodId, ProjectId};
use satellite_billing_integration_tests::{TEST_TOKEN, client_for, config_for, graphql_path};
use serde_json::json;

fn has_header(req: &HttpMockRequest, name: &str) -> bool {
    req.headers
        .as_ref()
        .is_some_and(|headers| headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name)))
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_requests_carry_auth_and_no_cache_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(graphql_path())
                .header("authorization", format!("Bearer {TEST_TOKEN}"))
                .header("cache-control", "no-cache")
                .header("content-type", "application/json");
            then.status(200)
                .json_body(json!({ "data": { "userPaymentMethods": [] } }));
        })
        .await;

    let result = client_for(&server).fetch_user_payment_methods().await.unwrap();

    mock.assert_async().await;
    assert!(result.is_success());
}

#[tokio::test]
async fn test_user_agent_override_is_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(graphql_path())
                .header("user-agent", "billing-cli/test");
            then.status(200)
                .json_body(json!({ "data": { "userPaymentMethods": [] } }));
        })
        .await;

    let config = config_for(&server).with_user_agent("billing-cli/test");
    let client = PaymentMethodsClient::from_config(&config).unwrap();
    client.fetch_user_payment_methods().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_token_sends_no_authorization() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(graphql_path())
                .matches(|req| !has_header(req, "authorization"));
            then.status(200)
                .json_body(json!({ "data": { "userPaymentMethods": [] } }));
        })
        .await;

    let config = ClientConfig::new(&server.base_url()).unwrap();
    let client = PaymentMethodsClient::from_config(&config).unwrap();
    client.fetch_user_payment_methods().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_cache_first_sends_no_cache_directive_and_keeps_no_cache() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(graphql_path())
                .matches(|req| !has_header(req, "cache-control"));
            then.status(200)
                .json_body(json!({ "data": { "userPaymentMethods": [] } }));
        })
        .await;

    let transport = HttpTransport::new(&config_for(&server)).unwrap();
    let options = RequestOptions {
        fetch_policy: FetchPolicy::CacheFirst,
        ..RequestOptions::no_cache()
    };

    for _ in 0..2 {
        let body = FetchUserPaymentMethods::build_query(fetch_user_payment_methods::Variables);
        let response: Response<serde_json::Value> = transport.query(body, options).await.unwrap();
        assert!(response.data.is_some());
    }

    mock.assert_hits_async(2).await;
}

// ============================================================================
// Status handling
// ============================================================================

#[tokio::test]
async fn test_rate_limited_reports_retry_after() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(graphql_path());
            then.status(429).header("Retry-After", "30");
        })
        .await;

    let err = client_for(&server)
        .fetch_user_payment_methods()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PaymentsError::Transport(TransportError::RateLimited(30))
    ));
}

#[tokio::test]
async fn test_graphql_errors_on_client_error_status_are_normalized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(graphql_path());
            then.status(401).json_body(json!({
                "errors": [{ "message": "unauthorized" }]
            }));
        })
        .await;

    let result = client_for(&server)
        .delete_payment_method(&PaymentMethodId::new("pm_1"), &ProjectId::new("proj_1"))
        .await
        .unwrap();

    assert!(!result.is_success());
    assert_eq!(result.error_message(), "unauthorized");
}

#[tokio::test]
async fn test_server_error_without_graphql_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(graphql_path());
            then.status(502).body("upstream unavailable");
        })
        .await;

    let err = client_for(&server)
        .fetch_project_payment_methods(&ProjectId::new("proj_1"))
        .await
        .unwrap_err();

    match err {
        PaymentsError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(graphql_path());
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client_for(&server)
        .fetch_user_payment_methods()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PaymentsError::Transport(TransportError::Parse(_))
    ));
}

// ============================================================================
// Connection failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_endpoint_is_an_http_error() {
    let config = ClientConfig::new("http://127.0.0.1:1").unwrap();
    let client = PaymentMethodsClient::from_config(&config).unwrap();

    let err = client.fetch_user_payment_methods().await.unwrap_err();

    assert!(matches!(
        err,
        PaymentsError::Transport(TransportError::Http(_))
    ));
}
