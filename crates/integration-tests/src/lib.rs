//! Integration tests for the satellite billing client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p satellite-billing-integration-tests
//! ```
//!
//! Every test starts its own `httpmock` server standing in for the console
//! GraphQL endpoint, so no network access or credentials are needed.
//!
//! # Test Categories
//!
//! - `project_payment_methods` - Project-scoped operations over HTTP
//! - `user_payment_methods` - User-scoped operations over HTTP
//! - `http_transport` - Headers, status handling and transport failures

use httpmock::MockServer;
use satellite_billing_client::{ClientConfig, GRAPHQL_PATH, PaymentMethodsClient};

/// Token the mock console expects in the `Authorization` header.
pub const TEST_TOKEN: &str = "13Yqe3oHk8Ks9bPz7TmWcD2vRxL4";

/// Path the client posts to when given a bare base URL.
#[must_use]
pub fn graphql_path() -> String {
    format!("/{GRAPHQL_PATH}")
}

/// Configuration pointing at the mock server's base URL.
///
/// # Panics
///
/// Panics if the mock server URL cannot be parsed.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(&server.base_url())
        .unwrap()
        .with_api_token(TEST_TOKEN)
}

/// HTTP client pointing at the mock server.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn client_for(server: &MockServer) -> PaymentMethodsClient {
    PaymentMethodsClient::from_config(&config_for(server)).unwrap()
}
