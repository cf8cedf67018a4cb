//! Error types for the billing client.
//!
//! GraphQL-level errors are not represented here: they are normalized into
//! [`OperationResult::Failure`](satellite_billing_core::OperationResult).
//! These types cover everything that prevents a response from being read.

use thiserror::Error;

/// Errors raised by a [`GraphQLTransport`](crate::transport::GraphQLTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status and no GraphQL errors.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Rate limited by the console.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Response body was not a GraphQL response of the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors returned by [`PaymentMethodsClient`](crate::PaymentMethodsClient) operations.
#[derive(Debug, Error)]
pub enum PaymentsError {
    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A read succeeded without errors but the payload was absent.
    #[error("Response has no data at {0}")]
    MissingData(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_error() {
        let err = TransportError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream down");
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err = PaymentsError::from(TransportError::RateLimited(5));
        assert_eq!(err.to_string(), "Rate limited, retry after 5 seconds");
    }

    #[test]
    fn test_missing_data_display() {
        let err = PaymentsError::MissingData("project.paymentMethods");
        assert_eq!(
            err.to_string(),
            "Response has no data at project.paymentMethods"
        );
    }
}
