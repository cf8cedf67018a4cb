//! Satellite console billing API client.
//!
//! # Architecture
//!
//! - Uses `graphql-client` crate for type-safe GraphQL documents
//! - Caller values are bound as GraphQL variables, never spliced into text
//! - No caching, no retries: one call sends exactly one request
//! - GraphQL errors are returned as [`OperationResult::Failure`]; only
//!   transport failures surface as `Err`
//!
//! # Example
//!
//! ```rust,ignore
//! use satellite_billing_client::{ClientConfig, PaymentMethodsClient};
//! use satellite_billing_core::ProjectId;
//!
//! let config = ClientConfig::from_env()?;
//! let client = PaymentMethodsClient::from_config(&config)?;
//!
//! let result = client
//!     .fetch_project_payment_methods(&ProjectId::new("proj_1"))
//!     .await?;
//!
//! if result.is_success() {
//!     for card in result.data().into_iter().flatten() {
//!         println!("{} ending {}", card.brand, card.last_four);
//!     }
//! } else {
//!     eprintln!("{}", result.error_message());
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod payment_methods;
pub mod transport;

pub use config::{ClientConfig, ConfigError, GRAPHQL_PATH};
pub use error::{PaymentsError, TransportError};
pub use payment_methods::PaymentMethodsClient;
pub use satellite_billing_core::OperationResult;
pub use transport::{
    ErrorPolicy, FetchPolicy, GraphQLTransport, HttpTransport, OperationKind, RequestOptions,
};
