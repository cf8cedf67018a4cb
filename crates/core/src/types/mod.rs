//! Core types for satellite billing.
//!
//! This module provides type-safe wrappers for the values that flow between
//! callers and the console GraphQL API.

pub mod error;
pub mod id;
pub mod payment_method;
pub mod result;

pub use error::{GraphQLError, GraphQLErrorLocation};
pub use id::*;
pub use payment_method::PaymentMethod;
pub use result::OperationResult;
