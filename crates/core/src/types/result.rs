//! Uniform result wrapper for billing operations.
//!
//! Every operation either succeeds (carrying its payload, `()` for
//! mutations) or fails with the GraphQL errors the server reported. The
//! flat accessors (`is_success`, `error_message`, `data`) give callers the
//! familiar "success flag plus first error message" view.

use serde::Serialize;

use super::error::GraphQLError;

/// Outcome of a single billing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OperationResult<T> {
    /// The server reported no errors.
    Success { data: T },
    /// The server reported at least one error (or none were recorded yet).
    Failure { errors: Vec<GraphQLError> },
}

impl<T> Default for OperationResult<T> {
    fn default() -> Self {
        Self::Failure { errors: Vec::new() }
    }
}

impl<T> OperationResult<T> {
    /// Wrap a successful payload.
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Wrap the errors reported by the server.
    #[must_use]
    pub const fn failure(errors: Vec<GraphQLError>) -> Self {
        Self::Failure { errors }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Message of the first reported error, or `""` on success.
    #[must_use]
    pub fn error_message(&self) -> &str {
        match self {
            Self::Success { .. } => "",
            Self::Failure { errors } => errors.first().map_or("", |e| e.message.as_str()),
        }
    }

    /// All reported errors, in server order.
    #[must_use]
    pub fn errors(&self) -> &[GraphQLError] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors,
        }
    }

    /// The payload, if the operation succeeded.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Consume the result, returning the payload if the operation succeeded.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Map the successful payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            Self::Success { data } => OperationResult::Success { data: f(data) },
            Self::Failure { errors } => OperationResult::Failure { errors },
        }
    }

    /// Convert into a standard `Result`, keeping every reported error.
    ///
    /// # Errors
    ///
    /// Returns the reported GraphQL errors when the operation failed.
    pub fn into_result(self) -> Result<T, Vec<GraphQLError>> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { errors } => Err(errors),
        }
    }
}
