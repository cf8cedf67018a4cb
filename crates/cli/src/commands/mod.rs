//! Command implementations.
//!
//! Each command sends one request and reports the outcome. GraphQL errors
//! are printed (JSON mode) and turned into [`CliError::Operation`] so the
//! process exits non-zero.

pub mod project;
pub mod user;

use satellite_billing_client::{ConfigError, PaymentsError, TransportError};
use satellite_billing_core::OperationResult;
use serde::Serialize;
use thiserror::Error;

use crate::output::{self, OutputFormat};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Connection settings are missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be built.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request could not be completed.
    #[error("Request failed: {0}")]
    Payments(#[from] PaymentsError),

    /// The console rejected the operation.
    #[error("{0}")]
    Operation(String),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print the outcome and map a failed operation to an error.
fn report<T: Serialize>(
    result: &OperationResult<T>,
    format: OutputFormat,
    render: impl FnOnce(&T) -> String,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => output::print(&serde_json::to_string_pretty(result)?),
        OutputFormat::Table => {
            if let Some(data) = result.data() {
                output::print(&render(data));
            }
        }
    }

    if result.is_success() {
        Ok(())
    } else {
        Err(CliError::Operation(result.error_message().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use satellite_billing_core::GraphQLError;

    use super::*;

    #[test]
    fn test_report_success() {
        let result = OperationResult::success(());
        assert!(report(&result, OutputFormat::Table, |()| String::new()).is_ok());
    }

    #[test]
    fn test_report_failure_carries_first_message() {
        let result: OperationResult<()> = OperationResult::failure(vec![
            GraphQLError::new("card declined"),
            GraphQLError::new("ignored"),
        ]);
        let err = report(&result, OutputFormat::Table, |()| String::new());
        assert!(matches!(err, Err(CliError::Operation(ref m)) if m == "card declined"));
    }
}
