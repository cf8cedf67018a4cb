//! User payment method commands.
//!
//! # Usage
//!
//! ```bash
//! billing-cli user add -c <TOKEN>
//! billing-cli user list
//! billing-cli user attach --payment <PAYMENT_ID> -p <PROJECT_ID>
//! ```

use satellite_billing_client::{GraphQLTransport, PaymentMethodsClient};
use satellite_billing_core::{CardToken, PaymentMethodId, ProjectId};

use super::{CliError, report};
use crate::output::{OutputFormat, render_cards};

/// Add a card to the user's account.
pub async fn add<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    card_token: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    tracing::info!("Adding payment method to account");
    let result = client
        .add_user_payment_method(&CardToken::new(card_token))
        .await?;
    report(&result, format, |()| "Payment method added".to_string())
}

/// List the user's cards.
pub async fn list<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let result = client.fetch_user_payment_methods().await?;
    report(&result, format, |cards| render_cards(cards))
}

/// Attach one of the user's cards to a project.
pub async fn attach<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    payment: &str,
    project: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    tracing::info!("Attaching payment method {payment} to project {project}");
    let result = client
        .attach_user_payment_method(&PaymentMethodId::new(payment), &ProjectId::new(project))
        .await?;
    report(&result, format, |()| {
        format!("Payment method {payment} attached to {project}")
    })
}
