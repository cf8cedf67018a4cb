//! Project payment method commands.
//!
//! # Usage
//!
//! ```bash
//! billing-cli project add -p <PROJECT_ID> -c <TOKEN> [--make-default]
//! billing-cli project set-default -p <PROJECT_ID> --payment <PAYMENT_ID>
//! billing-cli project delete -p <PROJECT_ID> --payment <PAYMENT_ID>
//! billing-cli project list -p <PROJECT_ID>
//! ```

use satellite_billing_client::{GraphQLTransport, PaymentMethodsClient};
use satellite_billing_core::{CardToken, PaymentMethodId, ProjectId};

use super::{CliError, report};
use crate::output::{OutputFormat, render_cards};

/// Add a card to a project.
pub async fn add<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    project: &str,
    card_token: &str,
    make_default: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    tracing::info!("Adding payment method to project {project}");
    let result = client
        .add_project_payment_method(
            &ProjectId::new(project),
            &CardToken::new(card_token),
            make_default,
        )
        .await?;
    report(&result, format, |()| {
        if make_default {
            format!("Payment method added to {project} and set as default")
        } else {
            format!("Payment method added to {project}")
        }
    })
}

/// Make a card the project's default.
pub async fn set_default<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    project: &str,
    payment: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let result = client
        .set_default_payment_method(&ProjectId::new(project), &PaymentMethodId::new(payment))
        .await?;
    report(&result, format, |()| {
        format!("{payment} is now the default payment method for {project}")
    })
}

/// Remove a card from a project.
pub async fn delete<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    project: &str,
    payment: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    tracing::info!("Deleting payment method {payment} from project {project}");
    let result = client
        .delete_payment_method(&PaymentMethodId::new(payment), &ProjectId::new(project))
        .await?;
    report(&result, format, |()| format!("Payment method {payment} deleted"))
}

/// List a project's cards.
pub async fn list<T: GraphQLTransport>(
    client: &PaymentMethodsClient<T>,
    project: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let result = client
        .fetch_project_payment_methods(&ProjectId::new(project))
        .await?;
    report(&result, format, |cards| render_cards(cards))
}
