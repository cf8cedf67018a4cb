//! Satellite billing CLI - manage payment methods from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the cards attached to a project
//! billing-cli project list --project <PROJECT_ID>
//!
//! # Add a card to a project and make it the default
//! billing-cli project add --project <PROJECT_ID> --card-token <TOKEN> --make-default
//!
//! # List the signed-in user's cards as JSON
//! billing-cli --json user list
//!
//! # Attach one of the user's cards to a project
//! billing-cli user attach --payment <PAYMENT_ID> --project <PROJECT_ID>
//! ```
//!
//! # Commands
//!
//! - `project add|set-default|delete|list` - Project payment methods
//! - `user add|list|attach` - User payment methods
//!
//! Connection settings come from `SATELLITE_CONSOLE_URL`,
//! `SATELLITE_API_TOKEN` and `SATELLITE_USER_AGENT` (or a `.env` file), and
//! can be overridden with flags.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use satellite_billing_client::{ClientConfig, PaymentMethodsClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::CliError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "billing-cli")]
#[command(author, version, about = "Satellite console payment method tools")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Console base URL or GraphQL endpoint
    #[arg(long, env = "SATELLITE_CONSOLE_URL", global = true)]
    console_url: Option<String>,

    /// Bearer token for the console API
    #[arg(long, env = "SATELLITE_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long, env = "SATELLITE_USER_AGENT", global = true)]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage a project's payment methods
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Manage the signed-in user's payment methods
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// Add a card to a project
    Add {
        /// Project ID
        #[arg(short, long)]
        project: String,

        /// Card token from the payment processor
        #[arg(short, long)]
        card_token: String,

        /// Make the new card the project's default
        #[arg(long)]
        make_default: bool,
    },
    /// Make a card the project's default
    SetDefault {
        /// Project ID
        #[arg(short, long)]
        project: String,

        /// Payment method ID
        #[arg(long)]
        payment: String,
    },
    /// Remove a card from a project
    Delete {
        /// Project ID
        #[arg(short, long)]
        project: String,

        /// Payment method ID
        #[arg(long)]
        payment: String,
    },
    /// List a project's cards
    List {
        /// Project ID
        #[arg(short, long)]
        project: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Add a card to the user's account
    Add {
        /// Card token from the payment processor
        #[arg(short, long)]
        card_token: String,
    },
    /// List the user's cards
    List,
    /// Attach one of the user's cards to a project
    Attach {
        /// Payment method ID
        #[arg(long)]
        payment: String,

        /// Project ID
        #[arg(short, long)]
        project: String,
    },
}

impl ConnectionArgs {
    /// Build the client configuration, flags taking precedence over env.
    fn config(&self) -> Result<ClientConfig, CliError> {
        let config = ClientConfig::from_lookup(|key| match key {
            "SATELLITE_CONSOLE_URL" => self.console_url.clone(),
            "SATELLITE_API_TOKEN" => self.api_token.clone(),
            "SATELLITE_USER_AGENT" => self.user_agent.clone(),
            _ => None,
        })?;
        Ok(config)
    }
}

/// Initialize tracing with an `EnvFilter`, defaulting to info for our crates.
fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "billing_cli=debug,satellite_billing=debug,info"
    } else {
        "billing_cli=info,satellite_billing=info,warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so clap's env fallbacks can see it
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let config = cli.connection.config()?;
    tracing::debug!(endpoint = %config.endpoint, "Using console endpoint");
    let client = PaymentMethodsClient::from_config(&config)?;

    match cli.command {
        Commands::Project { action } => match action {
            ProjectAction::Add {
                project,
                card_token,
                make_default,
            } => {
                commands::project::add(&client, &project, &card_token, make_default, format)
                    .await?;
            }
            ProjectAction::SetDefault { project, payment } => {
                commands::project::set_default(&client, &project, &payment, format).await?;
            }
            ProjectAction::Delete { project, payment } => {
                commands::project::delete(&client, &project, &payment, format).await?;
            }
            ProjectAction::List { project } => {
                commands::project::list(&client, &project, format).await?;
            }
        },
        Commands::User { action } => match action {
            UserAction::Add { card_token } => {
                commands::user::add(&client, &card_token, format).await?;
            }
            UserAction::List => commands::user::list(&client, format).await?,
            UserAction::Attach { payment, project } => {
                commands::user::attach(&client, &payment, &project, format).await?;
            }
        },
    }
    Ok(())
}
