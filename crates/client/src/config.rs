//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SATELLITE_CONSOLE_URL` - Console base URL or full GraphQL endpoint
//!
//! ## Optional
//! - `SATELLITE_API_TOKEN` - Bearer token for the console API
//! - `SATELLITE_USER_AGENT` - User-Agent header sent with every request

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Path of the console GraphQL endpoint, appended to bare base URLs.
pub const GRAPHQL_PATH: &str = "api/v0/graphql";

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.0;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Console API client configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Full GraphQL endpoint URL
    pub endpoint: Url,
    /// Bearer token for the console API
    pub api_token: Option<SecretString>,
    /// User-Agent header override
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given console URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL cannot be parsed.
    pub fn new(console_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: graphql_endpoint(console_url)?,
            api_token: None,
            user_agent: None,
        })
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::from(token.into()));
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API token looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let console_url = lookup("SATELLITE_CONSOLE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("SATELLITE_CONSOLE_URL".to_string()))?;

        let mut config = Self::new(&console_url)?;

        if let Some(token) = lookup("SATELLITE_API_TOKEN") {
            validate_secret_strength(&token, "SATELLITE_API_TOKEN")?;
            config.api_token = Some(SecretString::from(token));
        }

        config.user_agent = lookup("SATELLITE_USER_AGENT");

        Ok(config)
    }

    /// Expose the token for building request headers.
    pub(crate) fn api_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(ExposeSecret::expose_secret)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve the GraphQL endpoint from a base URL or a full endpoint URL.
fn graphql_endpoint(console_url: &str) -> Result<Url, ConfigError> {
    let invalid =
        |e: url::ParseError| ConfigError::InvalidEnvVar("SATELLITE_CONSOLE_URL".to_string(), e.to_string());

    let mut url = Url::parse(console_url).map_err(invalid)?;

    if url.path().trim_matches('/').is_empty() {
        url = url.join(GRAPHQL_PATH).map_err(invalid)?;
    }

    Ok(url)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq = std::collections::HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0_usize) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // Token length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Reject tokens that are obviously placeholders.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
