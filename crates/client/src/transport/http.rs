//! HTTP transport for the console GraphQL endpoint.
//!
//! Uses `reqwest` 0.13 directly; `graphql_client` only supplies the typed
//! request bodies and the response envelope.

use std::sync::Arc;

use graphql_client::{QueryBody, Response};
use reqwest::StatusCode;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use url::Url;

use super::{
    FetchPolicy, GraphQLTransport, OperationKind, RequestOptions, apply_error_policy,
};
use crate::config::ClientConfig;
use crate::error::TransportError;

/// Transport that POSTs GraphQL requests as JSON.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<HttpTransportInner>,
}

struct HttpTransportInner {
    client: reqwest::Client,
    endpoint: Url,
    api_token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self {
            inner: Arc::new(HttpTransportInner {
                client: builder.build()?,
                endpoint: config.endpoint.clone(),
                api_token: config.api_token().map(str::to_owned),
            }),
        })
    }

    /// The GraphQL endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    #[instrument(
        skip_all,
        fields(kind = %kind, operation = body.operation_name)
    )]
    async fn send<V, T>(
        &self,
        kind: OperationKind,
        body: QueryBody<V>,
        options: RequestOptions,
    ) -> Result<Response<T>, TransportError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let mut request = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&body);

        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token);
        }

        if options.fetch_policy == FetchPolicy::NoCache {
            request = request.header(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        }

        let response = request.send().await?;
        let status = response.status();

        // Check for rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(TransportError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            // The console reports validation and auth failures as GraphQL
            // errors on 4xx responses; those still normalize like any other.
            if let Ok(parsed) = serde_json::from_str::<Response<T>>(&response_text)
                && parsed.errors.as_ref().is_some_and(|e| !e.is_empty())
            {
                debug!(status = %status, "GraphQL errors on non-success status");
                return Ok(apply_error_policy(parsed, options.error_policy));
            }

            tracing::error!(
                status = %status,
                body = %truncate(&response_text, 500),
                "Console API returned non-success status"
            );
            return Err(TransportError::Status {
                status,
                body: truncate(&response_text, 200),
            });
        }

        let parsed: Response<T> = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&response_text, 500),
                "Failed to parse console GraphQL response"
            );
            TransportError::Parse(e)
        })?;

        Ok(apply_error_policy(parsed, options.error_policy))
    }
}

impl GraphQLTransport for HttpTransport {
    async fn query<V, T>(
        &self,
        body: QueryBody<V>,
        options: RequestOptions,
    ) -> Result<Response<T>, TransportError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        self.send(OperationKind::Query, body, options).await
    }

    async fn mutate<V, T>(
        &self,
        body: QueryBody<V>,
        options: RequestOptions,
    ) -> Result<Response<T>, TransportError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        self.send(OperationKind::Mutation, body, options).await
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
