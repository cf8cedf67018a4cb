//! GraphQL transport abstraction.
//!
//! A transport sends one GraphQL request body and hands back the decoded
//! response, errors included. It never interprets GraphQL-level errors:
//! deciding what they mean is the caller's job. Only failures to get a
//! response at all surface as [`TransportError`].

mod http;

use std::future::Future;

use graphql_client::{QueryBody, Response};
use serde::{Serialize, de::DeserializeOwned};

pub use http::HttpTransport;

use crate::error::TransportError;

/// Whether cached responses are acceptable for a request.
///
/// [`HttpTransport`] keeps no response cache of its own: every request goes
/// to the network under either policy. The policy only decides which cache
/// directives are sent to intermediaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Send no cache directives; intermediaries may answer from their caches.
    CacheFirst,
    /// Send `Cache-Control: no-cache` so intermediaries revalidate.
    #[default]
    NoCache,
}

/// How the transport treats responses that carry GraphQL errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Discard any data that arrived alongside errors. The billing client
    /// never selects this.
    None,
    /// Return partial data together with every reported error.
    #[default]
    All,
}

/// Per-request transport options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestOptions {
    pub fetch_policy: FetchPolicy,
    pub error_policy: ErrorPolicy,
}

impl RequestOptions {
    /// Bypass caches and collect all errors. Used for every billing call.
    #[must_use]
    pub const fn no_cache() -> Self {
        Self {
            fetch_policy: FetchPolicy::NoCache,
            error_policy: ErrorPolicy::All,
        }
    }
}

/// Whether a request reads or changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// Executes GraphQL requests against a remote endpoint.
pub trait GraphQLTransport: Send + Sync {
    /// Execute a query document.
    fn query<V, T>(
        &self,
        body: QueryBody<V>,
        options: RequestOptions,
    ) -> impl Future<Output = Result<Response<T>, TransportError>> + Send
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned + Send;

    /// Execute a mutation document.
    fn mutate<V, T>(
        &self,
        body: QueryBody<V>,
        options: RequestOptions,
    ) -> impl Future<Output = Result<Response<T>, TransportError>> + Send
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned + Send;
}

/// Drop data that arrived alongside errors unless the policy keeps it.
pub(crate) fn apply_error_policy<T>(mut response: Response<T>, policy: ErrorPolicy) -> Response<T> {
    let has_errors = response.errors.as_ref().is_some_and(|e| !e.is_empty());
    if has_errors && policy == ErrorPolicy::None {
        response.data = None;
    }
    response
}
