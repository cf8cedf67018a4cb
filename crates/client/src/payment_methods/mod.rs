//! Payment method operations for projects and users.
//!
//! Every operation sends exactly one request with [`RequestOptions::no_cache`]
//! and normalizes the reply: GraphQL errors become
//! [`OperationResult::Failure`], anything else is a success. Reads carry the
//! listed cards; mutations carry `()`.

mod conversions;
pub mod queries;

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use satellite_billing_core::{CardToken, OperationResult, PaymentMethod, PaymentMethodId, ProjectId};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{PaymentsError, TransportError};
use crate::transport::{GraphQLTransport, HttpTransport, OperationKind, RequestOptions};

use conversions::{convert_error, convert_project_card, convert_user_card};
use queries::{
    AddProjectPaymentMethod, AddUserPaymentMethod, AttachUserPaymentMethod, DeletePaymentMethod,
    FetchProjectPaymentMethods, FetchUserPaymentMethods, SetDefaultPaymentMethod,
    add_project_payment_method, add_user_payment_method, attach_user_payment_method,
    delete_payment_method, fetch_project_payment_methods, fetch_user_payment_methods,
    set_default_payment_method,
};

// =============================================================================
// PaymentMethodsClient
// =============================================================================

/// Client for the console billing API.
///
/// Stateless apart from the shared transport; clones are cheap and calls
/// are independent of each other.
pub struct PaymentMethodsClient<T = HttpTransport> {
    inner: Arc<T>,
}

impl<T> Clone for PaymentMethodsClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl PaymentMethodsClient<HttpTransport> {
    /// Create a client that talks HTTP to the configured console.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: GraphQLTransport> PaymentMethodsClient<T> {
    /// Create a client over the given transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            inner: Arc::new(transport),
        }
    }

    /// The transport requests are sent through.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.inner
    }

    /// Send one request and normalize the reply.
    ///
    /// The reply is decoded untyped first so reported errors win even when
    /// the partial data alongside them does not fit the document's shape.
    /// `extract` only runs when the server reported no errors.
    async fn execute<Q, R>(
        &self,
        kind: OperationKind,
        variables: Q::Variables,
        extract: impl FnOnce(Option<Q::ResponseData>) -> Result<R, PaymentsError> + Send,
    ) -> Result<OperationResult<R>, PaymentsError>
    where
        Q: GraphQLQuery,
        Q::Variables: Send + Sync,
        Q::ResponseData: Send,
    {
        let body = Q::build_query(variables);
        let options = RequestOptions::no_cache();

        let response = match kind {
            OperationKind::Query => self.inner.query::<_, Value>(body, options).await?,
            OperationKind::Mutation => self.inner.mutate::<_, Value>(body, options).await?,
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Ok(OperationResult::failure(
                errors.into_iter().map(convert_error).collect(),
            ));
        }

        let data = response
            .data
            .map(serde_json::from_value::<Q::ResponseData>)
            .transpose()
            .map_err(|e| {
                tracing::error!(error = %e, "Response data does not match the document");
                TransportError::Parse(e)
            })?;

        extract(data).map(OperationResult::success)
    }

    // =========================================================================
    // Project Methods
    // =========================================================================

    /// Add a card to a project, optionally making it the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed. GraphQL
    /// errors are reported through the returned [`OperationResult`].
    #[instrument(skip_all, fields(project_id = %project_id, make_default = make_default))]
    pub async fn add_project_payment_method(
        &self,
        project_id: &ProjectId,
        card_token: &CardToken,
        make_default: bool,
    ) -> Result<OperationResult<()>, PaymentsError> {
        let variables = add_project_payment_method::Variables {
            project_id: project_id.to_string(),
            card_token: card_token.as_str().to_owned(),
            is_default: make_default,
        };

        self.execute::<AddProjectPaymentMethod, _>(OperationKind::Mutation, variables, |_| Ok(()))
            .await
    }

    /// Make a card the project's default payment method.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip_all, fields(project_id = %project_id, payment_id = %payment_id))]
    pub async fn set_default_payment_method(
        &self,
        project_id: &ProjectId,
        payment_id: &PaymentMethodId,
    ) -> Result<OperationResult<()>, PaymentsError> {
        let variables = set_default_payment_method::Variables {
            project_id: project_id.to_string(),
            id: payment_id.to_string(),
        };

        self.execute::<SetDefaultPaymentMethod, _>(OperationKind::Mutation, variables, |_| Ok(()))
            .await
    }

    /// Remove a card from a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip_all, fields(payment_id = %payment_id, project_id = %project_id))]
    pub async fn delete_payment_method(
        &self,
        payment_id: &PaymentMethodId,
        project_id: &ProjectId,
    ) -> Result<OperationResult<()>, PaymentsError> {
        let variables = delete_payment_method::Variables {
            id: payment_id.to_string(),
            project_id: project_id.to_string(),
        };

        self.execute::<DeletePaymentMethod, _>(OperationKind::Mutation, variables, |_| Ok(()))
            .await
    }

    /// List the cards attached to a project, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed, or if the
    /// server reported no errors but sent no `project.paymentMethods`.
    #[instrument(skip_all, fields(project_id = %project_id))]
    pub async fn fetch_project_payment_methods(
        &self,
        project_id: &ProjectId,
    ) -> Result<OperationResult<Vec<PaymentMethod>>, PaymentsError> {
        let variables = fetch_project_payment_methods::Variables {
            project_id: project_id.to_string(),
        };

        self.execute::<FetchProjectPaymentMethods, _>(OperationKind::Query, variables, |data| {
            data.and_then(|d| d.project)
                .and_then(|p| p.payment_methods)
                .map(|cards| cards.into_iter().map(convert_project_card).collect())
                .ok_or(PaymentsError::MissingData("project.paymentMethods"))
        })
        .await
    }

    // =========================================================================
    // User Methods
    // =========================================================================

    /// Add a card to the signed-in user's account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip_all)]
    pub async fn add_user_payment_method(
        &self,
        card_token: &CardToken,
    ) -> Result<OperationResult<()>, PaymentsError> {
        let variables = add_user_payment_method::Variables {
            card_token: card_token.as_str().to_owned(),
        };

        self.execute::<AddUserPaymentMethod, _>(OperationKind::Mutation, variables, |_| Ok(()))
            .await
    }

    /// List the signed-in user's cards, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed, or if the
    /// server reported no errors but sent no `userPaymentMethods`.
    #[instrument(skip_all)]
    pub async fn fetch_user_payment_methods(
        &self,
    ) -> Result<OperationResult<Vec<PaymentMethod>>, PaymentsError> {
        self.execute::<FetchUserPaymentMethods, _>(
            OperationKind::Query,
            fetch_user_payment_methods::Variables,
            |data| {
                data.and_then(|d| d.user_payment_methods)
                    .map(|cards| cards.into_iter().map(convert_user_card).collect())
                    .ok_or(PaymentsError::MissingData("userPaymentMethods"))
            },
        )
        .await
    }

    /// Attach one of the user's cards to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    #[instrument(skip_all, fields(payment_method_id = %payment_method_id, project_id = %project_id))]
    pub async fn attach_user_payment_method(
        &self,
        payment_method_id: &PaymentMethodId,
        project_id: &ProjectId,
    ) -> Result<OperationResult<()>, PaymentsError> {
        let variables = attach_user_payment_method::Variables {
            project_id: project_id.to_string(),
            id: payment_method_id.to_string(),
        };

        self.execute::<AttachUserPaymentMethod, _>(OperationKind::Mutation, variables, |_| Ok(()))
            .await
    }
}
