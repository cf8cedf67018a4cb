//! GraphQL documents for the console billing API.
//!
//! Caller values are bound as variables; the documents themselves are
//! static text.

use graphql_client::GraphQLQuery;

// Must be defined in the same module where GraphQLQuery derive is used
// Note: This MUST match the GraphQL schema scalar name exactly
type Time = String;

// Project payment methods
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/project_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct AddProjectPaymentMethod;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/project_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct SetDefaultPaymentMethod;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/project_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct DeletePaymentMethod;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/project_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct FetchProjectPaymentMethods;

// User payment methods
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/user_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct AddUserPaymentMethod;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/user_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct FetchUserPaymentMethods;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/user_payment_methods.graphql",
    response_derives = "Debug, Clone"
)]
pub struct AttachUserPaymentMethod;
