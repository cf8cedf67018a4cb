//! Conversions from generated GraphQL response types to core types.

use satellite_billing_core::{GraphQLError, GraphQLErrorLocation, PaymentMethod, PaymentMethodId};

use super::queries::{fetch_project_payment_methods, fetch_user_payment_methods};

type ProjectCard =
    fetch_project_payment_methods::FetchProjectPaymentMethodsProjectPaymentMethods;
type UserCard = fetch_user_payment_methods::FetchUserPaymentMethodsUserPaymentMethods;

pub(super) fn convert_project_card(card: ProjectCard) -> PaymentMethod {
    PaymentMethod {
        id: PaymentMethodId::new(card.id),
        exp_year: card.exp_year,
        exp_month: card.exp_month,
        brand: card.brand,
        last_four: card.last_four,
        holder_name: card.holder_name,
        added_at: card.added_at,
        is_default: Some(card.is_default),
    }
}

pub(super) fn convert_user_card(card: UserCard) -> PaymentMethod {
    PaymentMethod {
        id: PaymentMethodId::new(card.id),
        exp_year: card.exp_year,
        exp_month: card.exp_month,
        brand: card.brand,
        last_four: card.last_four,
        holder_name: card.holder_name,
        added_at: card.added_at,
        is_default: None,
    }
}

pub(super) fn convert_error(error: graphql_client::Error) -> GraphQLError {
    GraphQLError {
        message: error.message,
        locations: error.locations.map_or_else(Vec::new, |locs| {
            locs.into_iter()
                .map(|l| GraphQLErrorLocation {
                    line: i64::from(l.line),
                    column: i64::from(l.column),
                })
                .collect()
        }),
        path: error.path.map_or_else(Vec::new, |p| {
            p.into_iter()
                .map(|fragment| match fragment {
                    graphql_client::PathFragment::Key(s) => serde_json::Value::String(s),
                    graphql_client::PathFragment::Index(i) => serde_json::Value::Number(i.into()),
                })
                .collect()
        }),
    }
}
