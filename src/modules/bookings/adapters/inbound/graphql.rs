use async_graphql::ErrorExtensions;

use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::use_cases::errors::ApplicationError;

fn code_of(error: &ApplicationError) -> &'static str {
    match error {
        ApplicationError::Domain(DomainError::Validation(_)) => "VALIDATION",
        ApplicationError::Domain(DomainError::NotFound { .. }) => "NOT_FOUND",
        ApplicationError::Domain(DomainError::AvailabilityConflict { .. }) => "CONFLICT",
        ApplicationError::Domain(DomainError::InvalidState { .. }) => "INVALID_STATE",
        ApplicationError::Contention { .. } => "CONTENTION",
        ApplicationError::Ledger(_) | ApplicationError::Unexpected(_) => "INTERNAL",
    }
}

/// GraphQL error carrying the message and a machine readable `code` extension.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = code_of(&error);
    async_graphql::Error::new(error.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub fn gql_query_error(error: anyhow::Error) -> async_graphql::Error {
    tracing::warn!(error = %error, "hotel query failed");
    async_graphql::Error::new(error.to_string()).extend_with(|_, ext| ext.set("code", "INTERNAL"))
}

pub fn gql_bad_input(message: impl Into<String>) -> async_graphql::Error {
    async_graphql::Error::new(message.into()).extend_with(|_, ext| ext.set("code", "VALIDATION"))
}
