use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::bookings::use_cases::cancel_booking::inbound::graphql::CancelBookingMutation;
use crate::modules::bookings::use_cases::make_booking::inbound::graphql::{
    MakeBookingMutation, QuoteQuery,
};
use crate::modules::bookings::use_cases::register_guest::inbound::graphql::RegisterGuestMutation;
use crate::modules::bookings::use_cases::reporting::inbound::graphql::ReportingQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ReportingQuery, QuoteQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RegisterGuestMutation,
    MakeBookingMutation,
    CancelBookingMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
