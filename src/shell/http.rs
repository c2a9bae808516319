use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::bookings::use_cases::cancel_booking::inbound::http as cancel_http;
use crate::modules::bookings::use_cases::make_booking::inbound::http as booking_http;
use crate::modules::bookings::use_cases::register_guest::inbound::http as guest_http;
use crate::modules::bookings::use_cases::reporting::inbound::http as reporting_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/guests",
            post(guest_http::handle).get(reporting_http::list_guests),
        )
        .route("/rooms", get(reporting_http::list_rooms))
        .route("/rooms/{room_id}/schedule", get(reporting_http::room_schedule))
        .route("/rooms/{room_id}/quote", get(booking_http::quote))
        .route(
            "/bookings",
            post(booking_http::handle).get(reporting_http::list_bookings),
        )
        .route("/bookings/{booking_id}/cancel", post(cancel_http::handle))
        .route("/history", get(reporting_http::list_history))
        .route("/dashboard", get(reporting_http::dashboard))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with request tracing.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
