use axum::{
    extract::rejection::PathRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::bookings::adapters::inbound::http::{error_response, unprocessable};
use crate::modules::bookings::core::booking::BookingId;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    booking_id: Result<Path<BookingId>, PathRejection>,
) -> impl IntoResponse {
    let Path(booking_id) = match booking_id {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };

    let command = CancelBooking {
        booking_id,
        requested_at: Utc::now(),
    };

    match state.cancel_booking_handler.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
