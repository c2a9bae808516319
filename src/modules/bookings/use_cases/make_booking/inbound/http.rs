use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::bookings::adapters::inbound::http::{error_response, unprocessable};
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::make_booking::command::MakeBooking;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MakeBookingBody {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Deserialize)]
pub struct QuoteParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<MakeBookingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    let command = MakeBooking {
        booking_id: Uuid::now_v7(),
        guest_id: body.guest_id,
        room_id: body.room_id,
        check_in: body.check_in,
        check_out: body.check_out,
        requested_at: Utc::now(),
    };

    match state.make_booking_handler.handle(command).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn quote(
    State(state): State<AppState>,
    room_id: Result<Path<RoomId>, PathRejection>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> impl IntoResponse {
    let Path(room_id) = match room_id {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };
    match state
        .make_booking_handler
        .quote(room_id, params.check_in, params.check_out)
        .await
    {
        Ok(quote) => Json(quote).into_response(),
        Err(e) => error_response(e),
    }
}
