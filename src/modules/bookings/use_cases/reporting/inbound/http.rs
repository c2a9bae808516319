use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Path, Query, State},
    response::IntoResponse,
    http::StatusCode,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::modules::bookings::adapters::inbound::http::{query_failed, unprocessable, with_message};
use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::history::HistoryFilter;
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::reporting::views::RoomStatus;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RoomsParams {
    pub status: Option<RoomStatus>,
}

#[derive(Deserialize)]
pub struct BookingsParams {
    pub status: Option<BookingStatus>,
}

/// Occupancy is judged against the hotel's local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn list_rooms(
    State(state): State<AppState>,
    params: Result<Query<RoomsParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.queries.list_rooms(today(), params.status).await {
        Ok(rooms) => Json(rooms).into_response(),
        Err(e) => query_failed(e),
    }
}

pub async fn room_schedule(
    State(state): State<AppState>,
    room_id: Result<Path<RoomId>, PathRejection>,
) -> impl IntoResponse {
    let Path(room_id) = match room_id {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.queries.room_schedule(room_id, today()).await {
        Ok(Some(bookings)) => Json(bookings).into_response(),
        Ok(None) => with_message(StatusCode::NOT_FOUND, format!("room {room_id} not found")),
        Err(e) => query_failed(e),
    }
}

pub async fn list_guests(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_guests().await {
        Ok(guests) => Json(guests).into_response(),
        Err(e) => query_failed(e),
    }
}

pub async fn list_bookings(
    State(state): State<AppState>,
    params: Result<Query<BookingsParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.queries.list_bookings(params.status).await {
        Ok(bookings) => Json(bookings).into_response(),
        Err(e) => query_failed(e),
    }
}

pub async fn list_history(
    State(state): State<AppState>,
    filter: Result<Query<HistoryFilter>, QueryRejection>,
) -> impl IntoResponse {
    let Query(filter) = match filter {
        Ok(f) => f,
        Err(rejection) => return unprocessable(rejection),
    };
    match state.queries.list_history(&filter).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => query_failed(e),
    }
}

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.dashboard(today()).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => query_failed(e),
    }
}
