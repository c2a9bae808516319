use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::bookings::adapters::inbound::http::{error_response, unprocessable};
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::use_cases::register_guest::command::RegisterGuest;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterGuestBody {
    pub full_name: String,
    pub passport: String,
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterGuestResponse {
    pub guest_id: GuestId,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterGuestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    let command = RegisterGuest {
        guest_id: Uuid::now_v7(),
        full_name: body.full_name,
        passport: body.passport,
        phone: body.phone,
        requested_at: Utc::now(),
    };

    match state.register_guest_handler.handle(command).await {
        Ok(guest_id) => (
            StatusCode::CREATED,
            Json(RegisterGuestResponse { guest_id }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
