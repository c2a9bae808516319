use crate::modules::bookings::core::booking::{BookingId, BookingStatus};
use crate::modules::bookings::core::room::RoomId;
use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a command is rejected. All of them are recoverable and meant to be
/// shown to the operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("room {room_id} is not available from {check_in} to {check_out}")]
    AvailabilityConflict {
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("booking {booking_id} is {status} and cannot be changed")]
    InvalidState {
        booking_id: BookingId,
        status: BookingStatus,
    },
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
