use crate::modules::bookings::core::booking::BookingState;
use crate::modules::bookings::core::decision::Decision;
use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::core::events::{BookingCancelled, BookingEvent};
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;

/// Only an active booking can be cancelled; cancelling twice is an error.
pub fn decide_cancel_booking(state: &BookingState, command: CancelBooking) -> Decision {
    match state {
        BookingState::None => Decision::Rejected {
            reason: DomainError::not_found("booking", command.booking_id),
        },
        BookingState::Booked(booking) if !booking.is_active() => Decision::Rejected {
            reason: DomainError::InvalidState {
                booking_id: booking.booking_id,
                status: booking.status,
            },
        },
        BookingState::Booked(booking) => Decision::Accepted {
            events: vec![BookingEvent::BookingCancelled(BookingCancelled {
                booking_id: booking.booking_id,
                occurred_at: command.requested_at,
            })],
        },
    }
}
