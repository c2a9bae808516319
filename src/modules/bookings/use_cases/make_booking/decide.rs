use crate::modules::bookings::adapters::outbound::ledger::RoomLedger;
use crate::modules::bookings::core::availability::find_conflict;
use crate::modules::bookings::core::decision::Decision;
use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::core::events::{BookingCreated, BookingEvent};
use crate::modules::bookings::core::guest::Guest;
use crate::modules::bookings::use_cases::make_booking::command::MakeBooking;
use crate::modules::bookings::use_cases::make_booking::quote::{StayQuote, validate_period};

pub fn decide_make_booking(
    guest: Option<&Guest>,
    room: Option<&RoomLedger>,
    command: MakeBooking,
) -> Decision {
    let period = match validate_period(command.check_in, command.check_out) {
        Ok(period) => period,
        Err(reason) => return Decision::Rejected { reason },
    };
    let Some(guest) = guest else {
        return Decision::Rejected {
            reason: DomainError::not_found("guest", command.guest_id),
        };
    };
    let Some(room) = room else {
        return Decision::Rejected {
            reason: DomainError::not_found("room", command.room_id),
        };
    };
    if find_conflict(&room.bookings, &period).is_some() {
        return Decision::Rejected {
            reason: DomainError::AvailabilityConflict {
                room_id: room.room.room_id,
                check_in: period.check_in(),
                check_out: period.check_out(),
            },
        };
    }

    let quote = match StayQuote::for_room(room, &period) {
        Ok(quote) => quote,
        Err(reason) => return Decision::Rejected { reason },
    };
    Decision::Accepted {
        events: vec![BookingEvent::BookingCreated(BookingCreated {
            booking_id: command.booking_id,
            guest_id: guest.guest_id,
            room_id: room.room.room_id,
            period,
            price_per_night: quote.price_per_night,
            total_cost: quote.total_cost,
            occurred_at: command.requested_at,
        })],
    }
}
