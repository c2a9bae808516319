use crate::modules::bookings::core::booking::{Booking, BookingState, BookingStatus};
use crate::modules::bookings::core::events::BookingEvent;

pub fn evolve(state: BookingState, event: &BookingEvent) -> BookingState {
    match (state, event) {
        (BookingState::None, BookingEvent::BookingCreated(e)) => BookingState::Booked(Booking {
            booking_id: e.booking_id,
            guest_id: e.guest_id,
            room_id: e.room_id,
            period: e.period,
            price_per_night: e.price_per_night,
            total_cost: e.total_cost,
            status: BookingStatus::Active,
            booked_at: e.occurred_at,
        }),
        (BookingState::Booked(booking), BookingEvent::BookingCancelled(e))
            if booking.booking_id == e.booking_id && booking.is_active() =>
        {
            BookingState::Booked(Booking {
                status: BookingStatus::Cancelled,
                ..booking
            })
        }
        (state, _) => state,
    }
}
