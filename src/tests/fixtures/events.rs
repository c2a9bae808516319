use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::events::{BookingCancelled, BookingCreated, BookingEvent};
use crate::tests::fixtures::bookings::BookingBuilder;

/// Canonical creation event for tests.
pub fn make_booking_created_event() -> BookingCreated {
    let booking = BookingBuilder::new().build();
    BookingCreated {
        booking_id: booking.booking_id,
        guest_id: booking.guest_id,
        room_id: booking.room_id,
        period: booking.period,
        price_per_night: booking.price_per_night,
        total_cost: booking.total_cost,
        occurred_at: booking.booked_at,
    }
}

pub fn created_from(booking: &Booking) -> BookingEvent {
    BookingEvent::BookingCreated(BookingCreated {
        booking_id: booking.booking_id,
        guest_id: booking.guest_id,
        room_id: booking.room_id,
        period: booking.period,
        price_per_night: booking.price_per_night,
        total_cost: booking.total_cost,
        occurred_at: booking.booked_at,
    })
}

pub fn cancelled_from(booking: &Booking) -> BookingEvent {
    BookingEvent::BookingCancelled(BookingCancelled {
        booking_id: booking.booking_id,
        occurred_at: booking.booked_at,
    })
}
