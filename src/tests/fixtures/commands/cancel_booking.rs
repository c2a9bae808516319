use crate::modules::bookings::core::booking::BookingId;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::tests::fixtures::catalog::fixed_now;

pub fn make_cancel_booking_command(booking_id: BookingId) -> CancelBooking {
    CancelBooking {
        booking_id,
        requested_at: fixed_now(),
    }
}
