// Shared test fixture for the MakeBooking command: room 101, three nights from 2024-06-01.

use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::make_booking::command::MakeBooking;
use crate::tests::fixtures::catalog::{date, fixed_now};
use uuid::Uuid;

pub struct MakeBookingBuilder {
    inner: MakeBooking,
}

impl Default for MakeBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MakeBookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: MakeBooking {
                booking_id: Uuid::now_v7(),
                guest_id: Uuid::now_v7(),
                room_id: 101,
                check_in: date("2024-06-01"),
                check_out: date("2024-06-04"),
                requested_at: fixed_now(),
            },
        }
    }

    pub fn guest_id(mut self, v: GuestId) -> Self {
        self.inner.guest_id = v;
        self
    }

    pub fn room_id(mut self, v: RoomId) -> Self {
        self.inner.room_id = v;
        self
    }

    /// Dates as `YYYY-MM-DD`.
    pub fn stay(mut self, check_in: &str, check_out: &str) -> Self {
        self.inner.check_in = date(check_in);
        self.inner.check_out = date(check_out);
        self
    }

    pub fn build(self) -> MakeBooking {
        self.inner
    }
}
