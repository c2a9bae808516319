// Builder for booking records. `total_cost` always follows from the period
// and the nightly rate, the way the ledger computes it.

use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::room::RoomId;
use crate::shared::core::primitives::{Amount, StayPeriod};
use crate::tests::fixtures::catalog::{fixed_now, stay};
use uuid::Uuid;

pub struct BookingBuilder {
    guest_id: GuestId,
    room_id: RoomId,
    period: StayPeriod,
    price_per_night: Amount,
    status: BookingStatus,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingBuilder {
    pub fn new() -> Self {
        Self {
            guest_id: Uuid::now_v7(),
            room_id: 101,
            period: stay("2024-06-01", "2024-06-04"),
            price_per_night: 2000,
            status: BookingStatus::Active,
        }
    }

    pub fn guest_id(mut self, v: GuestId) -> Self {
        self.guest_id = v;
        self
    }

    pub fn room_id(mut self, v: RoomId) -> Self {
        self.room_id = v;
        self
    }

    pub fn period(mut self, v: StayPeriod) -> Self {
        self.period = v;
        self
    }

    pub fn price_per_night(mut self, v: Amount) -> Self {
        self.price_per_night = v;
        self
    }

    pub fn status(mut self, v: BookingStatus) -> Self {
        self.status = v;
        self
    }

    pub fn build(self) -> Booking {
        Booking {
            booking_id: Uuid::now_v7(),
            guest_id: self.guest_id,
            room_id: self.room_id,
            period: self.period,
            price_per_night: self.price_per_night,
            total_cost: self.period.cost(self.price_per_night).unwrap(),
            status: self.status,
            booked_at: fixed_now(),
        }
    }
}
