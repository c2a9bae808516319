use crate::modules::bookings::core::booking::BookingId;
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::room::RoomId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeBooking {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub requested_at: DateTime<Utc>,
}
