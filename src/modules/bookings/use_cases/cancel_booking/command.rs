use crate::modules::bookings::core::booking::BookingId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub requested_at: DateTime<Utc>,
}
