use crate::modules::bookings::core::booking::BookingId;
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::room::RoomId;
use crate::shared::core::primitives::{Amount, StayPeriod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreated {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub period: StayPeriod,
    pub price_per_night: Amount,
    pub total_cost: Amount,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCancelled {
    pub booking_id: BookingId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BookingEvent {
    BookingCreated(BookingCreated),
    BookingCancelled(BookingCancelled),
}

impl BookingEvent {
    pub fn booking_id(&self) -> BookingId {
        match self {
            BookingEvent::BookingCreated(e) => e.booking_id,
            BookingEvent::BookingCancelled(e) => e.booking_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            BookingEvent::BookingCreated(e) => e.occurred_at,
            BookingEvent::BookingCancelled(e) => e.occurred_at,
        }
    }
}
