use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::room::RoomId;
use crate::shared::core::primitives::{Amount, StayPeriod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type BookingId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Active => f.write_str("active"),
            BookingStatus::Cancelled => f.write_str("cancelled"),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BookingStatus::Active),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status: {other}")),
        }
    }
}

/// A reservation of one room by one guest.
///
/// `price_per_night` is the rate captured when the booking was made, so
/// `total_cost` never drifts when the catalog price changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub period: StayPeriod,
    pub price_per_night: Amount,
    pub total_cost: Amount,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }
}

/// Lifecycle state of a single booking, folded from its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingState {
    None,
    Booked(Booking),
}

impl From<Option<Booking>> for BookingState {
    fn from(booking: Option<Booking>) -> Self {
        booking.map_or(BookingState::None, BookingState::Booked)
    }
}
