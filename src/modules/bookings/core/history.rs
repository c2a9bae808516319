use crate::modules::bookings::core::booking::{Booking, BookingId, BookingStatus};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::guest::{Guest, GuestId};
use crate::modules::bookings::core::room::{Room, RoomId};
use crate::shared::core::primitives::Amount;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type HistoryId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Created,
    Cancelled,
}

impl From<&BookingEvent> for HistoryAction {
    fn from(event: &BookingEvent) -> Self {
        match event {
            BookingEvent::BookingCreated(_) => HistoryAction::Created,
            BookingEvent::BookingCancelled(_) => HistoryAction::Cancelled,
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryAction::Created => f.write_str("created"),
            HistoryAction::Cancelled => f.write_str("cancelled"),
        }
    }
}

impl FromStr for HistoryAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(HistoryAction::Created),
            "cancelled" => Ok(HistoryAction::Cancelled),
            other => Err(format!("unknown history action: {other}")),
        }
    }
}

/// One immutable audit record of a booking lifecycle transition.
///
/// Guest and room fields are snapshots taken when the transition happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub history_id: HistoryId,
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub guest_name: String,
    pub room_id: RoomId,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_cost: Amount,
    pub booking_status: BookingStatus,
    pub action: HistoryAction,
    pub changed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Records `event` against the booking state it produced.
    pub fn record(
        history_id: HistoryId,
        event: &BookingEvent,
        booking: &Booking,
        guest: &Guest,
        room: &Room,
    ) -> Self {
        Self {
            history_id,
            booking_id: booking.booking_id,
            guest_id: guest.guest_id,
            guest_name: guest.full_name.clone(),
            room_id: room.room_id,
            room_number: room.room_number.clone(),
            check_in: booking.period.check_in(),
            check_out: booking.period.check_out(),
            total_cost: booking.total_cost,
            booking_status: booking.status,
            action: HistoryAction::from(event),
            changed_at: event.occurred_at(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryFilter {
    pub guest_name: Option<String>,
    pub action: Option<HistoryAction>,
}

impl HistoryFilter {
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        let name_matches = match self.guest_name.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => entry
                .guest_name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };
        name_matches && self.action.is_none_or(|action| entry.action == action)
    }
}
