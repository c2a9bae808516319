use crate::modules::bookings::core::booking::{Booking, BookingId};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::guest::{Guest, GuestId};
use crate::modules::bookings::core::room::{Room, RoomId, RoomType};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("room {room_id} ledger moved: expected version {expected}, actual {actual}")]
    VersionMismatch {
        room_id: RoomId,
        expected: i64,
        actual: i64,
    },

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Everything a lifecycle decision needs about one room, read at `version`.
#[derive(Debug, Clone)]
pub struct RoomLedger {
    pub room: Room,
    pub room_type: RoomType,
    pub bookings: Vec<Booking>,
    pub version: i64,
}

impl RoomLedger {
    pub fn booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.booking_id == booking_id)
    }
}

#[async_trait]
pub trait GuestRegistry: Send + Sync {
    async fn insert_guest(&self, guest: Guest) -> Result<(), LedgerError>;
    async fn find_guest(&self, guest_id: GuestId) -> Result<Option<Guest>, LedgerError>;
}

#[async_trait]
pub trait BookingLedger: Send + Sync {
    async fn load_room(&self, room_id: RoomId) -> Result<Option<RoomLedger>, LedgerError>;

    async fn find_booking(&self, booking_id: BookingId) -> Result<Option<Booking>, LedgerError>;

    /// Applies `events` to the room's bookings and appends one history entry
    /// per event, all or nothing. Fails with `VersionMismatch` when the room
    /// ledger is no longer at `expected_version`.
    async fn commit(
        &self,
        room_id: RoomId,
        expected_version: i64,
        events: &[BookingEvent],
    ) -> Result<(), LedgerError>;
}
