// In memory guest registry, booking ledger and hotel queries.
//
// Purpose
// - Run the dashboard and the use case tests without a database.
//
// Responsibilities
// - Keep the room catalog, guests, bookings and the history log in one table set.
// - Version each room's ledger and refuse commits made against a stale version.
// - Apply booking events and their history entries under one write lock, or nothing at all.

use crate::modules::bookings::adapters::outbound::ledger::{
    BookingLedger, GuestRegistry, LedgerError, RoomLedger,
};
use crate::modules::bookings::core::availability::find_conflict;
use crate::modules::bookings::core::booking::{Booking, BookingId, BookingState, BookingStatus};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::evolve::evolve;
use crate::modules::bookings::core::guest::{Guest, GuestId};
use crate::modules::bookings::core::history::{HistoryEntry, HistoryFilter, HistoryId};
use crate::modules::bookings::core::room::{
    CatalogError, Room, RoomCatalog, RoomId, RoomType, RoomTypeId,
};
use crate::modules::bookings::use_cases::reporting::projection::HotelSnapshot;
use crate::modules::bookings::use_cases::reporting::queries_port::HotelQueries;
use crate::modules::bookings::use_cases::reporting::views::{
    BookingView, Dashboard, HistoryReport, RoomStatus, RoomStatusView,
};
use crate::shared::core::primitives::Amount;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    room_types: Vec<RoomType>,
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    bookings: Vec<Booking>,
    history: Vec<HistoryEntry>,
    room_versions: HashMap<RoomId, i64>,
}

impl Tables {
    fn snapshot(&self) -> HotelSnapshot<'_> {
        HotelSnapshot {
            room_types: &self.room_types,
            rooms: &self.rooms,
            guests: &self.guests,
            bookings: &self.bookings,
            history: &self.history,
        }
    }

    fn version(&self, room_id: RoomId) -> i64 {
        self.room_versions.get(&room_id).copied().unwrap_or(0)
    }

    fn booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.booking_id == booking_id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryHotel {
    tables: RwLock<Tables>,
    commit_delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryHotel {
    pub fn with_catalog(catalog: RoomCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        let mut rooms = catalog.rooms;
        rooms.sort_by_key(|r| r.room_id);
        Ok(Self {
            tables: RwLock::new(Tables {
                room_types: catalog.room_types,
                rooms,
                ..Tables::default()
            }),
            ..Self::default()
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds every commit back before it takes the write lock.
    pub fn set_commit_delay_ms(&self, delay_ms: u64) {
        self.commit_delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Reprices a room type. Existing bookings keep the rate they were made at.
    pub async fn set_price_per_night(
        &self,
        type_id: RoomTypeId,
        price_per_night: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_online()?;
        if price_per_night <= 0 {
            return Err(LedgerError::Constraint(format!(
                "price per night must be positive, got {price_per_night}"
            )));
        }
        let mut tables = self.tables.write().await;
        let room_type = tables
            .room_types
            .iter_mut()
            .find(|t| t.type_id == type_id)
            .ok_or_else(|| LedgerError::Constraint(format!("room type {type_id} does not exist")))?;
        room_type.price_per_night = price_per_night;
        // Decisions priced at the old rate must not commit.
        let repriced: Vec<RoomId> = tables
            .rooms
            .iter()
            .filter(|r| r.type_id == type_id)
            .map(|r| r.room_id)
            .collect();
        for room_id in repriced {
            *tables.room_versions.entry(room_id).or_insert(0) += 1;
        }
        Ok(())
    }

    fn ensure_online(&self) -> Result<(), LedgerError> {
        if self.is_offline {
            return Err(LedgerError::Backend("Booking ledger offline".into()));
        }
        Ok(())
    }

    fn ensure_queries_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Hotel queries offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GuestRegistry for InMemoryHotel {
    async fn insert_guest(&self, guest: Guest) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.guests.iter().any(|g| g.guest_id == guest.guest_id) {
            return Err(LedgerError::Constraint(format!(
                "guest {} already exists",
                guest.guest_id
            )));
        }
        tables.guests.push(guest);
        Ok(())
    }

    async fn find_guest(&self, guest_id: GuestId) -> Result<Option<Guest>, LedgerError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.guests.iter().find(|g| g.guest_id == guest_id).cloned())
    }
}

#[async_trait::async_trait]
impl BookingLedger for InMemoryHotel {
    async fn load_room(&self, room_id: RoomId) -> Result<Option<RoomLedger>, LedgerError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let Some(room) = tables.rooms.iter().find(|r| r.room_id == room_id).cloned() else {
            return Ok(None);
        };
        let room_type = tables
            .room_types
            .iter()
            .find(|t| t.type_id == room.type_id)
            .cloned()
            .ok_or_else(|| {
                LedgerError::Backend(format!(
                    "room {room_id} references missing room type {}",
                    room.type_id
                ))
            })?;
        Ok(Some(RoomLedger {
            room,
            room_type,
            bookings: tables
                .bookings
                .iter()
                .filter(|b| b.room_id == room_id)
                .cloned()
                .collect(),
            version: tables.version(room_id),
        }))
    }

    async fn find_booking(&self, booking_id: BookingId) -> Result<Option<Booking>, LedgerError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.booking(booking_id).cloned())
    }

    async fn commit(
        &self,
        room_id: RoomId,
        expected_version: i64,
        events: &[BookingEvent],
    ) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let delay_ms = self.commit_delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let mut tables = self.tables.write().await;
        let actual = tables.version(room_id);
        if actual != expected_version {
            return Err(LedgerError::VersionMismatch {
                room_id,
                expected: expected_version,
                actual,
            });
        }
        if events.is_empty() {
            return Ok(());
        }
        let room = tables
            .rooms
            .iter()
            .find(|r| r.room_id == room_id)
            .cloned()
            .ok_or_else(|| LedgerError::Constraint(format!("room {room_id} does not exist")))?;

        // Stage every change first; the tables are only touched once all events apply.
        let mut staged: Vec<Booking> = Vec::new();
        let mut entries: Vec<HistoryEntry> = Vec::new();
        let mut next_history_id = tables.history.len() as HistoryId + 1;
        for event in events {
            let booking_id = event.booking_id();
            let previous = BookingState::from(
                staged
                    .iter()
                    .find(|b| b.booking_id == booking_id)
                    .or_else(|| tables.booking(booking_id))
                    .cloned(),
            );
            let next = evolve(previous.clone(), event);
            if next == previous {
                return Err(LedgerError::Constraint(format!(
                    "event does not apply to booking {booking_id}"
                )));
            }
            let BookingState::Booked(booking) = next else {
                return Err(LedgerError::Constraint(format!(
                    "booking {booking_id} vanished"
                )));
            };
            if booking.room_id != room_id {
                return Err(LedgerError::Constraint(format!(
                    "booking {booking_id} belongs to room {}, not {room_id}",
                    booking.room_id
                )));
            }
            if booking.status == BookingStatus::Active {
                let others = tables
                    .bookings
                    .iter()
                    .filter(|b| !staged.iter().any(|s| s.booking_id == b.booking_id))
                    .chain(staged.iter())
                    .filter(|b| b.room_id == room_id && b.booking_id != booking_id);
                if let Some(conflict) = find_conflict(others, &booking.period) {
                    return Err(LedgerError::Constraint(format!(
                        "booking {booking_id} overlaps active booking {}",
                        conflict.booking_id
                    )));
                }
            }
            let guest = tables
                .guests
                .iter()
                .find(|g| g.guest_id == booking.guest_id)
                .ok_or_else(|| {
                    LedgerError::Constraint(format!("guest {} does not exist", booking.guest_id))
                })?;
            entries.push(HistoryEntry::record(
                next_history_id,
                event,
                &booking,
                guest,
                &room,
            ));
            next_history_id += 1;
            staged.retain(|b| b.booking_id != booking_id);
            staged.push(booking);
        }

        for booking in staged {
            match tables
                .bookings
                .iter()
                .position(|b| b.booking_id == booking.booking_id)
            {
                Some(index) => tables.bookings[index] = booking,
                None => tables.bookings.push(booking),
            }
        }
        tables.history.extend(entries);
        *tables.room_versions.entry(room_id).or_insert(0) += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl HotelQueries for InMemoryHotel {
    async fn list_rooms(
        &self,
        today: NaiveDate,
        status: Option<RoomStatus>,
    ) -> anyhow::Result<Vec<RoomStatusView>> {
        self.ensure_queries_online()?;
        let tables = self.tables.read().await;
        let mut rooms = tables.snapshot().room_statuses(today);
        if let Some(status) = status {
            rooms.retain(|r| r.status == status);
        }
        Ok(rooms)
    }

    async fn room_schedule(
        &self,
        room_id: RoomId,
        today: NaiveDate,
    ) -> anyhow::Result<Option<Vec<BookingView>>> {
        self.ensure_queries_online()?;
        let tables = self.tables.read().await;
        Ok(tables.snapshot().room_schedule(room_id, today))
    }

    async fn list_guests(&self) -> anyhow::Result<Vec<Guest>> {
        self.ensure_queries_online()?;
        let tables = self.tables.read().await;
        Ok(tables.snapshot().guests_by_name())
    }

    async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
    ) -> anyhow::Result<Vec<BookingView>> {
        self.ensure_queries_online()?;
        let tables = self.tables.read().await;
        Ok(tables.snapshot().bookings(status))
    }

    async fn list_history(&self, filter: &HistoryFilter) -> anyhow::Result<HistoryReport> {
        self.ensure_queries_online()?;
        let tables = self.tables.read().await;
        Ok(tables.snapshot().history(filter))
    }

    async fn dashboard(&self, today: NaiveDate) -> anyhow::Result<Dashboard> {
        self.ensure_queries_online()?;
        let tables = self.tables.read().await;
        Ok(tables.snapshot().dashboard(today))
    }
}
