// Read-side projections for the dashboard.
//
// Every view is recomputed from the catalog, guest, booking and history
// tables on each call; nothing here keeps counters of its own.

use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use crate::modules::bookings::core::guest::Guest;
use crate::modules::bookings::core::history::{HistoryAction, HistoryEntry, HistoryFilter};
use crate::modules::bookings::core::room::{Room, RoomId, RoomType};
use crate::modules::bookings::use_cases::reporting::views::{
    BookingView, Dashboard, HistoryReport, Occupancy, RoomStatus, RoomStatusView,
    RoomTypeRevenue,
};
use crate::shared::core::primitives::Amount;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
pub struct HotelSnapshot<'a> {
    pub room_types: &'a [RoomType],
    pub rooms: &'a [Room],
    pub guests: &'a [Guest],
    pub bookings: &'a [Booking],
    pub history: &'a [HistoryEntry],
}

impl<'a> HotelSnapshot<'a> {
    fn room_type(&self, room: &Room) -> Option<&'a RoomType> {
        self.room_types.iter().find(|t| t.type_id == room.type_id)
    }

    fn room(&self, room_id: RoomId) -> Option<&'a Room> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    fn active_bookings(&self) -> impl Iterator<Item = &'a Booking> {
        self.bookings.iter().filter(|b| b.is_active())
    }

    /// Rooms ordered by id, each marked occupied when an active booking covers `today`.
    pub fn room_statuses(&self, today: NaiveDate) -> Vec<RoomStatusView> {
        let mut views: Vec<RoomStatusView> = self
            .rooms
            .iter()
            .filter_map(|room| {
                let room_type = self.room_type(room)?;
                let occupying = self
                    .active_bookings()
                    .find(|b| b.room_id == room.room_id && b.period.covers(today));
                Some(RoomStatusView {
                    room_id: room.room_id,
                    room_number: room.room_number.clone(),
                    type_name: room_type.type_name.clone(),
                    price_per_night: room_type.price_per_night,
                    status: if occupying.is_some() {
                        RoomStatus::Occupied
                    } else {
                        RoomStatus::Free
                    },
                    free_from: occupying.map(|b| b.period.check_out()),
                })
            })
            .collect();
        views.sort_by_key(|v| v.room_id);
        views
    }

    pub fn occupancy(&self, today: NaiveDate) -> Occupancy {
        let statuses = self.room_statuses(today);
        let occupied_rooms = statuses
            .iter()
            .filter(|v| v.status == RoomStatus::Occupied)
            .count();
        Occupancy {
            total_rooms: statuses.len(),
            free_rooms: statuses.len() - occupied_rooms,
            occupied_rooms,
        }
    }

    pub fn dashboard(&self, today: NaiveDate) -> Dashboard {
        let mut by_type: BTreeMap<String, Amount> = BTreeMap::new();
        let mut active_bookings = 0;
        let mut active_revenue: Amount = 0;
        for booking in self.active_bookings() {
            active_bookings += 1;
            active_revenue = active_revenue.saturating_add(booking.total_cost);
            let type_name = self
                .room(booking.room_id)
                .and_then(|room| self.room_type(room))
                .map(|t| t.type_name.clone());
            if let Some(type_name) = type_name {
                let revenue = by_type.entry(type_name).or_default();
                *revenue = revenue.saturating_add(booking.total_cost);
            }
        }

        Dashboard {
            occupancy: self.occupancy(today),
            active_bookings,
            active_revenue,
            revenue_by_room_type: by_type
                .into_iter()
                .map(|(type_name, revenue)| RoomTypeRevenue { type_name, revenue })
                .collect(),
        }
    }

    fn booking_view(&self, booking: &Booking) -> BookingView {
        let guest_name = self
            .guests
            .iter()
            .find(|g| g.guest_id == booking.guest_id)
            .map(|g| g.full_name.clone())
            .unwrap_or_default();
        let room_number = self
            .room(booking.room_id)
            .map(|r| r.room_number.clone())
            .unwrap_or_default();
        BookingView {
            booking_id: booking.booking_id,
            guest_id: booking.guest_id,
            guest_name,
            room_id: booking.room_id,
            room_number,
            check_in: booking.period.check_in(),
            check_out: booking.period.check_out(),
            nights: booking.period.nights(),
            total_cost: booking.total_cost,
            status: booking.status,
        }
    }

    /// Newest stays first.
    pub fn bookings(&self, status: Option<BookingStatus>) -> Vec<BookingView> {
        let mut views: Vec<BookingView> = self
            .bookings
            .iter()
            .filter(|b| status.is_none_or(|s| b.status == s))
            .map(|b| self.booking_view(b))
            .collect();
        views.sort_by(|a, b| b.check_in.cmp(&a.check_in));
        views
    }

    /// Active stays on the room that have not ended before `today`, soonest first.
    /// `None` when the room does not exist.
    pub fn room_schedule(&self, room_id: RoomId, today: NaiveDate) -> Option<Vec<BookingView>> {
        self.room(room_id)?;
        let mut views: Vec<BookingView> = self
            .active_bookings()
            .filter(|b| b.room_id == room_id && b.period.check_out() >= today)
            .map(|b| self.booking_view(b))
            .collect();
        views.sort_by_key(|v| v.check_in);
        Some(views)
    }

    pub fn guests_by_name(&self) -> Vec<Guest> {
        let mut guests = self.guests.to_vec();
        guests.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        guests
    }

    /// Matching entries, newest first.
    pub fn history(&self, filter: &HistoryFilter) -> HistoryReport {
        let entries: Vec<HistoryEntry> = self
            .history
            .iter()
            .rev()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        let cancelled = entries
            .iter()
            .filter(|e| e.action == HistoryAction::Cancelled)
            .count();
        HistoryReport {
            total: entries.len(),
            cancelled,
            entries,
        }
    }
}
