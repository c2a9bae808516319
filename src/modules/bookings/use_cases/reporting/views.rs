use crate::modules::bookings::core::booking::{BookingId, BookingStatus};
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::core::history::HistoryEntry;
use crate::modules::bookings::core::room::RoomId;
use crate::shared::core::primitives::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Free,
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatusView {
    pub room_id: RoomId,
    pub room_number: String,
    pub type_name: String,
    pub price_per_night: Amount,
    pub status: RoomStatus,
    pub free_from: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub guest_name: String,
    pub room_id: RoomId,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub total_cost: Amount,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub total_rooms: usize,
    pub free_rooms: usize,
    pub occupied_rooms: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeRevenue {
    pub type_name: String,
    pub revenue: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub occupancy: Occupancy,
    pub active_bookings: usize,
    pub active_revenue: Amount,
    pub revenue_by_room_type: Vec<RoomTypeRevenue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryReport {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
    pub cancelled: usize,
}
