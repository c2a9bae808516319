use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::bookings::adapters::inbound::graphql::gql_query_error;
use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::guest::Guest;
use crate::modules::bookings::core::history::{HistoryAction, HistoryEntry, HistoryFilter};
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::reporting::inbound::http::today;
use crate::modules::bookings::use_cases::reporting::views::{
    BookingView, Dashboard, HistoryReport, RoomStatus, RoomStatusView,
};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "RoomStatus")]
pub enum GqlRoomStatus {
    Free,
    Occupied,
}

impl From<GqlRoomStatus> for RoomStatus {
    fn from(s: GqlRoomStatus) -> Self {
        match s {
            GqlRoomStatus::Free => RoomStatus::Free,
            GqlRoomStatus::Occupied => RoomStatus::Occupied,
        }
    }
}

impl From<RoomStatus> for GqlRoomStatus {
    fn from(s: RoomStatus) -> Self {
        match s {
            RoomStatus::Free => GqlRoomStatus::Free,
            RoomStatus::Occupied => GqlRoomStatus::Occupied,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "BookingStatus")]
pub enum GqlBookingStatus {
    Active,
    Cancelled,
}

impl From<GqlBookingStatus> for BookingStatus {
    fn from(s: GqlBookingStatus) -> Self {
        match s {
            GqlBookingStatus::Active => BookingStatus::Active,
            GqlBookingStatus::Cancelled => BookingStatus::Cancelled,
        }
    }
}

impl From<BookingStatus> for GqlBookingStatus {
    fn from(s: BookingStatus) -> Self {
        match s {
            BookingStatus::Active => GqlBookingStatus::Active,
            BookingStatus::Cancelled => GqlBookingStatus::Cancelled,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "HistoryAction")]
pub enum GqlHistoryAction {
    Created,
    Cancelled,
}

impl From<GqlHistoryAction> for HistoryAction {
    fn from(a: GqlHistoryAction) -> Self {
        match a {
            GqlHistoryAction::Created => HistoryAction::Created,
            GqlHistoryAction::Cancelled => HistoryAction::Cancelled,
        }
    }
}

impl From<HistoryAction> for GqlHistoryAction {
    fn from(a: HistoryAction) -> Self {
        match a {
            HistoryAction::Created => GqlHistoryAction::Created,
            HistoryAction::Cancelled => GqlHistoryAction::Cancelled,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRoom {
    pub room_id: i64,
    pub room_number: String,
    pub type_name: String,
    pub price_per_night: i64,
    pub status: GqlRoomStatus,
    pub free_from: Option<NaiveDate>,
}

impl From<RoomStatusView> for GqlRoom {
    fn from(v: RoomStatusView) -> Self {
        Self {
            room_id: v.room_id,
            room_number: v.room_number,
            type_name: v.type_name,
            price_per_night: v.price_per_night,
            status: v.status.into(),
            free_from: v.free_from,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlGuest {
    pub guest_id: ID,
    pub full_name: String,
    pub passport: String,
    pub phone: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl From<Guest> for GqlGuest {
    fn from(g: Guest) -> Self {
        Self {
            guest_id: ID(g.guest_id.to_string()),
            full_name: g.full_name,
            passport: g.passport,
            phone: g.phone,
            registered_at: g.registered_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBooking {
    pub booking_id: ID,
    pub guest_id: ID,
    pub guest_name: String,
    pub room_id: i64,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub total_cost: i64,
    pub status: GqlBookingStatus,
}

impl From<BookingView> for GqlBooking {
    fn from(v: BookingView) -> Self {
        Self {
            booking_id: ID(v.booking_id.to_string()),
            guest_id: ID(v.guest_id.to_string()),
            guest_name: v.guest_name,
            room_id: v.room_id,
            room_number: v.room_number,
            check_in: v.check_in,
            check_out: v.check_out,
            nights: v.nights,
            total_cost: v.total_cost,
            status: v.status.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlHistoryEntry {
    pub history_id: i64,
    pub booking_id: ID,
    pub guest_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_cost: i64,
    pub booking_status: GqlBookingStatus,
    pub action: GqlHistoryAction,
    pub changed_at: DateTime<Utc>,
}

impl From<HistoryEntry> for GqlHistoryEntry {
    fn from(e: HistoryEntry) -> Self {
        Self {
            history_id: e.history_id,
            booking_id: ID(e.booking_id.to_string()),
            guest_name: e.guest_name,
            room_number: e.room_number,
            check_in: e.check_in,
            check_out: e.check_out,
            total_cost: e.total_cost,
            booking_status: e.booking_status.into(),
            action: e.action.into(),
            changed_at: e.changed_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlHistoryReport {
    pub entries: Vec<GqlHistoryEntry>,
    pub total: usize,
    pub cancelled: usize,
}

impl From<HistoryReport> for GqlHistoryReport {
    fn from(r: HistoryReport) -> Self {
        Self {
            entries: r.entries.into_iter().map(Into::into).collect(),
            total: r.total,
            cancelled: r.cancelled,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRoomTypeRevenue {
    pub type_name: String,
    pub revenue: i64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboard {
    pub total_rooms: usize,
    pub free_rooms: usize,
    pub occupied_rooms: usize,
    pub active_bookings: usize,
    pub active_revenue: i64,
    pub revenue_by_room_type: Vec<GqlRoomTypeRevenue>,
}

impl From<Dashboard> for GqlDashboard {
    fn from(d: Dashboard) -> Self {
        Self {
            total_rooms: d.occupancy.total_rooms,
            free_rooms: d.occupancy.free_rooms,
            occupied_rooms: d.occupancy.occupied_rooms,
            active_bookings: d.active_bookings,
            active_revenue: d.active_revenue,
            revenue_by_room_type: d
                .revenue_by_room_type
                .into_iter()
                .map(|r| GqlRoomTypeRevenue {
                    type_name: r.type_name,
                    revenue: r.revenue,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct ReportingQuery;

#[Object]
impl ReportingQuery {
    async fn rooms(
        &self,
        context: &Context<'_>,
        status: Option<GqlRoomStatus>,
    ) -> GqlResult<Vec<GqlRoom>> {
        let state = context.data_unchecked::<AppState>();
        let rooms = state
            .queries
            .list_rooms(today(), status.map(Into::into))
            .await
            .map_err(gql_query_error)?;
        Ok(rooms.into_iter().map(Into::into).collect())
    }

    /// `null` when the room does not exist.
    async fn room_schedule(
        &self,
        context: &Context<'_>,
        room_id: RoomId,
    ) -> GqlResult<Option<Vec<GqlBooking>>> {
        let state = context.data_unchecked::<AppState>();
        let schedule = state
            .queries
            .room_schedule(room_id, today())
            .await
            .map_err(gql_query_error)?;
        Ok(schedule.map(|views| views.into_iter().map(Into::into).collect()))
    }

    async fn guests(&self, context: &Context<'_>) -> GqlResult<Vec<GqlGuest>> {
        let state = context.data_unchecked::<AppState>();
        let guests = state
            .queries
            .list_guests()
            .await
            .map_err(gql_query_error)?;
        Ok(guests.into_iter().map(Into::into).collect())
    }

    async fn bookings(
        &self,
        context: &Context<'_>,
        status: Option<GqlBookingStatus>,
    ) -> GqlResult<Vec<GqlBooking>> {
        let state = context.data_unchecked::<AppState>();
        let bookings = state
            .queries
            .list_bookings(status.map(Into::into))
            .await
            .map_err(gql_query_error)?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }

    async fn history(
        &self,
        context: &Context<'_>,
        guest_name: Option<String>,
        action: Option<GqlHistoryAction>,
    ) -> GqlResult<GqlHistoryReport> {
        let state = context.data_unchecked::<AppState>();
        let filter = HistoryFilter {
            guest_name,
            action: action.map(Into::into),
        };
        let report = state
            .queries
            .list_history(&filter)
            .await
            .map_err(gql_query_error)?;
        Ok(report.into())
    }

    async fn dashboard(&self, context: &Context<'_>) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let dashboard = state
            .queries
            .dashboard(today())
            .await
            .map_err(gql_query_error)?;
        Ok(dashboard.into())
    }
}
