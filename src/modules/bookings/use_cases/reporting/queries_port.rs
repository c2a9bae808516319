use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::guest::Guest;
use crate::modules::bookings::core::history::HistoryFilter;
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::reporting::views::{
    BookingView, Dashboard, HistoryReport, RoomStatus, RoomStatusView,
};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait HotelQueries {
    async fn list_rooms(
        &self,
        today: NaiveDate,
        status: Option<RoomStatus>,
    ) -> anyhow::Result<Vec<RoomStatusView>>;

    /// `None` when the room does not exist.
    async fn room_schedule(
        &self,
        room_id: RoomId,
        today: NaiveDate,
    ) -> anyhow::Result<Option<Vec<BookingView>>>;

    async fn list_guests(&self) -> anyhow::Result<Vec<Guest>>;

    async fn list_bookings(&self, status: Option<BookingStatus>)
    -> anyhow::Result<Vec<BookingView>>;

    async fn list_history(&self, filter: &HistoryFilter) -> anyhow::Result<HistoryReport>;

    async fn dashboard(&self, today: NaiveDate) -> anyhow::Result<Dashboard>;
}
