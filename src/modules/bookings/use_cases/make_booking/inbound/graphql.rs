use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::bookings::adapters::inbound::graphql::{gql_bad_input, gql_error};
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::make_booking::command::MakeBooking;
use crate::modules::bookings::use_cases::make_booking::handler::BookingReceipt;
use crate::modules::bookings::use_cases::make_booking::quote::StayQuote;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlBookingReceipt {
    pub booking_id: ID,
    pub nights: i64,
    pub total_cost: i64,
}

impl From<BookingReceipt> for GqlBookingReceipt {
    fn from(r: BookingReceipt) -> Self {
        Self {
            booking_id: ID(r.booking_id.to_string()),
            nights: r.nights,
            total_cost: r.total_cost,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStayQuote {
    pub room_id: i64,
    pub nights: i64,
    pub price_per_night: i64,
    pub total_cost: i64,
}

impl From<StayQuote> for GqlStayQuote {
    fn from(q: StayQuote) -> Self {
        Self {
            room_id: q.room_id,
            nights: q.nights,
            price_per_night: q.price_per_night,
            total_cost: q.total_cost,
        }
    }
}

pub fn parse_id(id: &ID, field: &str) -> GqlResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| gql_bad_input(format!("{field} is not a valid id")))
}

#[derive(Default)]
pub struct MakeBookingMutation;

#[Object]
impl MakeBookingMutation {
    async fn make_booking(
        &self,
        context: &Context<'_>,
        guest_id: ID,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> GqlResult<GqlBookingReceipt> {
        let state = context.data_unchecked::<AppState>();
        let command = MakeBooking {
            booking_id: Uuid::now_v7(),
            guest_id: parse_id(&guest_id, "guestId")?,
            room_id,
            check_in,
            check_out,
            requested_at: Utc::now(),
        };
        let receipt = state
            .make_booking_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(receipt.into())
    }
}

#[derive(Default)]
pub struct QuoteQuery;

#[Object]
impl QuoteQuery {
    async fn quote(
        &self,
        context: &Context<'_>,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> GqlResult<GqlStayQuote> {
        let state = context.data_unchecked::<AppState>();
        let quote = state
            .make_booking_handler
            .quote(room_id, check_in, check_out)
            .await
            .map_err(gql_error)?;
        Ok(quote.into())
    }
}
