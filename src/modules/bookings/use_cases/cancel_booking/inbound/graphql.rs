use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::bookings::adapters::inbound::graphql::gql_error;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::modules::bookings::use_cases::make_booking::inbound::graphql::parse_id;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelBookingMutation;

#[Object]
impl CancelBookingMutation {
    /// Returns the id of the cancelled booking.
    async fn cancel_booking(&self, context: &Context<'_>, booking_id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = CancelBooking {
            booking_id: parse_id(&booking_id, "bookingId")?,
            requested_at: Utc::now(),
        };
        state
            .cancel_booking_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(booking_id)
    }
}
