use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::bookings::adapters::inbound::graphql::gql_error;
use crate::modules::bookings::use_cases::register_guest::command::RegisterGuest;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterGuestMutation;

#[Object]
impl RegisterGuestMutation {
    async fn register_guest(
        &self,
        context: &Context<'_>,
        full_name: String,
        passport: String,
        phone: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterGuest {
            guest_id: Uuid::now_v7(),
            full_name,
            passport,
            phone,
            requested_at: Utc::now(),
        };
        let guest_id = state
            .register_guest_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(ID(guest_id.to_string()))
    }
}
