use crate::modules::bookings::adapters::outbound::ledger::GuestRegistry;
use crate::modules::bookings::core::guest::GuestId;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::register_guest::command::RegisterGuest;
use crate::modules::bookings::use_cases::register_guest::decide::decide_register_guest;
use std::sync::Arc;

pub struct RegisterGuestHandler<TGuests>
where
    TGuests: GuestRegistry + 'static,
{
    guests: Arc<TGuests>,
}

impl<TGuests> RegisterGuestHandler<TGuests>
where
    TGuests: GuestRegistry + 'static,
{
    pub fn new(guests: Arc<TGuests>) -> Self {
        Self { guests }
    }

    #[tracing::instrument(skip_all, fields(guest_id = %command.guest_id))]
    pub async fn handle(&self, command: RegisterGuest) -> Result<GuestId, ApplicationError> {
        let guest = decide_register_guest(command).inspect_err(|reason| {
            tracing::info!(%reason, "guest registration rejected");
        })?;
        let guest_id = guest.guest_id;
        self.guests.insert_guest(guest).await.inspect_err(|e| {
            tracing::warn!(error = %e, "guest registry refused the guest");
        })?;
        tracing::info!("guest registered");
        Ok(guest_id)
    }
}
