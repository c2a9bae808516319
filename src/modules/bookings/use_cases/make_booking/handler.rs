use crate::modules::bookings::adapters::outbound::ledger::{
    BookingLedger, GuestRegistry, LedgerError,
};
use crate::modules::bookings::core::booking::BookingId;
use crate::modules::bookings::core::decision::Decision;
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::room::RoomId;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::make_booking::command::MakeBooking;
use crate::modules::bookings::use_cases::make_booking::decide::decide_make_booking;
use crate::modules::bookings::use_cases::make_booking::quote::{StayQuote, quote_stay};
use crate::shared::core::primitives::Amount;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    pub booking_id: BookingId,
    pub nights: i64,
    pub total_cost: Amount,
}

impl BookingReceipt {
    fn from_events(events: &[BookingEvent]) -> Result<Self, ApplicationError> {
        events
            .iter()
            .find_map(|event| match event {
                BookingEvent::BookingCreated(created) => Some(Self {
                    booking_id: created.booking_id,
                    nights: created.period.nights(),
                    total_cost: created.total_cost,
                }),
                _ => None,
            })
            .ok_or_else(|| ApplicationError::Unexpected("no BookingCreated event".into()))
    }
}

pub struct MakeBookingHandler<TLedger, TGuests>
where
    TLedger: BookingLedger + 'static,
    TGuests: GuestRegistry + 'static,
{
    ledger: Arc<TLedger>,
    guests: Arc<TGuests>,
    max_attempts: u32,
}

impl<TLedger, TGuests> MakeBookingHandler<TLedger, TGuests>
where
    TLedger: BookingLedger + 'static,
    TGuests: GuestRegistry + 'static,
{
    pub fn new(ledger: Arc<TLedger>, guests: Arc<TGuests>, max_attempts: u32) -> Self {
        Self {
            ledger,
            guests,
            max_attempts: max_attempts.max(1),
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(booking_id = %command.booking_id, room_id = command.room_id)
    )]
    pub async fn handle(&self, command: MakeBooking) -> Result<BookingReceipt, ApplicationError> {
        for attempt in 1..=self.max_attempts {
            let guest = self.guests.find_guest(command.guest_id).await?;
            let room = self.ledger.load_room(command.room_id).await?;
            let expected_version = room.as_ref().map_or(0, |r| r.version);

            match decide_make_booking(guest.as_ref(), room.as_ref(), command.clone()) {
                Decision::Accepted { events } => {
                    match self
                        .ledger
                        .commit(command.room_id, expected_version, &events)
                        .await
                    {
                        Ok(()) => {
                            let receipt = BookingReceipt::from_events(&events)?;
                            tracing::info!(total_cost = receipt.total_cost, "booking created");
                            return Ok(receipt);
                        }
                        Err(LedgerError::VersionMismatch { expected, actual, .. }) => {
                            tracing::debug!(attempt, expected, actual, "room ledger moved, retrying");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "booking ledger refused the booking");
                            return Err(e.into());
                        }
                    }
                }
                Decision::Rejected { reason } => {
                    tracing::info!(%reason, "booking rejected");
                    return Err(reason.into());
                }
            }
        }
        tracing::warn!(attempts = self.max_attempts, "gave up on a contended room");
        Err(ApplicationError::Contention {
            attempts: self.max_attempts,
        })
    }

    /// Prices a stay without booking it. Availability is not checked.
    pub async fn quote(
        &self,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<StayQuote, ApplicationError> {
        let room = self.ledger.load_room(room_id).await?;
        Ok(quote_stay(room_id, room.as_ref(), check_in, check_out)?)
    }
}
