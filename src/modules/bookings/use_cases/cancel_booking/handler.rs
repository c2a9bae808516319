use crate::modules::bookings::adapters::outbound::ledger::{BookingLedger, LedgerError};
use crate::modules::bookings::core::booking::BookingState;
use crate::modules::bookings::core::decision::Decision;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::modules::bookings::use_cases::cancel_booking::decide::decide_cancel_booking;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct CancelBookingHandler<TLedger>
where
    TLedger: BookingLedger + 'static,
{
    ledger: Arc<TLedger>,
    max_attempts: u32,
}

impl<TLedger> CancelBookingHandler<TLedger>
where
    TLedger: BookingLedger + 'static,
{
    pub fn new(ledger: Arc<TLedger>, max_attempts: u32) -> Self {
        Self {
            ledger,
            max_attempts: max_attempts.max(1),
        }
    }

    #[tracing::instrument(skip_all, fields(booking_id = %command.booking_id))]
    pub async fn handle(&self, command: CancelBooking) -> Result<(), ApplicationError> {
        for attempt in 1..=self.max_attempts {
            let Some(booking) = self.ledger.find_booking(command.booking_id).await? else {
                return self.reject(&BookingState::None, command);
            };
            let room = self.ledger.load_room(booking.room_id).await?.ok_or_else(|| {
                ApplicationError::Unexpected(format!(
                    "booking {} points at missing room {}",
                    booking.booking_id, booking.room_id
                ))
            })?;
            let state = BookingState::from(room.booking(command.booking_id).cloned());

            match decide_cancel_booking(&state, command.clone()) {
                Decision::Accepted { events } => {
                    match self
                        .ledger
                        .commit(booking.room_id, room.version, &events)
                        .await
                    {
                        Ok(()) => {
                            tracing::info!(room_id = booking.room_id, "booking cancelled");
                            return Ok(());
                        }
                        Err(LedgerError::VersionMismatch { expected, actual, .. }) => {
                            tracing::debug!(attempt, expected, actual, "room ledger moved, retrying");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "booking ledger refused the cancellation");
                            return Err(e.into());
                        }
                    }
                }
                Decision::Rejected { reason } => {
                    tracing::info!(%reason, "cancellation rejected");
                    return Err(reason.into());
                }
            }
        }
        tracing::warn!(attempts = self.max_attempts, "gave up on a contended room");
        Err(ApplicationError::Contention {
            attempts: self.max_attempts,
        })
    }

    fn reject(&self, state: &BookingState, command: CancelBooking) -> Result<(), ApplicationError> {
        match decide_cancel_booking(state, command) {
            Decision::Rejected { reason } => {
                tracing::info!(%reason, "cancellation rejected");
                Err(reason.into())
            }
            Decision::Accepted { .. } => Err(ApplicationError::Unexpected(
                "cancellation accepted without a booking".into(),
            )),
        }
    }
}
