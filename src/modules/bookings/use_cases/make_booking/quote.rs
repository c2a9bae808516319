use crate::modules::bookings::adapters::outbound::ledger::RoomLedger;
use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::core::room::RoomId;
use crate::shared::core::primitives::{Amount, StayPeriod};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Price of a stay at the room's current nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    pub room_id: RoomId,
    pub nights: i64,
    pub price_per_night: Amount,
    pub total_cost: Amount,
}

impl StayQuote {
    pub fn for_room(room: &RoomLedger, period: &StayPeriod) -> Result<Self, DomainError> {
        let price_per_night = room.room_type.price_per_night;
        let total_cost = period.cost(price_per_night).ok_or_else(|| {
            DomainError::Validation(format!(
                "{} nights at {price_per_night} per night is too expensive to book",
                period.nights()
            ))
        })?;
        Ok(Self {
            room_id: room.room.room_id,
            nights: period.nights(),
            price_per_night,
            total_cost,
        })
    }
}

pub fn validate_period(check_in: NaiveDate, check_out: NaiveDate) -> Result<StayPeriod, DomainError> {
    StayPeriod::new(check_in, check_out).map_err(|e| DomainError::Validation(e.to_string()))
}

pub fn quote_stay(
    room_id: RoomId,
    room: Option<&RoomLedger>,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<StayQuote, DomainError> {
    let period = validate_period(check_in, check_out)?;
    let room = room.ok_or_else(|| DomainError::not_found("room", room_id))?;
    StayQuote::for_room(room, &period)
}
