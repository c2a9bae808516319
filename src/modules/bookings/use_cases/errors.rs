use crate::modules::bookings::adapters::outbound::ledger::LedgerError;
use crate::modules::bookings::core::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("the room ledger kept changing, gave up after {attempts} attempts")]
    Contention { attempts: u32 },

    #[error("unexpected: {0}")]
    Unexpected(String),
}
