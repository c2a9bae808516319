use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::core::events::BookingEvent;

#[derive(Debug)]
pub enum Decision {
    Accepted { events: Vec<BookingEvent> },
    Rejected { reason: DomainError },
}
