use crate::modules::bookings::adapters::outbound::ledger_in_memory::InMemoryHotel;
use crate::modules::bookings::use_cases::cancel_booking::handler::CancelBookingHandler;
use crate::modules::bookings::use_cases::make_booking::handler::MakeBookingHandler;
use crate::modules::bookings::use_cases::register_guest::handler::RegisterGuestHandler;
use crate::modules::bookings::use_cases::reporting::queries_port::HotelQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn HotelQueries + Send + Sync>,
    pub register_guest_handler: Arc<RegisterGuestHandler<InMemoryHotel>>,
    pub make_booking_handler: Arc<MakeBookingHandler<InMemoryHotel, InMemoryHotel>>,
    pub cancel_booking_handler: Arc<CancelBookingHandler<InMemoryHotel>>,
}

impl AppState {
    /// Wires every handler onto the one hotel store.
    pub fn new(hotel: Arc<InMemoryHotel>, commit_attempts: u32) -> Self {
        Self {
            queries: hotel.clone(),
            register_guest_handler: Arc::new(RegisterGuestHandler::new(hotel.clone())),
            make_booking_handler: Arc::new(MakeBookingHandler::new(
                hotel.clone(),
                hotel.clone(),
                commit_attempts,
            )),
            cancel_booking_handler: Arc::new(CancelBookingHandler::new(hotel, commit_attempts)),
        }
    }
}
