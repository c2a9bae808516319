// AppState over a seeded in memory hotel, for the inbound adapter tests.

use crate::modules::bookings::adapters::outbound::ledger::GuestRegistry;
use crate::modules::bookings::adapters::outbound::ledger_in_memory::InMemoryHotel;
use crate::modules::bookings::core::guest::Guest;
use crate::shell::state::AppState;
use crate::tests::fixtures::catalog::seeded_hotel;
use crate::tests::fixtures::guests::make_guest;
use std::sync::Arc;

pub fn make_test_state() -> (AppState, Arc<InMemoryHotel>) {
    let hotel = Arc::new(seeded_hotel());
    (AppState::new(hotel.clone(), 3), hotel)
}

pub async fn make_test_state_with_guest() -> (AppState, Arc<InMemoryHotel>, Guest) {
    let (state, hotel) = make_test_state();
    let guest = make_guest("Anna Petrova");
    hotel.insert_guest(guest.clone()).await.unwrap();
    (state, hotel, guest)
}

pub fn make_offline_state() -> AppState {
    let mut hotel = seeded_hotel();
    hotel.toggle_offline();
    AppState::new(Arc::new(hotel), 3)
}
