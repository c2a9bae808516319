use crate::modules::bookings::adapters::outbound::ledger::{BookingLedger, GuestRegistry};
use crate::modules::bookings::adapters::outbound::ledger_in_memory::InMemoryHotel;
use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::core::history::{HistoryAction, HistoryFilter};
use crate::modules::bookings::use_cases::cancel_booking::handler::CancelBookingHandler;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::make_booking::handler::MakeBookingHandler;
use crate::modules::bookings::use_cases::register_guest::handler::RegisterGuestHandler;
use crate::modules::bookings::use_cases::reporting::queries_port::HotelQueries;
use crate::tests::fixtures::catalog::{date, seeded_hotel};
use crate::tests::fixtures::commands::cancel_booking::make_cancel_booking_command;
use crate::tests::fixtures::commands::make_booking::MakeBookingBuilder;
use crate::tests::fixtures::commands::register_guest::RegisterGuestBuilder;
use std::sync::Arc;
use uuid::Uuid;

struct Desk {
    hotel: Arc<InMemoryHotel>,
    guests: RegisterGuestHandler<InMemoryHotel>,
    bookings: MakeBookingHandler<InMemoryHotel, InMemoryHotel>,
    cancellations: CancelBookingHandler<InMemoryHotel>,
}

fn open_desk() -> Desk {
    let hotel = Arc::new(seeded_hotel());
    Desk {
        guests: RegisterGuestHandler::new(hotel.clone()),
        bookings: MakeBookingHandler::new(hotel.clone(), hotel.clone(), 3),
        cancellations: CancelBookingHandler::new(hotel.clone(), 3),
        hotel,
    }
}

#[tokio::test]
async fn books_overlaps_and_rebooks_a_room() {
    let desk = open_desk();
    let anna = desk
        .guests
        .handle(RegisterGuestBuilder::new().full_name("Anna Petrova").build())
        .await
        .unwrap();
    let boris = desk
        .guests
        .handle(RegisterGuestBuilder::new().full_name("Boris Ivanov").build())
        .await
        .unwrap();

    let first = desk
        .bookings
        .handle(
            MakeBookingBuilder::new()
                .guest_id(anna)
                .stay("2024-06-01", "2024-06-04")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(first.nights, 3);
    assert_eq!(first.total_cost, 6000);

    let overlapping = desk
        .bookings
        .handle(
            MakeBookingBuilder::new()
                .guest_id(boris)
                .stay("2024-06-03", "2024-06-06")
                .build(),
        )
        .await;
    assert!(matches!(
        overlapping,
        Err(ApplicationError::Domain(DomainError::AvailabilityConflict { .. }))
    ));

    let back_to_back = desk
        .bookings
        .handle(
            MakeBookingBuilder::new()
                .guest_id(boris)
                .stay("2024-06-04", "2024-06-06")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(back_to_back.total_cost, 4000);

    desk.cancellations
        .handle(make_cancel_booking_command(first.booking_id))
        .await
        .unwrap();
    let rebooked = desk
        .bookings
        .handle(
            MakeBookingBuilder::new()
                .guest_id(boris)
                .stay("2024-06-01", "2024-06-04")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(rebooked.total_cost, 6000);

    let active = desk
        .hotel
        .list_bookings(Some(BookingStatus::Active))
        .await
        .unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|b| b.guest_name == "Boris Ivanov"));
}

#[tokio::test]
async fn cancelling_an_unknown_booking_changes_nothing() {
    let desk = open_desk();

    let result = desk
        .cancellations
        .handle(make_cancel_booking_command(Uuid::now_v7()))
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::NotFound {
            entity: "booking",
            ..
        }))
    ));
    let history = desk.hotel.list_history(&HistoryFilter::default()).await.unwrap();
    assert_eq!(history.total, 0);
}

#[tokio::test]
async fn records_history_for_each_transition() {
    let desk = open_desk();
    let anna = desk
        .guests
        .handle(RegisterGuestBuilder::new().full_name("Anna Petrova").build())
        .await
        .unwrap();
    let receipt = desk
        .bookings
        .handle(MakeBookingBuilder::new().guest_id(anna).room_id(201).build())
        .await
        .unwrap();
    desk.cancellations
        .handle(make_cancel_booking_command(receipt.booking_id))
        .await
        .unwrap();

    let report = desk.hotel.list_history(&HistoryFilter::default()).await.unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.cancelled, 1);
    let actions: Vec<HistoryAction> = report.entries.iter().map(|e| e.action).collect();
    assert_eq!(actions, vec![HistoryAction::Cancelled, HistoryAction::Created]);
    assert!(report.entries.iter().all(|e| e.booking_id == receipt.booking_id));
    assert!(report.entries.iter().all(|e| e.room_number == "201"));
    assert_eq!(report.entries[0].booking_status, BookingStatus::Cancelled);
    assert_eq!(report.entries[1].booking_status, BookingStatus::Active);
    assert_eq!(report.entries[1].total_cost, 10500);

    let by_name = desk
        .hotel
        .list_history(&HistoryFilter {
            guest_name: Some("PETROVA".into()),
            action: Some(HistoryAction::Created),
        })
        .await
        .unwrap();
    assert_eq!(by_name.total, 1);
}

#[tokio::test]
async fn repricing_a_room_type_keeps_existing_totals() {
    let desk = open_desk();
    let anna = desk
        .guests
        .handle(RegisterGuestBuilder::new().build())
        .await
        .unwrap();
    let before = desk
        .bookings
        .handle(MakeBookingBuilder::new().guest_id(anna).build())
        .await
        .unwrap();

    desk.hotel.set_price_per_night(1, 2500).await.unwrap();

    let stored = desk
        .hotel
        .find_booking(before.booking_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.total_cost, 6000);
    assert_eq!(stored.price_per_night, 2000);

    let quote = desk
        .bookings
        .quote(102, date("2024-06-01"), date("2024-06-04"))
        .await
        .unwrap();
    let after = desk
        .bookings
        .handle(MakeBookingBuilder::new().guest_id(anna).room_id(102).build())
        .await
        .unwrap();
    assert_eq!(quote.total_cost, 7500);
    assert_eq!(after.total_cost, quote.total_cost);

    let dashboard = desk.hotel.dashboard(date("2024-06-02")).await.unwrap();
    assert_eq!(dashboard.active_revenue, 13500);
    assert_eq!(dashboard.occupancy.occupied_rooms, 2);
}

#[tokio::test]
async fn a_guest_must_exist_before_booking() {
    let desk = open_desk();
    let stranger = Uuid::now_v7();

    let result = desk
        .bookings
        .handle(MakeBookingBuilder::new().guest_id(stranger).build())
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::NotFound {
            entity: "guest",
            ..
        }))
    ));
    assert!(desk.hotel.find_guest(stranger).await.unwrap().is_none());
    assert!(desk.hotel.load_room(101).await.unwrap().unwrap().bookings.is_empty());
}
