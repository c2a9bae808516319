pub mod cancel_booking;
pub mod make_booking;
pub mod register_guest;
