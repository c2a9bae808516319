pub mod app;
pub mod bookings;
pub mod commands;
pub mod events;
pub mod guests;
