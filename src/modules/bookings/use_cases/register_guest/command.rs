use crate::modules::bookings::core::guest::GuestId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterGuest {
    pub guest_id: GuestId,
    pub full_name: String,
    pub passport: String,
    pub phone: Option<String>,
    pub requested_at: DateTime<Utc>,
}
