use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type GuestId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: GuestId,
    pub full_name: String,
    pub passport: String,
    pub phone: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl Guest {
    /// Case-insensitive substring match on the full name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
