// Shared test fixture for the RegisterGuest command.

use crate::modules::bookings::use_cases::register_guest::command::RegisterGuest;
use crate::tests::fixtures::catalog::fixed_now;
use uuid::Uuid;

pub struct RegisterGuestBuilder {
    inner: RegisterGuest,
}

impl Default for RegisterGuestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterGuestBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterGuest {
                guest_id: Uuid::now_v7(),
                full_name: "Anna Petrova".into(),
                passport: "4510 123456".into(),
                phone: Some("+7 900 000-00-00".into()),
                requested_at: fixed_now(),
            },
        }
    }

    pub fn full_name(mut self, v: impl Into<String>) -> Self {
        self.inner.full_name = v.into();
        self
    }

    pub fn passport(mut self, v: impl Into<String>) -> Self {
        self.inner.passport = v.into();
        self
    }

    pub fn phone(mut self, v: Option<String>) -> Self {
        self.inner.phone = v;
        self
    }

    pub fn build(self) -> RegisterGuest {
        self.inner
    }
}
