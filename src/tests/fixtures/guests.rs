use crate::modules::bookings::core::guest::Guest;
use crate::tests::fixtures::catalog::fixed_now;
use uuid::Uuid;

pub fn make_guest(full_name: &str) -> Guest {
    Guest {
        guest_id: Uuid::now_v7(),
        full_name: full_name.into(),
        passport: "4510 123456".into(),
        phone: Some("+7 900 000-00-00".into()),
        registered_at: fixed_now(),
    }
}
