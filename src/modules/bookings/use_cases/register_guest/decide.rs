use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::core::guest::Guest;
use crate::modules::bookings::use_cases::register_guest::command::RegisterGuest;

/// Name and passport are required; a blank phone is treated as no phone.
pub fn decide_register_guest(command: RegisterGuest) -> Result<Guest, DomainError> {
    let full_name = command.full_name.trim();
    if full_name.is_empty() {
        return Err(DomainError::Validation("full name is required".into()));
    }
    let passport = command.passport.trim();
    if passport.is_empty() {
        return Err(DomainError::Validation("passport is required".into()));
    }
    let phone = command
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned);

    Ok(Guest {
        guest_id: command.guest_id,
        full_name: full_name.to_owned(),
        passport: passport.to_owned(),
        phone,
        registered_at: command.requested_at,
    })
}
