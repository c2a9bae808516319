use crate::modules::bookings::core::booking::Booking;
use crate::shared::core::primitives::StayPeriod;

/// First active booking whose stay overlaps `period`, if any.
pub fn find_conflict<'a, I>(bookings: I, period: &StayPeriod) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .find(|b| b.is_active() && b.period.overlaps(period))
}

pub fn is_available<'a, I>(bookings: I, period: &StayPeriod) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    find_conflict(bookings, period).is_none()
}
