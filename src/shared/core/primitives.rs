use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Money in whole units of the catalog currency.
pub type Amount = i64;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("check-out {check_out} must be after check-in {check_in}")]
pub struct InvalidStayPeriod {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// A stay as the half-open range `[check_in, check_out)`.
///
/// The check-out day itself is not occupied, so a stay ending on day X and a
/// stay starting on day X can share a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStayPeriod")]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Deserialize)]
struct RawStayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<RawStayPeriod> for StayPeriod {
    type Error = InvalidStayPeriod;

    fn try_from(raw: RawStayPeriod) -> Result<Self, Self::Error> {
        StayPeriod::new(raw.check_in, raw.check_out)
    }
}

impl StayPeriod {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, InvalidStayPeriod> {
        if check_out <= check_in {
            return Err(InvalidStayPeriod {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// `None` when the total does not fit in an `Amount`.
    pub fn cost(&self, price_per_night: Amount) -> Option<Amount> {
        self.nights().checked_mul(price_per_night)
    }
}
