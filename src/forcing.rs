/// Daily forcing for a simulation step.
///
/// Callers either name a calendar date, in which case precipitation and
/// evapotranspiration come out of the sample-year tables, or supply the
/// two depths directly (both in inches over the day). Direct depths are
/// used as given, without any per-cover scaling.
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayForcing {
    /// Resolve forcing from the sample-year tables for this date.
    Date(NaiveDate),
    /// Explicit depths, bypassing the sample-year tables.
    Direct { precip: f64, et: f64 },
}

impl DayForcing {
    pub fn date(date: NaiveDate) -> Self {
        DayForcing::Date(date)
    }

    pub fn direct(precip: f64, et: f64) -> Self {
        DayForcing::Direct { precip, et }
    }
}
