//! Source of "today" for callers that default the seed date.

use chrono::Local;

use crate::date::CalendarDate;

pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the local date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
