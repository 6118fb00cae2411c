//! Repeat units and recurrence rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{RepcalError, RepcalResult};

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatUnit {
    /// Single event, no repetition
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatUnit {
    pub const ALL: [RepeatUnit; 5] = [
        RepeatUnit::None,
        RepeatUnit::Daily,
        RepeatUnit::Weekly,
        RepeatUnit::Monthly,
        RepeatUnit::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatUnit::None => "none",
            RepeatUnit::Daily => "daily",
            RepeatUnit::Weekly => "weekly",
            RepeatUnit::Monthly => "monthly",
            RepeatUnit::Yearly => "yearly",
        }
    }

    pub fn is_repeating(&self) -> bool {
        !matches!(self, RepeatUnit::None)
    }
}

impl fmt::Display for RepeatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatUnit {
    type Err = RepcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        RepeatUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == lower)
            .ok_or_else(|| RepcalError::InvalidRepeatUnit(s.to_string()))
    }
}

/// Validate a caller-supplied interval. Zero and negative values are rejected.
pub fn validate_interval(interval: i64) -> RepcalResult<u32> {
    u32::try_from(interval)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(RepcalError::InvalidInterval(interval))
}

/// A validated recurrence rule: repeat `unit` every `interval` units until
/// `end_date` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceSpec {
    unit: RepeatUnit,
    interval: u32,
    end_date: CalendarDate,
}

impl RecurrenceSpec {
    pub fn new(unit: RepeatUnit, interval: i64, end_date: CalendarDate) -> RepcalResult<Self> {
        Ok(RecurrenceSpec {
            unit,
            interval: validate_interval(interval)?,
            end_date,
        })
    }

    pub fn unit(&self) -> RepeatUnit {
        self.unit
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }
}
