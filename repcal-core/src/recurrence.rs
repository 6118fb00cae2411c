//! Recurrence expansion.
//!
//! Turns a seed date plus a repeat rule into the concrete, ordered list of
//! dates on which an event occurs. Monthly and yearly rules always derive
//! each occurrence from the seed's day-of-month; when that day does not exist
//! in the target month (Jan 31 -> February, Feb 29 -> a common year) the
//! occurrence is skipped rather than clamped.

use tracing::{debug, trace};

use crate::date::CalendarDate;
use crate::error::RepcalResult;
use crate::repeat::{RecurrenceSpec, RepeatUnit};

/// The n-th candidate occurrence of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    Date(CalendarDate),
    /// The seed day does not exist in the target month.
    Skipped { month_start: CalendarDate },
    /// No further occurrences (non-repeating rule, or past the representable range).
    Exhausted,
}

/// Expand a recurrence into its occurrence dates, `end_date` inclusive.
///
/// Returns an empty list when `end_date` is before `seed`. A `none` unit
/// yields just the seed. Fails with `InvalidInterval` unless `interval >= 1`.
pub fn expand(
    seed: CalendarDate,
    interval: i64,
    unit: RepeatUnit,
    end_date: CalendarDate,
) -> RepcalResult<Vec<CalendarDate>> {
    let spec = RecurrenceSpec::new(unit, interval, end_date)?;
    Ok(expand_spec(seed, &spec))
}

/// Expand a pre-validated [`RecurrenceSpec`]. Never fails.
pub fn expand_spec(seed: CalendarDate, spec: &RecurrenceSpec) -> Vec<CalendarDate> {
    let end_date = spec.end_date();
    debug!(
        seed = %seed,
        unit = %spec.unit(),
        interval = spec.interval(),
        end = %end_date,
        "Expanding recurrence"
    );

    let mut dates = Vec::new();

    for n in 0u64.. {
        match nth_candidate(seed, spec.unit(), spec.interval(), n) {
            Candidate::Date(date) if date > end_date => break,
            Candidate::Date(date) => dates.push(date),
            Candidate::Skipped { month_start } if month_start > end_date => break,
            Candidate::Skipped { month_start } => {
                trace!(
                    month = %month_start,
                    day = seed.day(),
                    "Skipping month without anchor day"
                );
            }
            Candidate::Exhausted => break,
        }
    }

    debug!(occurrences = dates.len(), "Recurrence expanded");
    dates
}

/// String front-end: `YYYY-MM-DD` dates and a unit name in, `YYYY-MM-DD` dates out.
pub fn expand_str(
    seed: &str,
    interval: i64,
    unit: &str,
    end_date: &str,
) -> RepcalResult<Vec<String>> {
    let seed = CalendarDate::parse(seed)?;
    let end_date = CalendarDate::parse(end_date)?;
    let unit: RepeatUnit = unit.parse()?;

    let dates = expand(seed, interval, unit, end_date)?;
    Ok(dates.iter().map(ToString::to_string).collect())
}

/// Compute the n-th occurrence counted from the seed (n = 0 is the seed itself).
fn nth_candidate(seed: CalendarDate, unit: RepeatUnit, interval: u32, n: u64) -> Candidate {
    let interval = u64::from(interval);

    let offset = match unit {
        RepeatUnit::None if n == 0 => return Candidate::Date(seed),
        RepeatUnit::None => return Candidate::Exhausted,
        RepeatUnit::Daily => interval.checked_mul(n),
        RepeatUnit::Weekly => interval.checked_mul(7).and_then(|days| days.checked_mul(n)),
        RepeatUnit::Monthly => interval.checked_mul(n),
        RepeatUnit::Yearly => interval.checked_mul(12).and_then(|months| months.checked_mul(n)),
    };
    let Some(offset) = offset else {
        return Candidate::Exhausted;
    };

    match unit {
        RepeatUnit::Daily | RepeatUnit::Weekly => seed
            .checked_add_days(offset)
            .map_or(Candidate::Exhausted, Candidate::Date),
        _ => add_months_anchored(seed, offset),
    }
}

/// Move `months` months forward from the seed, keeping the seed's day-of-month.
fn add_months_anchored(seed: CalendarDate, months: u64) -> Candidate {
    let Ok(months) = i64::try_from(months) else {
        return Candidate::Exhausted;
    };
    let Some(month0) = i64::from(seed.month() - 1).checked_add(months) else {
        return Candidate::Exhausted;
    };

    let Ok(year) = i32::try_from(i64::from(seed.year()) + month0 / 12) else {
        return Candidate::Exhausted;
    };
    // month0 is non-negative, so the remainder is in 0..12
    let month = (month0 % 12) as u32 + 1;

    if let Some(date) = CalendarDate::from_ymd_opt(year, month, seed.day()) {
        return Candidate::Date(date);
    }

    match CalendarDate::from_ymd_opt(year, month, 1) {
        Some(month_start) => Candidate::Skipped { month_start },
        None => Candidate::Exhausted,
    }
}
