use anyhow::Result;
use repcal_core::clock::Clock;
use repcal_core::config::{OutputFormat, RepcalConfig};
use repcal_core::{CalendarDate, RepeatUnit, expand};

use crate::render::render_dates;

pub struct ExpandArgs {
    pub start: Option<CalendarDate>,
    pub interval: Option<i64>,
    pub unit: RepeatUnit,
    pub until: CalendarDate,
    pub json: bool,
}

pub fn run(args: ExpandArgs, config: &RepcalConfig, clock: &impl Clock) -> Result<()> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let dates = occurrences(&args, config, clock)?;
    println!("{}", render_dates(&dates, format)?);

    Ok(())
}

/// Fill in defaults (today, configured interval) and expand.
fn occurrences(
    args: &ExpandArgs,
    config: &RepcalConfig,
    clock: &impl Clock,
) -> Result<Vec<CalendarDate>> {
    let seed = args.start.unwrap_or_else(|| clock.today());
    let interval = args.interval.unwrap_or(config.default_interval);

    Ok(expand(seed, interval, args.unit, args.until)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use repcal_core::clock::FixedClock;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn args(
        start: Option<&str>,
        interval: Option<i64>,
        unit: RepeatUnit,
        until: &str,
    ) -> ExpandArgs {
        ExpandArgs {
            start: start.map(date),
            interval,
            unit,
            until: date(until),
            json: false,
        }
    }

    #[test]
    fn start_defaults_to_today() {
        let clock = FixedClock(date("2024-11-01"));
        let dates = occurrences(
            &args(None, Some(1), RepeatUnit::Daily, "2024-11-03"),
            &RepcalConfig::default(),
            &clock,
        )
        .unwrap();
        assert_eq!(dates, [date("2024-11-01"), date("2024-11-02"), date("2024-11-03")]);
    }

    #[test]
    fn interval_defaults_to_config() {
        let config = RepcalConfig {
            default_interval: 2,
            ..RepcalConfig::default()
        };
        let clock = FixedClock(date("2000-01-01"));
        let dates = occurrences(
            &args(Some("2024-01-01"), None, RepeatUnit::Monthly, "2024-07-01"),
            &config,
            &clock,
        )
        .unwrap();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[1], date("2024-03-01"));
    }

    #[test]
    fn explicit_interval_wins() {
        let config = RepcalConfig {
            default_interval: 2,
            ..RepcalConfig::default()
        };
        let clock = FixedClock(date("2000-01-01"));
        let dates = occurrences(
            &args(Some("2024-01-01"), Some(1), RepeatUnit::Monthly, "2024-03-01"),
            &config,
            &clock,
        )
        .unwrap();
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn negative_interval_is_an_error() {
        let clock = FixedClock(date("2024-11-01"));
        let err = occurrences(
            &args(None, Some(-1), RepeatUnit::Weekly, "2024-12-01"),
            &RepcalConfig::default(),
            &clock,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid repeat interval -1"));
    }
}
