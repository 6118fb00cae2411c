//! Calendar event records carrying repeat information.
//!
//! These mirror the records the calendar front-end stores: a single event
//! with a `repeat` block is expanded into one record per occurrence, each a
//! copy of the original with only its `date` changed.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date::CalendarDate;
use crate::error::{RepcalError, RepcalResult};
use crate::recurrence::expand_spec;
use crate::repeat::{RecurrenceSpec, RepeatUnit};

fn default_interval() -> i64 {
    1
}

fn default_notification_time() -> u32 {
    10
}

/// Repeat settings as stored on an event.
///
/// `interval` is kept as the raw submitted value; it is validated when the
/// event is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type", default)]
    pub kind: RepeatUnit,
    #[serde(default = "default_interval")]
    pub interval: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
}

impl Default for RepeatInfo {
    fn default() -> Self {
        RepeatInfo::none()
    }
}

impl RepeatInfo {
    pub fn none() -> Self {
        RepeatInfo {
            kind: RepeatUnit::None,
            interval: 1,
            end_date: None,
        }
    }

    /// The validated rule, or `None` for a single event.
    fn spec(&self, title: &str) -> RepcalResult<Option<RecurrenceSpec>> {
        if !self.kind.is_repeating() {
            return Ok(None);
        }

        let end_date = self
            .end_date
            .ok_or_else(|| RepcalError::MissingEndDate(title.to_string()))?;

        RecurrenceSpec::new(self.kind, self.interval, end_date).map(Some)
    }
}

/// An event as submitted from a form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub date: CalendarDate,
    #[serde(with = "hm_time")]
    pub start_time: NaiveTime,
    #[serde(with = "hm_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before start to notify
    #[serde(default = "default_notification_time")]
    pub notification_time: u32,
}

impl EventDraft {
    pub fn is_recurring(&self) -> bool {
        self.repeat.kind.is_repeating()
    }

    /// One draft per occurrence date, in date order.
    ///
    /// A single event yields itself. A repeating event needs an end date.
    pub fn occurrences(&self) -> RepcalResult<Vec<EventDraft>> {
        let Some(spec) = self.repeat.spec(&self.title)? else {
            return Ok(vec![self.clone()]);
        };

        Ok(expand_spec(self.date, &spec)
            .into_iter()
            .map(|date| EventDraft {
                date,
                ..self.clone()
            })
            .collect())
    }

    /// Assign a fresh id.
    pub fn into_event(self) -> Event {
        Event {
            id: Uuid::new_v4().to_string(),
            draft: self,
        }
    }

    /// Expand into stored events, one per occurrence.
    pub fn into_series(self) -> RepcalResult<Vec<Event>> {
        Ok(self
            .occurrences()?
            .into_iter()
            .map(EventDraft::into_event)
            .collect())
    }
}

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub draft: EventDraft,
}

impl Event {
    pub fn is_recurring(&self) -> bool {
        self.draft.is_recurring()
    }

    /// Turn an edited occurrence into a standalone single event.
    pub fn detach(mut self) -> Event {
        self.draft.repeat = RepeatInfo::none();
        self
    }
}

/// `HH:MM` wall-clock times.
mod hm_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTHLY_DRAFT: &str = r#"{
        "title": "Monthly review",
        "date": "2024-11-01",
        "startTime": "10:00",
        "endTime": "11:00",
        "description": "Review notes",
        "location": "Room 2",
        "category": "Work",
        "repeat": { "type": "monthly", "interval": 1, "endDate": "2025-02-01" },
        "notificationTime": 10
    }"#;

    fn monthly_draft() -> EventDraft {
        serde_json::from_str(MONTHLY_DRAFT).unwrap()
    }

    #[test]
    fn parses_draft_json() {
        let draft = monthly_draft();
        assert_eq!(draft.date.to_string(), "2024-11-01");
        assert_eq!(draft.start_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(draft.repeat.kind, RepeatUnit::Monthly);
        assert_eq!(draft.repeat.end_date.unwrap().to_string(), "2025-02-01");
        assert!(draft.is_recurring());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let draft: EventDraft = serde_json::from_str(
            r#"{"title": "Lunch", "date": "2024-11-03", "startTime": "12:00", "endTime": "13:00"}"#,
        )
        .unwrap();
        assert_eq!(draft.repeat, RepeatInfo::none());
        assert_eq!(draft.notification_time, 10);
        assert!(draft.description.is_empty());
        assert!(!draft.is_recurring());
    }

    #[test]
    fn rejects_bad_time() {
        let result = serde_json::from_str::<EventDraft>(
            r#"{"title": "x", "date": "2024-11-03", "startTime": "25:00", "endTime": "13:00"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn occurrences_copy_everything_but_date() {
        let draft = monthly_draft();
        let occurrences = draft.occurrences().unwrap();

        let dates: Vec<String> = occurrences.iter().map(|o| o.date.to_string()).collect();
        assert_eq!(dates, ["2024-11-01", "2024-12-01", "2025-01-01", "2025-02-01"]);

        for occurrence in &occurrences {
            assert_eq!(
                EventDraft {
                    date: draft.date,
                    ..occurrence.clone()
                },
                draft
            );
        }
    }

    #[test]
    fn single_event_yields_itself() {
        let mut draft = monthly_draft();
        draft.repeat = RepeatInfo::none();
        assert_eq!(draft.occurrences().unwrap(), vec![draft.clone()]);
    }

    #[test]
    fn repeating_without_end_date_fails() {
        let mut draft = monthly_draft();
        draft.repeat.end_date = None;
        let err = draft.occurrences().unwrap_err();
        assert!(matches!(err, RepcalError::MissingEndDate(ref t) if t == "Monthly review"));
    }

    #[test]
    fn zero_interval_is_rejected_on_expand() {
        let mut draft = monthly_draft();
        draft.repeat.interval = 0;
        assert!(matches!(
            draft.into_series(),
            Err(RepcalError::InvalidInterval(0))
        ));
    }

    #[test]
    fn series_events_get_distinct_ids() {
        let events = monthly_draft().into_series().unwrap();
        assert_eq!(events.len(), 4);

        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn detaching_an_occurrence_makes_it_single() {
        let event = monthly_draft().into_series().unwrap().remove(0);
        let id = event.id.clone();
        assert!(event.is_recurring());

        let mut edited = event.detach();
        edited.draft.title = "One-off".to_string();

        assert!(!edited.is_recurring());
        assert_eq!(edited.id, id);
        assert_eq!(edited.draft.repeat, RepeatInfo::none());
    }

    #[test]
    fn event_json_is_flat() {
        let event = monthly_draft().into_event();
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["id"], event.id.as_str());
        assert_eq!(value["date"], "2024-11-01");
        assert_eq!(value["startTime"], "10:00");
        assert_eq!(value["repeat"]["type"], "monthly");
        assert_eq!(value["repeat"]["endDate"], "2025-02-01");
        assert_eq!(value["notificationTime"], 10);
    }
}
