//! Core types for repcal.
//!
//! This crate provides the recurrence expander and the types around it:
//! - `CalendarDate`, `RepeatUnit` and `RecurrenceSpec` for describing a rule
//! - `recurrence` for turning a rule into its occurrence dates
//! - `event` for expanding stored event records into a series

pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod recurrence;
pub mod repeat;

pub use date::CalendarDate;
pub use error::{RepcalError, RepcalResult};
pub use recurrence::{expand, expand_spec, expand_str};
pub use repeat::{RecurrenceSpec, RepeatUnit};
