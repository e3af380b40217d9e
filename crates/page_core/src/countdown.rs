//! Countdown arithmetic for the event-start readout.

use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time until the event, split into display fields.
///
/// Derived by floor division and modulo over `max(0, target - now)` in
/// milliseconds. Once the target passes, every field pins to zero and the
/// readout keeps rendering zeros; there is no stop condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining_ms = (target - now).num_milliseconds().max(0);
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: remaining_ms / MS_PER_HOUR % 24,
            minutes: remaining_ms / MS_PER_MINUTE % 60,
            seconds: remaining_ms / MS_PER_SECOND % 60,
        }
    }

    /// Days render unpadded.
    pub fn days_label(&self) -> String {
        self.days.to_string()
    }

    pub fn hours_label(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn minutes_label(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn seconds_label(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

#[cfg(test)]
#[path = "tests/countdown_tests.rs"]
mod tests;
