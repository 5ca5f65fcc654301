//! Countdown to the event start.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use thiserror::Error;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Label shown once the event has started.
pub const STARTED_LABEL: &str = "EVENT STARTED";

/// Errors from configuring the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// The target was neither RFC 3339 nor `YYYY-MM-DDTHH:MM:SS`.
    #[error("invalid event start {input:?}: expected RFC 3339 or YYYY-MM-DDTHH:MM:SS")]
    InvalidTarget {
        /// Rejected input.
        input: String,
    },
}

/// Time left split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    /// Whole days.
    pub days: i64,
    /// Hours past the last whole day (0-23).
    pub hours: i64,
    /// Minutes past the last whole hour (0-59).
    pub minutes: i64,
    /// Seconds past the last whole minute (0-59).
    pub seconds: i64,
}

impl CountdownParts {
    /// Split a non-negative millisecond distance with floor arithmetic.
    pub fn from_millis(distance: i64) -> Self {
        let distance = distance.max(0);
        Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Each unit zero-padded to at least two digits.
    pub fn padded(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|value| format!("{value:02}"))
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d, h, m, s] = self.padded();
        write!(f, "{d}d {h}h {m}m {s}s")
    }
}

/// What the countdown shows at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Time remaining.
    Running(CountdownParts),
    /// The target has passed.
    Started,
}

impl CountdownState {
    /// Whether the event has started.
    pub fn is_started(&self) -> bool {
        matches!(self, CountdownState::Started)
    }
}

/// Countdown towards a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    /// Count down to `target`.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Parse an RFC 3339 instant or a naive `YYYY-MM-DDTHH:MM:SS` (as UTC).
    pub fn parse(input: &str) -> Result<Self, CountdownError> {
        let trimmed = input.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::new(instant.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| Self::new(Utc.from_utc_datetime(&naive)))
            .map_err(|_| CountdownError::InvalidTarget {
                input: input.to_string(),
            })
    }

    /// Target instant.
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// State at `now`. The target instant itself still counts as running.
    pub fn state_at(&self, now: DateTime<Utc>) -> CountdownState {
        let distance = (self.target - now).num_milliseconds();
        if distance < 0 {
            CountdownState::Started
        } else {
            CountdownState::Running(CountdownParts::from_millis(distance))
        }
    }

    /// State right now.
    pub fn state(&self) -> CountdownState {
        self.state_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let countdown = Countdown::parse("2026-12-01T10:00:00+02:00").unwrap();
        assert_eq!(countdown.target(), at("2026-12-01T08:00:00Z"));
    }

    #[test]
    fn parses_naive_as_utc() {
        let countdown = Countdown::parse("2026-12-01T10:00:00").unwrap();
        assert_eq!(countdown.target(), at("2026-12-01T10:00:00Z"));
    }

    #[test]
    fn rejects_garbage() {
        let err = Countdown::parse("next tuesday").unwrap_err();
        assert_eq!(
            err,
            CountdownError::InvalidTarget {
                input: "next tuesday".into()
            }
        );
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn splits_remaining_time() {
        let countdown = Countdown::new(at("2026-12-01T00:00:00Z"));
        let now = at("2026-12-01T00:00:00Z")
            - Duration::days(3)
            - Duration::hours(4)
            - Duration::minutes(5)
            - Duration::seconds(6)
            - Duration::milliseconds(700);
        assert_eq!(
            countdown.state_at(now),
            CountdownState::Running(CountdownParts {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            })
        );
    }

    #[test]
    fn pads_to_two_digits() {
        let parts = CountdownParts::from_millis(MS_PER_DAY * 120 + 9 * MS_PER_SECOND);
        assert_eq!(parts.padded(), ["120", "00", "00", "09"].map(String::from));
        assert_eq!(parts.to_string(), "120d 00h 00m 09s");
    }

    #[test]
    fn expires_after_target() {
        let target = at("2026-06-01T12:00:00Z");
        let countdown = Countdown::new(target);
        assert!(!countdown.state_at(target).is_started());
        assert!(countdown
            .state_at(target + Duration::milliseconds(1))
            .is_started());
    }
}
