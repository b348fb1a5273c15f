//! Wall-clock time values used by shift windows.
//!
//! Shift times travel as strings (`"08:00"`, `"08:00:00"` from the backend,
//! whatever the user typed on the command line). Everything is normalized to
//! a [`TimeOfDay`] holding hour and minute only; seconds are truncated, never
//! rounded. The derived ordering matches the lexicographic order of the
//! zero-padded `HH:MM` form.
//!
//! `24:00` is accepted as a value so a shift can end at midnight. Any other
//! `24:MM` is rejected, there is no rollover into the next day.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a usable `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time is empty")]
    Empty,
    #[error("'{0}' is not in HH:MM format")]
    Format(String),
    #[error("'{0}' is out of range")]
    Range(String),
}

/// Hour and minute of a day, `00:00` through `24:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// `24:00`, the latest exit time.
    pub const MIDNIGHT_END: TimeOfDay = TimeOfDay { hour: 24, minute: 0 };

    /// Builds a time, returning `None` outside `00:00..=24:00`.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if minute > 59 || hour > 24 || (hour == 24 && minute > 0) {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Const constructor for compile-time bounds. Panics on invalid input.
    pub const fn hm(hour: u8, minute: u8) -> Self {
        match Self::new(hour, minute) {
            Some(time) => time,
            None => panic!("invalid time of day"),
        }
    }

    /// Hour, `0..=24`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since `00:00`.
    pub fn minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Parses `H:MM`, `HH:MM` or `HH:MM:SS`. Seconds are discarded.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let mut parts = trimmed.split(':');
        let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
            return Err(TimeParseError::Format(trimmed.to_string()));
        };
        // Seconds, when present, only need to be numeric.
        if let Some(seconds) = parts.next() {
            if seconds.parse::<u8>().is_err() || parts.next().is_some() {
                return Err(TimeParseError::Format(trimmed.to_string()));
            }
        }
        if minute.len() != 2 || hour.is_empty() || hour.len() > 2 {
            return Err(TimeParseError::Format(trimmed.to_string()));
        }

        let hour: u8 = hour.parse().map_err(|_| TimeParseError::Format(trimmed.to_string()))?;
        let minute: u8 = minute.parse().map_err(|_| TimeParseError::Format(trimmed.to_string()))?;

        Self::new(hour, minute).ok_or_else(|| TimeParseError::Range(trimmed.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One continuous work period. Accepted windows always have `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ShiftWindow {
    /// Pairs two times without checking their order.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Raw length of the window in minutes; zero when the window is inverted.
    pub fn span_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

impl fmt::Display for ShiftWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_are_truncated() {
        assert_eq!(TimeOfDay::parse("08:59:59").unwrap(), TimeOfDay::hm(8, 59));
    }

    #[test]
    fn single_digit_hour_is_padded() {
        assert_eq!(TimeOfDay::parse("5:00").unwrap().to_string(), "05:00");
    }

    #[test]
    fn midnight_end_is_the_only_24_value() {
        assert_eq!(TimeOfDay::parse("24:00").unwrap(), TimeOfDay::MIDNIGHT_END);
        assert!(matches!(TimeOfDay::parse("24:30"), Err(TimeParseError::Range(_))));
        assert!(matches!(TimeOfDay::parse("25:00"), Err(TimeParseError::Range(_))));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(TimeOfDay::parse("  "), Err(TimeParseError::Empty));
        assert!(matches!(TimeOfDay::parse("0800"), Err(TimeParseError::Format(_))));
        assert!(matches!(TimeOfDay::parse("08:5"), Err(TimeParseError::Format(_))));
        assert!(matches!(TimeOfDay::parse("aa:bb"), Err(TimeParseError::Format(_))));
    }

    #[test]
    fn ordering_matches_string_order() {
        let times = ["05:00", "09:59", "10:00", "13:30", "24:00"];
        for pair in times.windows(2) {
            let a = TimeOfDay::parse(pair[0]).unwrap();
            let b = TimeOfDay::parse(pair[1]).unwrap();
            assert!(a < b);
            assert!(a.to_string() < b.to_string());
        }
    }
}
