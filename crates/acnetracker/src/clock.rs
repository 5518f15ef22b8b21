//! Wall-clock access and timestamp defaults.
//!
//! A fresh entry is pre-filled with the current date, weekday and time. The
//! computation is a pure function of a [`NaiveDateTime`]; the [`Clock`] trait
//! only decides *which* instant is "now".

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Weekday names indexed from Sunday = 0.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Source of the current local time.
pub trait Clock: std::fmt::Debug {
    /// The current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The three values seeded into every fresh entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampDefaults {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `Sunday` through `Saturday`.
    pub day_of_week: String,
    /// `HH:MM`, 24-hour.
    pub time_of_entry: String,
}

impl TimestampDefaults {
    /// Compute the defaults for the given wall-clock time.
    #[must_use]
    pub fn at(now: NaiveDateTime) -> Self {
        let weekday = now.weekday().num_days_from_sunday() as usize;
        Self {
            date: format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day()),
            day_of_week: DAY_NAMES[weekday].to_string(),
            time_of_entry: format!("{:02}:{:02}", now.hour(), now.minute()),
        }
    }

    /// Compute the defaults for the clock's current time.
    #[must_use]
    pub fn now(clock: &dyn Clock) -> Self {
        Self::at(clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_friday_morning() {
        let defaults = TimestampDefaults::at(at(2025, 3, 14, 9, 5));
        assert_eq!(defaults.date, "2025-03-14");
        assert_eq!(defaults.day_of_week, "Friday");
        assert_eq!(defaults.time_of_entry, "09:05");
    }

    #[test]
    fn test_sunday_is_index_zero() {
        let defaults = TimestampDefaults::at(at(2025, 3, 16, 0, 0));
        assert_eq!(defaults.day_of_week, DAY_NAMES[0]);
        assert_eq!(defaults.time_of_entry, "00:00");
    }

    #[test]
    fn test_saturday_late_evening() {
        let defaults = TimestampDefaults::at(at(2025, 12, 27, 23, 59));
        assert_eq!(defaults.date, "2025-12-27");
        assert_eq!(defaults.day_of_week, "Saturday");
        assert_eq!(defaults.time_of_entry, "23:59");
    }

    #[test]
    fn test_leap_day() {
        let defaults = TimestampDefaults::at(at(2024, 2, 29, 12, 30));
        assert_eq!(defaults.date, "2024-02-29");
        assert_eq!(defaults.day_of_week, "Thursday");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(at(2025, 1, 1, 7, 3));
        assert_eq!(clock.now(), at(2025, 1, 1, 7, 3));
        let defaults = TimestampDefaults::now(&clock);
        assert_eq!(defaults.day_of_week, "Wednesday");
        assert_eq!(defaults.time_of_entry, "07:03");
    }

    #[test]
    fn test_system_clock_formats() {
        let defaults = TimestampDefaults::now(&SystemClock);
        assert_eq!(defaults.date.len(), 10);
        assert_eq!(defaults.time_of_entry.len(), 5);
        assert!(DAY_NAMES.contains(&defaults.day_of_week.as_str()));
    }
}
