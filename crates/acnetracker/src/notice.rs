//! Transient confirmation shown after an entry is added.

use chrono::{NaiveDateTime, TimeDelta};

/// Default time a notice stays up.
pub const DEFAULT_NOTICE_SECONDS: u64 = 3;

/// Text of the confirmation shown after a submission.
pub const ENTRY_ADDED: &str = "Success! Entry added. Fill out for a new day.";

/// A message that dismisses itself after a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: &'static str,
    shown_at: NaiveDateTime,
    duration: TimeDelta,
}

impl Notice {
    /// Show `message` at `shown_at` for `seconds`.
    #[must_use]
    pub fn new(message: &'static str, shown_at: NaiveDateTime, seconds: u64) -> Self {
        let duration = i64::try_from(seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            message,
            shown_at,
            duration,
        }
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Whether the notice is still up at `now`.
    #[must_use]
    pub fn is_visible(&self, now: NaiveDateTime) -> bool {
        let elapsed = now - self.shown_at;
        elapsed >= TimeDelta::zero() && elapsed < self.duration
    }
}
