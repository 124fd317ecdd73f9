//! Time source for timestamps and day keys

use std::fmt::Write;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Local};

/// Default layout for the timestamp at the start of each line
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S%.3f";

/// Default layout for the day key in log file names
pub const DEFAULT_DAY_FORMAT: &str = "%d-%m-%Y";

/// Render `at` with a strftime layout, using `fallback` if chrono rejects it
///
/// `DateTime::format(..).to_string()` panics on an invalid specifier, so the
/// layout is written through `fmt::Write` and the error is checked instead.
pub fn render(at: &DateTime<Local>, layout: &str, fallback: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(layout)).is_ok() {
        return out;
    }

    tracing::debug!(layout, "Invalid strftime layout, using fallback");
    out.clear();
    if write!(out, "{}", at.format(fallback)).is_err() {
        out.clear();
    }
    out
}

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the process's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
///
/// Lets hosts and tests replay a specific day or step over midnight.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Jump to a specific instant
    pub fn set(&self, now: DateTime<Local>) {
        if let Ok(mut current) = self.now.lock() {
            *current = now;
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        if let Ok(mut current) = self.now.lock() {
            *current += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.lock().map(|now| *now).unwrap_or_else(|_| Local::now())
    }
}
