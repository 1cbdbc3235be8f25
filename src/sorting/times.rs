use std::fmt;

use super::insertion_sort;

/// A time of day. Ordering is chronological.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// Creates a time from its components.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Hours past midnight.
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes past the hour.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds past the minute.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

/// Formats as `HH:MM:SS`.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Sorts times from earliest to latest. Equal times end up next to each other.
pub fn sort_times(times: &mut [Time]) {
    insertion_sort(times);
}
