//! Host clock adapter.
//!
//! Implements [`ClockPort`] over `std::time::SystemTime` (UTC).  On a
//! target board the same trait would wrap the battery-backed RTC; the
//! controller only ever sees a [`TimeOfDay`] and a raw day label.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::ports::ClockPort;
use crate::timekeeping::{DayLabel, TimeOfDay, Weekday};

const SECS_PER_DAY: u64 = 86_400;

pub struct HostClock;

impl HostClock {
    pub fn new() -> Self {
        Self
    }

    fn unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl ClockPort for HostClock {
    fn now(&mut self) -> TimeOfDay {
        let day_secs = self.unix_secs() % SECS_PER_DAY;
        TimeOfDay {
            hour: (day_secs / 3600) as u8,
            minute: (day_secs / 60 % 60) as u8,
            second: (day_secs % 60) as u8,
        }
    }

    fn today(&mut self) -> DayLabel {
        // 1970-01-01 was a Thursday.
        let days = self.unix_secs() / SECS_PER_DAY;
        let day = match (days + 3) % 7 {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        };
        let mut label = DayLabel::new();
        // Canonical names always fit the label capacity.
        let _ = label.push_str(day.name());
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::ClockPort;

    #[test]
    fn now_is_in_range() {
        let t = HostClock::new().now();
        assert!(t.hour <= 23 && t.minute <= 59 && t.second <= 59);
    }

    #[test]
    fn today_parses_back() {
        let label = HostClock::new().today();
        assert!(Weekday::parse(&label).is_ok());
    }
}
