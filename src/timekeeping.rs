//! Time-of-day and day-of-week primitives.
//!
//! The clock collaborator delivers a numeric [`TimeOfDay`] and a raw
//! calendar label.  Day parsing is the core's job: an unrecognised label is
//! a parse failure ([`Error::InvalidDay`]), not a logic-branch fallthrough,
//! so a malfunctioning RTC surfaces as a typed error before any decision
//! rule runs.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Raw day-of-week label as delivered by the clock source.
/// 12 bytes fits the longest English day name ("WEDNESDAY").
pub type DayLabel = heapless::String<12>;

// ---------------------------------------------------------------------------
// TimeOfDay
// ---------------------------------------------------------------------------

/// A wall-clock instant within one day, second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    /// Construct a validated instant.  Returns `None` for out-of-range
    /// fields (hour > 23, minute/second > 59).
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Parse an RTC-style `"HH:MM:SS"` string.
    ///
    /// Strict format: exactly two digits per field, `:` separators.
    /// Returns `None` on any malformed or out-of-range input.
    pub fn parse_hms(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return None;
        }
        let field = |hi: usize, lo: usize| -> Option<u8> {
            let (hi, lo) = (bytes[hi], bytes[lo]);
            if hi.is_ascii_digit() && lo.is_ascii_digit() {
                Some((hi - b'0') * 10 + (lo - b'0'))
            } else {
                None
            }
        };
        Self::new(field(0, 1)?, field(3, 4)?, field(6, 7)?)
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Closed enumeration of the seven days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Total classification of a [`Weekday`] for scheduling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Workday,
    Weekend,
}

impl Weekday {
    /// Parse a raw calendar label (ASCII case-insensitive English day name).
    ///
    /// Anything outside the seven recognised names signals a clock/calendar
    /// malfunction and fails with [`Error::InvalidDay`] carrying a truncated
    /// copy of the label.
    pub fn parse(label: &str) -> crate::error::Result<Self> {
        let day = [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
        .into_iter()
        .find(|d| label.eq_ignore_ascii_case(d.name()));

        day.ok_or_else(|| {
            let mut copy = DayLabel::new();
            for c in label.chars().take(copy.capacity()) {
                if copy.push(c).is_err() {
                    break;
                }
            }
            Error::InvalidDay(copy)
        })
    }

    /// Canonical uppercase name, matching the reference RTC encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    /// Total mapping into workday/weekend — every variant is covered, so
    /// the schedule never needs an "unknown day" branch.
    pub const fn kind(self) -> DayKind {
        match self {
            Self::Monday | Self::Tuesday | Self::Wednesday | Self::Thursday | Self::Friday => {
                DayKind::Workday
            }
            Self::Saturday | Self::Sunday => DayKind::Weekend,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(0, 60, 0).is_none());
        assert!(TimeOfDay::new(0, 0, 60).is_none());
        assert!(TimeOfDay::new(23, 59, 59).is_some());
    }

    #[test]
    fn parse_hms_accepts_rtc_format() {
        assert_eq!(
            TimeOfDay::parse_hms("08:00:00"),
            Some(TimeOfDay::new(8, 0, 0).unwrap())
        );
        assert_eq!(
            TimeOfDay::parse_hms("23:59:59"),
            Some(TimeOfDay::new(23, 59, 59).unwrap())
        );
    }

    #[test]
    fn parse_hms_rejects_malformed() {
        for s in ["8:00:00", "08-00-00", "08:00", "08:00:00 ", "ab:cd:ef", "25:00:00", ""] {
            assert_eq!(TimeOfDay::parse_hms(s), None, "should reject {s:?}");
        }
    }

    #[test]
    fn time_of_day_ordering_follows_clock() {
        let morning = TimeOfDay::new(8, 0, 0).unwrap();
        let evening = TimeOfDay::new(20, 0, 0).unwrap();
        assert!(morning < evening);
    }

    #[test]
    fn weekday_parse_all_seven() {
        for (label, day) in [
            ("MONDAY", Weekday::Monday),
            ("TUESDAY", Weekday::Tuesday),
            ("WEDNESDAY", Weekday::Wednesday),
            ("THURSDAY", Weekday::Thursday),
            ("FRIDAY", Weekday::Friday),
            ("SATURDAY", Weekday::Saturday),
            ("SUNDAY", Weekday::Sunday),
        ] {
            assert_eq!(Weekday::parse(label).unwrap(), day);
        }
    }

    #[test]
    fn weekday_parse_is_case_insensitive() {
        assert_eq!(Weekday::parse("Monday").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("sunday").unwrap(), Weekday::Sunday);
    }

    #[test]
    fn weekday_parse_rejects_garbage() {
        for label in ["FUNDAY", "MON", "", "MONDAY "] {
            assert!(
                matches!(Weekday::parse(label), Err(Error::InvalidDay(_))),
                "should reject {label:?}"
            );
        }
    }

    #[test]
    fn invalid_day_error_carries_truncated_label() {
        let err = Weekday::parse("ABSOLUTELY-NOT-A-DAY").unwrap_err();
        match err {
            Error::InvalidDay(label) => {
                assert_eq!(label.as_str(), "ABSOLUTELY-N");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn day_kind_total_mapping() {
        assert_eq!(Weekday::Monday.kind(), DayKind::Workday);
        assert_eq!(Weekday::Friday.kind(), DayKind::Workday);
        assert_eq!(Weekday::Saturday.kind(), DayKind::Weekend);
        assert_eq!(Weekday::Sunday.kind(), DayKind::Weekend);
    }
}
