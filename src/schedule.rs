//! Blind schedule engine.
//!
//! Decides, for a given day and instant, whether the blinds should be
//! commanded open, commanded closed, or left alone.  The schedule is
//! **edge-triggered**: it fires only when the clock reads the configured
//! instant exactly (hour, minute and second all equal), matching the
//! reference RTC behaviour.  A poll cadence longer than one second can
//! therefore skip a transition — the control loop interval must stay at
//! or below 1 s.
//!
//! Weekend days never fire, regardless of time.  Day validity is the
//! caller's concern: this module only sees an already-parsed [`Weekday`].

use crate::timekeeping::{DayKind, TimeOfDay, Weekday};

/// Action requested by the schedule for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindAction {
    Open,
    Close,
}

/// Workday open/close schedule over two exact instants.
#[derive(Debug, Clone, Copy)]
pub struct BlindSchedule {
    open_at: TimeOfDay,
    close_at: TimeOfDay,
}

impl BlindSchedule {
    pub const fn new(open_at: TimeOfDay, close_at: TimeOfDay) -> Self {
        Self { open_at, close_at }
    }

    /// The action to take at `now` on `day`, if any.
    ///
    /// `None` means "no transition this tick" — the dominant case, since
    /// the triggers are single-instant edges, not range checks.
    pub fn action_at(&self, day: Weekday, now: TimeOfDay) -> Option<BlindAction> {
        match day.kind() {
            DayKind::Weekend => None,
            DayKind::Workday => {
                if now == self.open_at {
                    Some(BlindAction::Open)
                } else if now == self.close_at {
                    Some(BlindAction::Close)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sched() -> BlindSchedule {
        BlindSchedule::new(
            TimeOfDay::new(8, 0, 0).unwrap(),
            TimeOfDay::new(20, 0, 0).unwrap(),
        )
    }

    #[test]
    fn opens_at_eight_on_workday() {
        let t = TimeOfDay::new(8, 0, 0).unwrap();
        assert_eq!(sched().action_at(Weekday::Monday, t), Some(BlindAction::Open));
        assert_eq!(sched().action_at(Weekday::Friday, t), Some(BlindAction::Open));
    }

    #[test]
    fn closes_at_twenty_on_workday() {
        let t = TimeOfDay::new(20, 0, 0).unwrap();
        assert_eq!(
            sched().action_at(Weekday::Wednesday, t),
            Some(BlindAction::Close)
        );
    }

    #[test]
    fn off_instant_does_nothing() {
        for t in [
            TimeOfDay::new(0, 0, 0).unwrap(),
            TimeOfDay::new(7, 59, 59).unwrap(),
            TimeOfDay::new(8, 0, 1).unwrap(), // one second past the edge
            TimeOfDay::new(12, 30, 0).unwrap(),
            TimeOfDay::new(19, 59, 59).unwrap(),
            TimeOfDay::new(20, 0, 1).unwrap(),
        ] {
            assert_eq!(sched().action_at(Weekday::Tuesday, t), None, "at {t}");
        }
    }

    #[test]
    fn weekend_never_fires() {
        for day in [Weekday::Saturday, Weekday::Sunday] {
            for t in [
                TimeOfDay::new(8, 0, 0).unwrap(),
                TimeOfDay::new(20, 0, 0).unwrap(),
            ] {
                assert_eq!(sched().action_at(day, t), None, "{day:?} at {t}");
            }
        }
    }
}
