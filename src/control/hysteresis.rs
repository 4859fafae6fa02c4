//! Dead-band (hysteresis) evaluation.
//!
//! Each regulated output is a two-state machine (OFF ⇄ ON) whose
//! transitions fire outside a configured band and whose default action
//! inside the band is "hold".  [`DeadBand`] captures the band; the two
//! evaluation directions cover both regulated outputs:
//!
//! - the light demands **on below** the band (too dark) and off above it,
//! - the exhaust fan demands **on above** the band (too much CO2) and off
//!   below it.

/// An inclusive-low / inclusive-high value band within which no state
/// transition occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadBand {
    pub low: u16,
    pub high: u16,
}

impl DeadBand {
    pub const fn new(low: u16, high: u16) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    /// Demand in the "on when low" direction (light regulation).
    ///
    /// - `reading < low`  → `Some(true)`  (turn on)
    /// - `reading > high` → `Some(false)` (turn off)
    /// - `low ..= high`   → `None`        (hold — the band itself never
    ///   forces a transition)
    pub fn demand_below(&self, reading: u16) -> Option<bool> {
        if reading < self.low {
            Some(true)
        } else if reading > self.high {
            Some(false)
        } else {
            None
        }
    }

    /// Demand in the "on when high" direction (air quality).
    ///
    /// - `reading >= high` → `Some(true)`  (turn on)
    /// - `reading < low`   → `Some(false)` (turn off)
    /// - `low .. high`     → `None`        (hold)
    pub fn demand_above(&self, reading: u16) -> Option<bool> {
        if reading >= self.high {
            Some(true)
        } else if reading < self.low {
            Some(false)
        } else {
            None
        }
    }
}
