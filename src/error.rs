//! Unified error types for the OfficePulse controller.
//!
//! Follows embedded practice: a single `Error` enum that every subsystem
//! can convert into, keeping the poll loop's error handling uniform.
//! The decision operations surface exactly one domain error — a calendar
//! source reporting a day name outside the seven recognised values.

use core::fmt;

use crate::timekeeping::DayLabel;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The clock/calendar source reported an unrecognised day name.
    /// Carries a (truncated) copy of the offending label.
    InvalidDay(DayLabel),
    /// An actuator driver command failed.
    Actuator(ActuatorError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDay(label) => write!(f, "invalid day of week: {:?}", label.as_str()),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

/// Typed failures from the embedded-hal driver layer.  These never cross
/// the port boundary — the hardware adapter logs and drops them, keeping
/// actuator commands fire-and-forget from the controller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Controller-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
