//! Level-set binary output driver (smart bulb relay, exhaust fan relay).
//!
//! A dumb actuator: the commanded level is held until the next command.
//! Occupancy gating, hysteresis and every other decision live in the
//! controller — this driver only translates `on`/`off` into a pin level.

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Off,
    On,
}

pub struct Relay<Pin> {
    pin: Pin,
    state: RelayState,
}

impl<Pin: OutputPin> Relay<Pin> {
    /// Wrap an output pin.  The pin is assumed to start low (off).
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            state: RelayState::Off,
        }
    }

    /// Set the output level.  Idempotent: re-commanding the held level is
    /// a plain pin write with no side effects.
    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
        .map_err(|_| ActuatorError::GpioWriteFailed)?;

        self.state = if on { RelayState::On } else { RelayState::Off };
        Ok(())
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == RelayState::On
    }
}
