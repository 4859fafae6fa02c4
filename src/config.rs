//! System configuration parameters
//!
//! All tunable parameters for the OfficePulse controller.  Defaults match
//! the reference installation (lux band 500–550, CO2 band 500–800 ppm,
//! blinds open 08:00 / close 20:00 on workdays).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timekeeping::TimeOfDay;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Light regulation ---
    /// Ambient light level below which the smart bulb turns on
    pub lux_min: u16,
    /// Ambient light level above which the smart bulb turns off
    pub lux_max: u16,

    // --- Air quality ---
    /// CO2 concentration (ppm) at or above which the exhaust fan turns on
    pub co2_fan_on_ppm: u16,
    /// CO2 concentration (ppm) below which the exhaust fan turns off
    pub co2_fan_off_ppm: u16,

    // --- Blind schedule ---
    /// Workday instant at which the blinds fully open
    pub blinds_open_at: TimeOfDay,
    /// Workday instant at which the blinds fully close
    pub blinds_close_at: TimeOfDay,

    // --- Timing ---
    /// Hold duration of the servo drive pulse (milliseconds)
    pub blind_pulse_ms: u32,
    /// Control loop interval (milliseconds).  Must stay at or below 1000
    /// or the exact-second blind trigger can be skipped entirely.
    pub control_loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Light band
            lux_min: 500,
            lux_max: 550,

            // CO2 band
            co2_fan_on_ppm: 800,
            co2_fan_off_ppm: 500,

            // Blind schedule (08:00:00 / 20:00:00, statically valid)
            blinds_open_at: TimeOfDay {
                hour: 8,
                minute: 0,
                second: 0,
            },
            blinds_close_at: TimeOfDay {
                hour: 20,
                minute: 0,
                second: 0,
            },

            // Timing
            blind_pulse_ms: 1000,
            control_loop_interval_ms: 1000, // 1 Hz
        }
    }
}

impl SystemConfig {
    /// Range-check the configuration.  Invalid values are rejected, not
    /// silently clamped.
    pub fn validate(&self) -> Result<()> {
        if self.lux_min > self.lux_max {
            return Err(Error::Config("lux_min must not exceed lux_max"));
        }
        if self.co2_fan_off_ppm >= self.co2_fan_on_ppm {
            return Err(Error::Config(
                "co2_fan_off_ppm must be below co2_fan_on_ppm to prevent oscillation",
            ));
        }
        if self.blinds_open_at == self.blinds_close_at {
            return Err(Error::Config("blind open and close instants coincide"));
        }
        if self.blind_pulse_ms == 0 {
            return Err(Error::Config("blind_pulse_ms must be non-zero"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(Error::Config("control_loop_interval_ms must be non-zero"));
        }
        Ok(())
    }
}
