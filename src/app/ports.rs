//! Port traits — the hexagonal boundary between decision logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OfficeController (domain)
//! ```
//!
//! Driven adapters (sensor front-ends, the RTC, actuator drivers, event
//! sinks) implement these traits.  The
//! [`OfficeController`](super::service::OfficeController) consumes them
//! via generics, so the decision core never touches hardware directly.

use crate::timekeeping::{DayLabel, TimeOfDay};

// ───────────────────────────────────────────────────────────────
// Occupancy sentinel decoding
// ───────────────────────────────────────────────────────────────

/// Raw occupancy reading that means "object present".
///
/// The reference infrared front-end pulls the data line to **zero** when
/// something is in front of it; any non-zero value means absent.  The
/// convention is easy to misread, so every comparison goes through
/// [`presence_detected`] instead of an inline `== 0`.
pub const OCCUPANCY_PRESENT_SENTINEL: u16 = 0;

/// Decode the sentinel-encoded occupancy reading.
#[inline]
pub const fn presence_detected(raw: u16) -> bool {
    raw == OCCUPANCY_PRESENT_SENTINEL
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the controller calls this to obtain sensor data.
///
/// Reads are individual and lazy on purpose — light regulation is
/// suspended while the room is vacant, and the contract that the light
/// sensor is *not* read in that case is only enforceable if each read is
/// a separate call.
pub trait SensorPort {
    /// Raw infrared occupancy reading (sentinel-encoded, see
    /// [`presence_detected`]).
    fn read_occupancy(&mut self) -> u16;

    /// Ambient light level, same numeric domain as the lux thresholds.
    fn read_light_level(&mut self) -> u16;

    /// CO2 concentration (ppm-like).
    fn read_co2_ppm(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source.  The day comes back as the raw calendar label so
/// that recognising it stays a parse step inside the core — a corrupted
/// RTC must surface as a typed error, not vanish into an `else` branch.
pub trait ClockPort {
    /// Current time of day.
    fn now(&mut self) -> TimeOfDay;

    /// Raw day-of-week label (e.g. `"MONDAY"`).
    fn today(&mut self) -> DayLabel;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the controller calls this to command actuators.
/// Commands are fire-and-forget — no acknowledgement or retry.
pub trait ActuatorPort {
    /// Drive the blinds to `angle_deg` (0.0 = fully closed, 180.0 = fully
    /// open).  Implementations issue a momentary pulse: assert drive, hold
    /// for the configured duration, release.
    fn drive_blinds(&mut self, angle_deg: f32);

    /// Level-set the smart light.
    fn set_light(&mut self, on: bool);

    /// Level-set the exhaust fan.
    fn set_fan(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, MQTT,
/// a dashboard, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
