//! Office controller — the hexagonal core.
//!
//! [`OfficeController`] owns the three state flags and exposes the
//! decision operations the poll loop invokes each tick.  All I/O flows
//! through port traits injected at call sites, making the controller
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  ClockPort  ──▶ │    OfficeController     │
//! ActuatorPort ◀──│  schedule · dead-bands  │
//!                 └────────────────────────┘
//! ```
//!
//! Invariant: a state flag changes only together with the actuator
//! command that realises it.  The three regulated domains (blinds, light,
//! fan) are independent two-state machines; they share nothing but the
//! controller struct.

use log::{info, warn};

use crate::config::SystemConfig;
use crate::control::hysteresis::DeadBand;
use crate::error::Result;
use crate::schedule::{BlindAction, BlindSchedule};
use crate::timekeeping::Weekday;

use super::events::AppEvent;
use super::ports::{presence_detected, ActuatorPort, ClockPort, EventSink, SensorPort};

/// Blind angle commanded at the open edge (degrees).
pub const BLIND_OPEN_DEG: f32 = 180.0;
/// Blind angle commanded at the close edge (degrees).
pub const BLIND_CLOSED_DEG: f32 = 0.0;

// ───────────────────────────────────────────────────────────────
// Controller state
// ───────────────────────────────────────────────────────────────

/// The three actuator-backed flags.  Owned exclusively by the controller;
/// each flag mirrors the last command issued for its actuator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub blinds_open: bool,
    pub light_on: bool,
    pub fan_on: bool,
}

// ───────────────────────────────────────────────────────────────
// OfficeController
// ───────────────────────────────────────────────────────────────

/// The controller orchestrates all decision logic.
pub struct OfficeController {
    state: ControllerState,
    schedule: BlindSchedule,
    light_band: DeadBand,
    co2_band: DeadBand,
}

impl OfficeController {
    /// Construct the controller from configuration.  All flags start
    /// false — blinds closed, light off, fan off.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: ControllerState::default(),
            schedule: BlindSchedule::new(config.blinds_open_at, config.blinds_close_at),
            light_band: DeadBand::new(config.lux_min, config.lux_max),
            co2_band: DeadBand::new(config.co2_fan_off_ppm, config.co2_fan_on_ppm),
        }
    }

    /// Announce startup through the event sink.
    pub fn start(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("OfficeController started, state={:?}", self.state);
    }

    // ── Decision operations ───────────────────────────────────

    /// Whether the infrared ceiling sensor currently detects someone.
    ///
    /// Pure query: one sensor read, no state mutation, no actuator
    /// commands.
    pub fn is_occupied(&self, hw: &mut impl SensorPort) -> bool {
        presence_detected(hw.read_occupancy())
    }

    /// Open or close the blinds when the workday open/close instant is hit.
    ///
    /// Weekend days are a no-op regardless of time.  An unrecognised day
    /// label fails with [`Error::InvalidDay`](crate::error::Error) before
    /// any actuator command — a clock that has lost its calendar must not
    /// move the blinds.
    pub fn update_blinds(
        &mut self,
        clock: &mut impl ClockPort,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        let day = Weekday::parse(&clock.today())?;
        let now = clock.now();

        match self.schedule.action_at(day, now) {
            Some(BlindAction::Open) => {
                info!("Blinds opening ({day:?} {now})");
                hw.drive_blinds(BLIND_OPEN_DEG);
                self.set_blinds_flag(true, sink);
            }
            Some(BlindAction::Close) => {
                info!("Blinds closing ({day:?} {now})");
                hw.drive_blinds(BLIND_CLOSED_DEG);
                self.set_blinds_flag(false, sink);
            }
            None => {}
        }
        Ok(())
    }

    /// Keep the ambient light level inside the configured lux band while
    /// the room is occupied.
    ///
    /// Vacancy overrides everything: the light is commanded off and the
    /// light sensor is **not** read — regulation is suspended, not merely
    /// biased off.  Re-occupancy resumes normal threshold evaluation on
    /// the next call with no special re-entry handling.
    pub fn regulate_light(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        if !self.is_occupied(hw) {
            hw.set_light(false);
            self.set_light_flag(false, sink);
            return;
        }

        let lux = hw.read_light_level();
        match self.light_band.demand_below(lux) {
            Some(on) => {
                hw.set_light(on);
                self.set_light_flag(on, sink);
            }
            None => {} // in-band: hold whatever the light was doing
        }
    }

    /// Run the exhaust fan when CO2 is elevated, with hysteresis.
    ///
    /// No occupancy gate — stale air is purged whether or not anyone is
    /// in the room.
    pub fn monitor_air_quality(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        let ppm = hw.read_co2_ppm();
        match self.co2_band.demand_above(ppm) {
            Some(on) => {
                if on != self.state.fan_on {
                    info!("Exhaust fan {} at {ppm} ppm", if on { "on" } else { "off" });
                }
                hw.set_fan(on);
                self.set_fan_flag(on, sink);
            }
            None => {} // in-band: hold
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: blinds, light, air quality.
    ///
    /// The three operations are independent; a blind-schedule clock fault
    /// does not stop light or air-quality regulation that tick, but it is
    /// still surfaced to the caller.
    pub fn tick(
        &mut self,
        clock: &mut impl ClockPort,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        let blinds = self.update_blinds(clock, hw, sink);
        if let Err(ref e) = blinds {
            warn!("Blind schedule skipped: {e}");
        }
        self.regulate_light(hw, sink);
        self.monitor_air_quality(hw, sink);
        blinds
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current flag snapshot.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    // ── Internal flag/event co-update ─────────────────────────
    //
    // The actuator command is always issued by the caller first; these
    // helpers then update the flag and emit an event only on an actual
    // transition (level-set commands may be re-issued harmlessly).

    fn set_blinds_flag(&mut self, open: bool, sink: &mut impl EventSink) {
        if self.state.blinds_open != open {
            self.state.blinds_open = open;
            sink.emit(&AppEvent::BlindsMoved { open });
        }
    }

    fn set_light_flag(&mut self, on: bool, sink: &mut impl EventSink) {
        if self.state.light_on != on {
            self.state.light_on = on;
            sink.emit(&AppEvent::LightSwitched { on });
        }
    }

    fn set_fan_flag(&mut self, on: bool, sink: &mut impl EventSink) {
        if self.state.fan_on != on {
            self.state.fan_on = on;
            sink.emit(&AppEvent::FanSwitched { on });
        }
    }
}
