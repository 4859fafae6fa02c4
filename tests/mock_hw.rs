//! Mock hardware adapter for integration tests.
//!
//! Records every sensor read and actuator call so tests can assert on the
//! full interaction history without touching real GPIO/PWM.

use officepulse::app::events::AppEvent;
use officepulse::app::ports::{ActuatorPort, ClockPort, EventSink, SensorPort};
use officepulse::timekeeping::{DayLabel, TimeOfDay};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    DriveBlinds { angle_deg: f32 },
    SetLight { on: bool },
    SetFan { on: bool },
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub occupancy_raw: u16,
    pub light_level: u16,
    pub co2_ppm: u16,

    pub calls: Vec<ActuatorCall>,
    pub occupancy_reads: u32,
    pub light_reads: u32,
    pub co2_reads: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            occupancy_raw: 1, // vacant unless a test says otherwise
            light_level: 525,
            co2_ppm: 600,
            calls: Vec::new(),
            occupancy_reads: 0,
            light_reads: 0,
            co2_reads: 0,
        }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }

    pub fn last_light_command(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetLight { on } => Some(*on),
            _ => None,
        })
    }

    pub fn last_fan_command(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetFan { on } => Some(*on),
            _ => None,
        })
    }

    pub fn last_blind_angle(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::DriveBlinds { angle_deg } => Some(*angle_deg),
            _ => None,
        })
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_occupancy(&mut self) -> u16 {
        self.occupancy_reads += 1;
        self.occupancy_raw
    }

    fn read_light_level(&mut self) -> u16 {
        self.light_reads += 1;
        self.light_level
    }

    fn read_co2_ppm(&mut self) -> u16 {
        self.co2_reads += 1;
        self.co2_ppm
    }
}

impl ActuatorPort for MockHardware {
    fn drive_blinds(&mut self, angle_deg: f32) {
        self.calls.push(ActuatorCall::DriveBlinds { angle_deg });
    }

    fn set_light(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetLight { on });
    }

    fn set_fan(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetFan { on });
    }
}

// ── MockClock ─────────────────────────────────────────────────

pub struct MockClock {
    pub day: String,
    pub now: TimeOfDay,
}

#[allow(dead_code)]
impl MockClock {
    pub fn at(day: &str, hms: &str) -> Self {
        Self {
            day: day.to_string(),
            now: TimeOfDay::parse_hms(hms).expect("test time must be valid HH:MM:SS"),
        }
    }
}

impl ClockPort for MockClock {
    fn now(&mut self) -> TimeOfDay {
        self.now
    }

    fn today(&mut self) -> DayLabel {
        let mut label = DayLabel::new();
        for c in self.day.chars().take(12) {
            let _ = label.push(c);
        }
        label
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
