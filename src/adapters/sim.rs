//! Simulated hardware adapter for host-side runs.
//!
//! Implements [`SensorPort`] and [`ActuatorPort`] over in-memory pins so
//! the full stack — controller, port boundary, embedded-hal drivers —
//! runs unchanged on a workstation.  Sensor readings are injectable;
//! actuator commands flow through the real [`Relay`] and [`BlindServo`]
//! drivers into shared atomics that can be inspected from outside.

use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::blind::BlindServo;
use crate::drivers::relay::Relay;

// ───────────────────────────────────────────────────────────────
// In-memory embedded-hal endpoints
// ───────────────────────────────────────────────────────────────

/// An output pin backed by a shared atomic level.
#[derive(Clone)]
pub struct SimPin {
    level: Arc<AtomicBool>,
}

impl SimPin {
    pub fn new() -> Self {
        Self {
            level: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_high(&self) -> bool {
        self.level.load(Ordering::Relaxed)
    }
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.store(true, Ordering::Relaxed);
        Ok(())
    }
}

/// A PWM channel backed by a shared atomic duty value.
#[derive(Clone)]
pub struct SimPwm {
    duty: Arc<AtomicU16>,
}

impl SimPwm {
    pub fn new() -> Self {
        Self {
            duty: Arc::new(AtomicU16::new(0)),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.load(Ordering::Relaxed)
    }
}

impl embedded_hal::pwm::ErrorType for SimPwm {
    type Error = core::convert::Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        1000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.store(duty, Ordering::Relaxed);
        Ok(())
    }
}

/// Delay source for the sim: a scaled-down `thread::sleep` so demos don't
/// stall for the full servo travel time.
pub struct SimDelay {
    scale_divisor: u32,
}

impl SimDelay {
    pub fn new(scale_divisor: u32) -> Self {
        Self {
            scale_divisor: scale_divisor.max(1),
        }
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(
            ns / self.scale_divisor,
        )));
    }
}

// ───────────────────────────────────────────────────────────────
// SimHardware
// ───────────────────────────────────────────────────────────────

/// The whole simulated office: injectable sensors, real drivers.
pub struct SimHardware {
    // Sensor injection
    occupancy_raw: u16,
    light_level: u16,
    co2_ppm: u16,

    // Actuators (shared endpoints kept for inspection)
    light: Relay<SimPin>,
    fan: Relay<SimPin>,
    blinds: BlindServo<SimPwm, SimPin, SimDelay>,
    light_pin: SimPin,
    fan_pin: SimPin,
    blind_pwm: SimPwm,
    last_blind_angle: f32,
}

impl SimHardware {
    pub fn new(blind_pulse_ms: u32) -> Self {
        let light_pin = SimPin::new();
        let fan_pin = SimPin::new();
        let blind_pwm = SimPwm::new();
        Self {
            occupancy_raw: 1, // vacant
            light_level: 520,
            co2_ppm: 450,
            light: Relay::new(light_pin.clone()),
            fan: Relay::new(fan_pin.clone()),
            // Sleep at 1/100 scale: a 1000 ms pulse costs 10 ms of demo time.
            blinds: BlindServo::new(blind_pwm.clone(), SimPin::new(), SimDelay::new(100))
                .with_pulse_ms(blind_pulse_ms),
            light_pin,
            fan_pin,
            blind_pwm,
            last_blind_angle: 0.0,
        }
    }

    // ── Sensor injection ──────────────────────────────────────

    pub fn set_presence(&mut self, present: bool) {
        self.occupancy_raw = if present { 0 } else { 1 };
    }

    pub fn set_light_level(&mut self, lux: u16) {
        self.light_level = lux;
    }

    pub fn set_co2_ppm(&mut self, ppm: u16) {
        self.co2_ppm = ppm;
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn light_pin_high(&self) -> bool {
        self.light_pin.is_high()
    }

    pub fn fan_pin_high(&self) -> bool {
        self.fan_pin.is_high()
    }

    pub fn last_blind_angle(&self) -> f32 {
        self.last_blind_angle
    }

    /// Live servo duty — zero between momentary pulses.
    pub fn blinds_duty_now(&self) -> u16 {
        self.blind_pwm.duty()
    }
}

impl SensorPort for SimHardware {
    fn read_occupancy(&mut self) -> u16 {
        self.occupancy_raw
    }

    fn read_light_level(&mut self) -> u16 {
        self.light_level
    }

    fn read_co2_ppm(&mut self) -> u16 {
        self.co2_ppm
    }
}

impl ActuatorPort for SimHardware {
    fn drive_blinds(&mut self, angle_deg: f32) {
        match self.blinds.drive_to(angle_deg) {
            Ok(()) => self.last_blind_angle = angle_deg,
            Err(e) => warn!("blind drive failed: {e}"),
        }
    }

    fn set_light(&mut self, on: bool) {
        if let Err(e) = self.light.set(on) {
            warn!("light relay failed: {e}");
        }
    }

    fn set_fan(&mut self, on: bool) {
        if let Err(e) = self.fan.set(on) {
            warn!("fan relay failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actuator_commands_reach_the_pins() {
        let mut hw = SimHardware::new(10);

        hw.set_light(true);
        assert!(hw.light_pin_high());
        hw.set_light(false);
        assert!(!hw.light_pin_high());

        hw.set_fan(true);
        assert!(hw.fan_pin_high());
    }

    #[test]
    fn blind_drive_records_angle_and_releases() {
        let mut hw = SimHardware::new(10);
        hw.drive_blinds(180.0);
        assert_eq!(hw.last_blind_angle(), 180.0);
        // Momentary pulse: no residual duty after the command.
        assert_eq!(hw.blinds_duty_now(), 0);
    }

    #[test]
    fn injected_readings_come_back() {
        let mut hw = SimHardware::new(10);
        hw.set_presence(true);
        hw.set_light_level(480);
        hw.set_co2_ppm(850);
        assert_eq!(hw.read_occupancy(), 0);
        assert_eq!(hw.read_light_level(), 480);
        assert_eq!(hw.read_co2_ppm(), 850);
    }
}
