//! Motorised blind servo driver (SG90-class, 50 Hz PWM).
//!
//! The blind motor is driven with a **momentary pulse**, not a held
//! signal: assert the drive-enable pin, set the servo duty for the target
//! angle, hold for a fixed duration while the motor travels, then release
//! both.  The blocking delay lives inside [`BlindServo::drive_to`] so it
//! cannot be reordered relative to the assert/release pair.
//!
//! Duty-cycle convention from the reference hardware: at 50 Hz the servo
//! expects `duty% = angle/18 + 2`, i.e. 2 % at 0° and 12 % at 180°.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;

/// Pulse hold while the servo travels to position.
const DEFAULT_PULSE_MS: u32 = 1000;

/// Servo driver: PWM channel + drive-enable pin + blocking delay source.
pub struct BlindServo<Pwm, Enable, Delay> {
    pwm: Pwm,
    enable: Enable,
    delay: Delay,
    pulse_ms: u32,
}

impl<Pwm, Enable, Delay> BlindServo<Pwm, Enable, Delay>
where
    Pwm: SetDutyCycle,
    Enable: OutputPin,
    Delay: DelayNs,
{
    pub fn new(pwm: Pwm, enable: Enable, delay: Delay) -> Self {
        Self {
            pwm,
            enable,
            delay,
            pulse_ms: DEFAULT_PULSE_MS,
        }
    }

    /// Override the pulse hold duration (from config).
    pub fn with_pulse_ms(mut self, pulse_ms: u32) -> Self {
        self.pulse_ms = pulse_ms;
        self
    }

    /// Drive the blinds to `angle_deg` (clamped to 0–180) and release.
    ///
    /// One scoped operation: assert → duty → blocking hold → release.
    /// On a duty/pin failure mid-sequence the drive signal is still
    /// released before the error is returned.
    pub fn drive_to(&mut self, angle_deg: f32) -> Result<(), ActuatorError> {
        let duty = Self::duty_for_angle(angle_deg, self.pwm.max_duty_cycle());

        self.enable
            .set_high()
            .map_err(|_| ActuatorError::GpioWriteFailed)?;

        let pulsed = self
            .pwm
            .set_duty_cycle(duty)
            .map_err(|_| ActuatorError::PwmWriteFailed);
        if pulsed.is_ok() {
            self.delay.delay_ms(self.pulse_ms);
        }

        // Release drive unconditionally; first failure wins.
        let released_pin = self
            .enable
            .set_low()
            .map_err(|_| ActuatorError::GpioWriteFailed);
        let released_pwm = self
            .pwm
            .set_duty_cycle(0)
            .map_err(|_| ActuatorError::PwmWriteFailed);

        pulsed.and(released_pin).and(released_pwm)
    }

    /// Map an angle in degrees to a raw duty value for this PWM channel.
    fn duty_for_angle(angle_deg: f32, max_duty: u16) -> u16 {
        let angle = angle_deg.clamp(0.0, 180.0);
        let percent = angle / 18.0 + 2.0;
        (f32::from(max_duty) * percent / 100.0) as u16
    }
}
