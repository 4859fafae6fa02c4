//! OfficePulse — host simulation entry point.
//!
//! Hexagonal wiring of the decision core to simulated hardware:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  SimHardware        HostClock        LogEventSink        │
//! │  (Sensor+Actuator)  (ClockPort)      (EventSink)         │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        OfficeController (pure logic)           │      │
//! │  │  blind schedule · lux dead-band · CO2 band     │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The poll loop drives one [`OfficeController::tick`] per interval and
//! feeds the sim with slowly drifting readings so every rule fires over
//! the course of a few minutes.

#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use officepulse::adapters::clock::HostClock;
use officepulse::adapters::log_sink::LogEventSink;
use officepulse::adapters::sim::SimHardware;
use officepulse::app::service::OfficeController;
use officepulse::config::SystemConfig;

fn main() -> Result<()> {
    // ── 1. Logging bootstrap ──────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("OfficePulse v{} (host simulation)", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    info!(
        "Config: lux band [{}, {}], CO2 band [{}, {}) ppm, blinds {} / {}",
        config.lux_min,
        config.lux_max,
        config.co2_fan_off_ppm,
        config.co2_fan_on_ppm,
        config.blinds_open_at,
        config.blinds_close_at,
    );

    // ── 3. Construct adapters and controller ──────────────────
    let mut hw = SimHardware::new(config.blind_pulse_ms);
    let mut clock = HostClock::new();
    let mut sink = LogEventSink::new();
    let mut controller = OfficeController::new(&config);
    controller.start(&mut sink);

    // ── 4. Poll loop ──────────────────────────────────────────
    let interval = Duration::from_millis(u64::from(config.control_loop_interval_ms));
    let mut tick: u64 = 0;

    loop {
        // Scripted sensor drift: the office empties once a minute, the
        // light level sweeps through the lux band, CO2 climbs past the
        // fan threshold and falls back.
        hw.set_presence(tick % 60 < 45);
        hw.set_light_level(400 + ((tick * 7) % 300) as u16);
        hw.set_co2_ppm(400 + ((tick * 13) % 550) as u16);

        if let Err(e) = controller.tick(&mut clock, &mut hw, &mut sink) {
            warn!("tick {tick}: {e}");
        }

        if tick % 30 == 0 {
            let s = controller.state();
            info!(
                "TELEM | blinds_open={} light_on={} fan_on={} | light_pin={} fan_pin={} angle={:.0}",
                s.blinds_open,
                s.light_on,
                s.fan_on,
                hw.light_pin_high(),
                hw.fan_pin_high(),
                hw.last_blind_angle(),
            );
        }

        tick += 1;
        thread::sleep(interval);
    }
}
