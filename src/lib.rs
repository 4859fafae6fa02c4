//! OfficePulse controller library.
//!
//! Rule-based smart-office environment control: occupancy-gated light
//! regulation with a lux dead-band, a workday blind schedule, and a CO2
//! exhaust-fan controller with hysteresis.  The decision core is pure
//! logic behind port traits; hardware lives in adapters and embedded-hal
//! drivers, so the whole crate builds and tests on the host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod schedule;
pub mod timekeeping;

mod error;
pub use error::{ActuatorError, Error, Result};

pub mod adapters;
pub mod drivers;
