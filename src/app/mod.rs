//! Application core — pure decision logic, zero I/O.
//!
//! This module contains the business rules for the OfficePulse system:
//! occupancy-gated light regulation, the blind schedule and air-quality
//! control.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
