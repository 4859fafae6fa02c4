//! Concrete actuator drivers over `embedded-hal` 1.0 traits.
//!
//! These sit below the port boundary: a real hardware adapter composes
//! them and implements [`ActuatorPort`](crate::app::ports::ActuatorPort)
//! on top, mapping driver failures to log lines (commands are
//! fire-and-forget at the port).

pub mod blind;
pub mod relay;
