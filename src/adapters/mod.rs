//! Driven adapters — implementations of the port traits.

pub mod clock;
pub mod log_sink;
pub mod sim;
