//! Pure control laws, no I/O.

pub mod hysteresis;
