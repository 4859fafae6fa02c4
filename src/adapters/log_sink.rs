//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (console on the host, serial on a target board).
//! A future MQTT or dashboard adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | controller up");
            }
            AppEvent::BlindsMoved { open } => {
                info!("BLINDS | {}", if *open { "open" } else { "closed" });
            }
            AppEvent::LightSwitched { on } => {
                info!("LIGHT | {}", if *on { "on" } else { "off" });
            }
            AppEvent::FanSwitched { on } => {
                info!("FAN   | {}", if *on { "on" } else { "off" });
            }
        }
    }
}
