//! Outbound application events.
//!
//! The [`OfficeController`](super::service::OfficeController) emits these
//! through the [`EventSink`](super::ports::EventSink) port whenever a state
//! flag actually transitions.  Adapters on the other side decide what to do
//! with them — log to the console, publish, update a dashboard.

/// Structured events emitted by the decision core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has been constructed and is about to start polling.
    Started,

    /// The blinds were commanded to a new position.
    BlindsMoved { open: bool },

    /// The smart light flag transitioned.
    LightSwitched { on: bool },

    /// The exhaust fan flag transitioned.
    FanSwitched { on: bool },
}
