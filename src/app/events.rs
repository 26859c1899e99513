//! Outbound application events.
//!
//! The [`FrequencyService`](super::service::FrequencyService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::config::FrequencyConfig;
use crate::control::classifier::ActuatorState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started (carries the effective configuration).
    Started(FrequencyConfig),

    /// One sampling window completed.
    Window(WindowReport),

    /// The classified state differs from the previous window's.
    StateChanged {
        from: ActuatorState,
        to: ActuatorState,
    },

    /// The outputs could not be written this window.
    ActuatorFault(crate::error::ActuatorError),
}

/// Result of one sample-classify-actuate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowReport {
    /// Zero-based window index since start.
    pub index: u64,
    /// Rising edges counted during the window.
    pub pulse_count: u32,
    /// `pulse_count * sample_rate`.
    pub estimated_hz: u32,
    /// State the outputs were driven to.
    pub state: ActuatorState,
}
