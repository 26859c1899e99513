//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).  Per-window reports
//! go out at `debug` so the console stays quiet at the default level.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Window(w) => {
                debug!(
                    "WINDOW | #{} | pulses={} | ~{}Hz | state={:?}",
                    w.index, w.pulse_count, w.estimated_hz, w.state,
                );
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::ActuatorFault(e) => {
                warn!("FAULT | {}", e);
            }
            AppEvent::Started(cfg) => {
                info!(
                    "START | rate={}/s margin={} A={}Hz B={}Hz",
                    cfg.sample_rate, cfg.error_margin, cfg.freq_a, cfg.freq_b,
                );
            }
        }
    }
}
