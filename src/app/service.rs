//! Application service — the sample-classify-actuate loop.
//!
//! [`FrequencyService`] owns the configuration and runs one sampling
//! window per call.  All I/O flows through port traits injected at call
//! sites, so the whole cycle is testable with mock adapters.
//!
//! ```text
//!  EdgeCounterPort ──▶ ┌──────────────────────┐ ──▶ EventSink
//!          DelayNs ──▶ │   FrequencyService   │
//!                      │  reset·arm·wait·     │
//!     ActuatorPort ◀── │  disarm·classify     │
//!                      └──────────────────────┘
//! ```
//!
//! Each window is classified from its own pulse count alone.  The previous
//! state is remembered only to emit [`AppEvent::StateChanged`]; it never
//! influences what is written to the outputs.

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::config::FrequencyConfig;
use crate::control::classifier::{classify, ActuatorState};

use super::events::{AppEvent, WindowReport};
use super::ports::{ActuatorPort, EdgeCounterPort, EventSink};

pub struct FrequencyService {
    config: FrequencyConfig,
    window_ms: u32,
    windows: u64,
    last_state: Option<ActuatorState>,
}

impl FrequencyService {
    /// Construct the service.  The configuration is used as given; callers
    /// validate it beforehand (see [`FrequencyConfig::validate`]).
    pub fn new(config: FrequencyConfig) -> Self {
        Self {
            window_ms: config.window_ms(),
            config,
            windows: 0,
            last_state: None,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Windows completed so far.
    pub fn windows(&self) -> u64 {
        self.windows
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.config));
        info!(
            "FrequencyService started: window={}ms A={}Hz B={}Hz margin={}",
            self.window_ms, self.config.freq_a, self.config.freq_b, self.config.error_margin
        );
    }

    /// Run one full cycle: reset → arm → wait → disarm → classify → actuate.
    pub fn run_window(
        &mut self,
        counter: &mut impl EdgeCounterPort,
        delay: &mut impl DelayNs,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> WindowReport {
        // 1–4. Measure
        counter.reset();
        counter.arm();
        delay.delay_ms(self.window_ms);
        counter.disarm();
        let pulse_count = counter.snapshot();

        // 5. Classify
        let state = classify(pulse_count, &self.config);

        // 6. Actuate
        if let Err(e) = hw.apply(state) {
            warn!("Actuator write failed: {} (retrying next window)", e);
            sink.emit(&AppEvent::ActuatorFault(e));
        }

        let report = WindowReport {
            index: self.windows,
            pulse_count,
            estimated_hz: self.config.estimated_hz(pulse_count),
            state,
        };
        self.windows += 1;

        if let Some(prev) = self.last_state {
            if prev != state {
                sink.emit(&AppEvent::StateChanged { from: prev, to: state });
            }
        }
        self.last_state = Some(state);
        sink.emit(&AppEvent::Window(report));

        report
    }

    /// Run windows back to back until power loss.  `after_window` is called
    /// once per completed window (watchdog feed, heartbeat logging).
    pub fn run_forever(
        &mut self,
        counter: &mut impl EdgeCounterPort,
        delay: &mut impl DelayNs,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
        mut after_window: impl FnMut(&WindowReport),
    ) -> ! {
        loop {
            let report = self.run_window(counter, delay, hw, sink);
            after_window(&report);
        }
    }
}
