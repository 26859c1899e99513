//! Mock hardware for integration tests.
//!
//! The edge counter is the real one; only the things around it are faked:
//! output pins record every level they are driven to, and the window delay
//! injects a scripted number of rising edges instead of sleeping.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use triggerfreq::adapters::signal_input::SignalInput;
use triggerfreq::app::events::AppEvent;
use triggerfreq::app::ports::{EdgeCounterPort, EventSink};
use triggerfreq::sensors::edge_counter::EdgeCounter;

/// A fresh counter per test; tests run in parallel.
pub fn leak_counter() -> &'static EdgeCounter {
    Box::leak(Box::new(EdgeCounter::new()))
}

// ── MockPin ───────────────────────────────────────────────────

/// Output pin whose write history is shared with the test.
#[derive(Clone, Default)]
pub struct MockPin {
    writes: Rc<RefCell<Vec<bool>>>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level after the last write; pins boot low.
    pub fn is_high(&self) -> bool {
        self.writes.borrow().last().copied().unwrap_or(false)
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(true);
        Ok(())
    }
}

// ── ScriptedDelay ─────────────────────────────────────────────

/// Window delay that fires `edges[k]` rising edges during window `k`.
pub struct ScriptedDelay {
    counter: &'static EdgeCounter,
    edges: VecDeque<u32>,
    pub windows_ms: Vec<u32>,
}

impl ScriptedDelay {
    pub fn new(counter: &'static EdgeCounter, edges: impl IntoIterator<Item = u32>) -> Self {
        Self {
            counter,
            edges: edges.into_iter().collect(),
            windows_ms: Vec::new(),
        }
    }
}

impl DelayNs for ScriptedDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.windows_ms.push(ms);
        let n = self.edges.pop_front().unwrap_or(0);
        for _ in 0..n {
            self.counter.on_edge();
        }
    }
}

// ── LateEdgeInput ─────────────────────────────────────────────

/// Signal input that keeps receiving edges after disarm, and before the
/// next arm.  None of them may be counted.
pub struct LateEdgeInput {
    pub inner: SignalInput,
    pub late_edges: u32,
}

impl EdgeCounterPort for LateEdgeInput {
    fn reset(&mut self) {
        self.inner.reset();
        for _ in 0..self.late_edges {
            self.inner.counter().on_edge();
        }
    }

    fn arm(&mut self) {
        self.inner.arm();
    }

    fn disarm(&mut self) {
        self.inner.disarm();
        for _ in 0..self.late_edges {
            self.inner.counter().on_edge();
        }
    }

    fn snapshot(&self) -> u32 {
        self.inner.snapshot()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
