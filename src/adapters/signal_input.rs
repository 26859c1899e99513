//! Signal input adapter — the SIG_IN interrupt plus its edge counter.
//!
//! Arming opens the software gate first and then unmasks the GPIO
//! interrupt; disarming masks the interrupt first and then closes the
//! gate.  Either way the counter is never incremented outside the window.

use crate::app::ports::EdgeCounterPort;
use crate::drivers::hw_init;
use crate::sensors::edge_counter::{EdgeCounter, SIGNAL_EDGES};

pub struct SignalInput {
    counter: &'static EdgeCounter,
}

impl Default for SignalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalInput {
    /// Adapter over the global counter fed by the SIG_IN ISR.
    pub fn new() -> Self {
        Self::with_counter(&SIGNAL_EDGES)
    }

    /// Adapter over a specific counter (host simulation and tests).
    pub fn with_counter(counter: &'static EdgeCounter) -> Self {
        Self { counter }
    }

    pub fn counter(&self) -> &'static EdgeCounter {
        self.counter
    }
}

impl EdgeCounterPort for SignalInput {
    fn reset(&mut self) {
        self.counter.reset();
    }

    fn arm(&mut self) {
        self.counter.arm();
        hw_init::signal_intr_enable();
    }

    fn disarm(&mut self) {
        hw_init::signal_intr_disable();
        self.counter.disarm();
    }

    fn snapshot(&self) -> u32 {
        self.counter.snapshot()
    }
}
