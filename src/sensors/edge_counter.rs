//! Rising-edge pulse counter shared between the GPIO ISR and the main loop.
//!
//! The armed flag and the count live in the same `AtomicU32` (bit 31 and
//! bits 0–30).  An edge only increments while the flag is set, and disarm
//! clears the flag in the same atomic operation that returns the final
//! count, so no edge can land after disarm has returned.
//!
//! Ownership protocol:
//!
//! - the ISR calls [`EdgeCounter::on_edge`] only;
//! - the main loop calls [`reset`](EdgeCounter::reset) and
//!   [`snapshot`](EdgeCounter::snapshot) only while disarmed.

use core::sync::atomic::{AtomicU32, Ordering};

const ARMED: u32 = 1 << 31;
const COUNT_MASK: u32 = !ARMED;

/// Largest count a single window can hold before saturating.
pub const MAX_PULSE_COUNT: u32 = COUNT_MASK;

/// Global counter for the signal input pin.
/// `static` because ISR callbacks in ESP-IDF cannot capture closures.
pub static SIGNAL_EDGES: EdgeCounter = EdgeCounter::new();

/// Called from the GPIO ISR on each rising edge of the signal input.
pub fn signal_isr_handler() {
    SIGNAL_EDGES.on_edge();
}

/// Lock-free edge counter with an arm/disarm gate.
#[derive(Debug)]
pub struct EdgeCounter {
    state: AtomicU32,
}

impl Default for EdgeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeCounter {
    /// A disarmed counter at zero.
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(0),
        }
    }

    /// Record one rising edge.  No-op while disarmed.
    ///
    /// Saturates at [`MAX_PULSE_COUNT`]; overflowing within one window is
    /// outside the operating envelope.
    #[inline]
    pub fn on_edge(&self) {
        // `Err` means disarmed or saturated: the edge is dropped, not failed.
        let _ = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
                if s & ARMED == 0 || s & COUNT_MASK == MAX_PULSE_COUNT {
                    None
                } else {
                    Some(s + 1)
                }
            });
    }

    /// Start accepting edges.
    pub fn arm(&self) {
        self.state.fetch_or(ARMED, Ordering::AcqRel);
    }

    /// Stop accepting edges and return the count they produced.
    pub fn disarm(&self) -> u32 {
        self.state.fetch_and(COUNT_MASK, Ordering::AcqRel) & COUNT_MASK
    }

    /// Zero the count.  Must be called while disarmed.
    pub fn reset(&self) {
        debug_assert!(!self.is_armed(), "EdgeCounter::reset while armed");
        self.state.fetch_and(ARMED, Ordering::AcqRel);
    }

    /// Current count.  Only stable while disarmed.
    pub fn snapshot(&self) -> u32 {
        self.state.load(Ordering::Acquire) & COUNT_MASK
    }

    pub fn is_armed(&self) -> bool {
        self.state.load(Ordering::Acquire) & ARMED != 0
    }
}
