//! Monotonic sampling-window delay.
//!
//! Implements [`DelayNs`] by sleeping until a deadline on the monotonic
//! clock rather than counting loop iterations, so the window length does
//! not depend on CPU frequency or on how long the ISR kept the core busy.
//!
//! - **`target_os = "espidf"`** — FreeRTOS task delay for the bulk of the
//!   wait, then a short spin on `esp_timer_get_time()` for the remainder
//!   (the RTOS tick is coarser than 1 ms).
//! - **`not(target_os = "espidf")`** — `std::thread::sleep` against
//!   `std::time::Instant`.

use embedded_hal::delay::DelayNs;

use crate::adapters::time::MonotonicClock;

pub struct WindowDelay {
    clock: MonotonicClock,
}

impl Default for WindowDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowDelay {
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
        }
    }

    /// Block until `deadline_us` on the monotonic clock.
    #[cfg(target_os = "espidf")]
    fn sleep_until(&self, deadline_us: u64) {
        use esp_idf_hal::delay::FreeRtos;

        // Leave at least one RTOS tick for the spin phase.
        const SPIN_MARGIN_US: u64 = 10_000;
        let now = self.clock.uptime_us();
        if deadline_us > now + SPIN_MARGIN_US {
            FreeRtos::delay_ms(((deadline_us - now - SPIN_MARGIN_US) / 1_000) as u32);
        }
        while self.clock.uptime_us() < deadline_us {
            core::hint::spin_loop();
        }
    }

    /// Block until `deadline_us` on the monotonic clock.
    #[cfg(not(target_os = "espidf"))]
    fn sleep_until(&self, deadline_us: u64) {
        let now = self.clock.uptime_us();
        if deadline_us > now {
            std::thread::sleep(std::time::Duration::from_micros(deadline_us - now));
        }
    }
}

impl DelayNs for WindowDelay {
    fn delay_ns(&mut self, ns: u32) {
        let deadline = self.clock.uptime_us() + u64::from(ns).div_ceil(1_000);
        self.sleep_until(deadline);
    }

    fn delay_ms(&mut self, ms: u32) {
        let deadline = self.clock.uptime_us() + u64::from(ms) * 1_000;
        self.sleep_until(deadline);
    }
}
