//! Tolerance-band classification of a window's pulse count.
//!
//! A count `c` matches a band with per-window target `t` and margin `m`
//! when `c + m > t` and `c - m < t`, i.e. `c` lies in the open interval
//! `(t - m, t + m)`.  The check is done as `|c - t| < m` so a count below
//! the margin can never wrap around and produce a false match.
//!
//! Band A is always tested before band B.

use crate::config::FrequencyConfig;

/// Target frequency plus the tolerance allowed on the per-window count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyBand {
    pub target_hz: u32,
    pub margin: u32,
}

impl FrequencyBand {
    pub const fn new(target_hz: u32, margin: u32) -> Self {
        Self { target_hz, margin }
    }

    /// Pulses expected in one window at `sample_rate` windows per second.
    pub fn target_count(&self, sample_rate: u32) -> u32 {
        self.target_hz / sample_rate.max(1)
    }

    pub fn matches(&self, count: u32, sample_rate: u32) -> bool {
        count.abs_diff(self.target_count(sample_rate)) < self.margin
    }
}

/// H-bridge command derived from one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorState {
    /// Band A matched: DIR forward, ENA high.
    Forward,
    /// Band B matched: DIR reverse, ENA high.
    Reverse,
    /// No band matched: ENA low, DIR untouched.
    Disabled,
}

impl ActuatorState {
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Map a pulse count to an actuator state.  Pure function of its inputs.
pub fn classify(count: u32, config: &FrequencyConfig) -> ActuatorState {
    if config.band_a().matches(count, config.sample_rate) {
        ActuatorState::Forward
    } else if config.band_b().matches(count, config.sample_rate) {
        ActuatorState::Reverse
    } else {
        ActuatorState::Disabled
    }
}
