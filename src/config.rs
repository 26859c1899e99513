//! Startup configuration
//!
//! The four tunables of the classifier: sample rate, error margin and the
//! two target frequencies.  Fixed for the lifetime of the process — the
//! firmware reads them once at boot and hands an immutable copy to the
//! sampling loop.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::control::classifier::FrequencyBand;
use crate::error::ConfigError;

/// Highest accepted sample rate.  Above this the window drops below 1 ms.
pub const MAX_SAMPLE_RATE: u32 = 1000;

/// Classifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyConfig {
    /// Sampling windows per second (4 → 250 ms window)
    pub sample_rate: u32,
    /// Tolerance applied to the per-window pulse count, either side of target
    pub error_margin: u32,
    /// Forward target frequency in Hz
    pub freq_a: u32,
    /// Reverse target frequency in Hz
    pub freq_b: u32,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            sample_rate: 4,
            error_margin: 50,
            freq_a: 1300,
            freq_b: 2600,
        }
    }
}

impl FrequencyConfig {
    /// Parse a JSON document with the keys `sample_rate`, `error_margin`,
    /// `freq_a` and `freq_b`, then validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolve the boot configuration from an optional JSON document.
    ///
    /// No document means the defaults.  A document that fails to parse or
    /// validate is logged and replaced by the defaults, so the bridge is
    /// never left without a usable configuration.
    pub fn from_startup(json: Option<&str>) -> Self {
        let Some(json) = json else {
            info!("Config: built-in defaults");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(cfg) => {
                info!("Config loaded from startup document");
                cfg
            }
            Err(e) => {
                warn!("Startup config rejected ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Length of one sampling window in milliseconds.
    pub fn window_ms(&self) -> u32 {
        1000 / self.sample_rate.max(1)
    }

    /// Forward band (checked first).
    pub fn band_a(&self) -> FrequencyBand {
        FrequencyBand::new(self.freq_a, self.error_margin)
    }

    /// Reverse band.
    pub fn band_b(&self) -> FrequencyBand {
        FrequencyBand::new(self.freq_b, self.error_margin)
    }

    /// Frequency implied by a window's pulse count.
    pub fn estimated_hz(&self, count: u32) -> u32 {
        count.saturating_mul(self.sample_rate)
    }

    /// Reject configurations the classifier cannot act on unambiguously.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(ConfigError::ValidationFailed(
                "sample_rate must be 1–1000",
            ));
        }
        if self.error_margin == 0 {
            return Err(ConfigError::ValidationFailed(
                "error_margin must be at least 1",
            ));
        }
        if self.freq_a < self.sample_rate || self.freq_b < self.sample_rate {
            return Err(ConfigError::ValidationFailed(
                "freq_a and freq_b must be >= sample_rate",
            ));
        }
        let a = self.band_a().target_count(self.sample_rate);
        let b = self.band_b().target_count(self.sample_rate);
        if a.abs_diff(b) < self.error_margin.saturating_mul(2) {
            return Err(ConfigError::ValidationFailed(
                "freq_a and freq_b bands overlap at this sample_rate",
            ));
        }
        Ok(())
    }
}
