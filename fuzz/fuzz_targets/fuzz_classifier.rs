//! Fuzz target: `FrequencyConfig::validate` + `classify`
//!
//! Drives arbitrary configurations and pulse counts through validation and
//! classification, asserting that neither panics (no division by zero, no
//! unsigned wrap) and that a validated config never matches both bands.
//!
//! cargo fuzz run fuzz_classifier

#![no_main]

use libfuzzer_sys::fuzz_target;
use triggerfreq::config::FrequencyConfig;
use triggerfreq::control::classifier::{classify, ActuatorState};

fn word(data: &[u8], i: usize) -> u32 {
    let mut b = [0u8; 4];
    for (k, slot) in b.iter_mut().enumerate() {
        *slot = data.get(i * 4 + k).copied().unwrap_or(0);
    }
    u32::from_le_bytes(b)
}

fuzz_target!(|data: &[u8]| {
    let cfg = FrequencyConfig {
        sample_rate: word(data, 0),
        error_margin: word(data, 1),
        freq_a: word(data, 2),
        freq_b: word(data, 3),
    };
    let count = word(data, 4);

    let state = classify(count, &cfg);
    let _ = cfg.window_ms();
    let _ = cfg.estimated_hz(count);

    if cfg.validate().is_ok() {
        let in_a = cfg.band_a().matches(count, cfg.sample_rate);
        let in_b = cfg.band_b().matches(count, cfg.sample_rate);
        assert!(!(in_a && in_b), "validated bands must be disjoint");
        if in_b {
            assert_eq!(state, ActuatorState::Reverse);
        }
    }
});
