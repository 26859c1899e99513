//! Adapters — concrete implementations of the port traits.
//!
//! On `target_os = "espidf"` they talk to the real peripherals; on host
//! targets they fall back to simulation so the same wiring runs in tests.

pub mod log_sink;
pub mod signal_input;
pub mod time;
