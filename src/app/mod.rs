//! Application core — pure domain logic, zero I/O.
//!
//! The sample-classify-actuate loop lives in [`service`].  All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
