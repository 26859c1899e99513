//! Control laws.

pub mod classifier;
