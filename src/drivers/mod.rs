//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod gpio_out;
pub mod h_bridge;
pub mod hw_init;
pub mod watchdog;
pub mod window_delay;
