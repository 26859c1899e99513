//! `embedded-hal` output pin over a raw ESP-IDF GPIO number.
//!
//! The pin must already be configured as an output by
//! [`hw_init::init_peripherals`](super::hw_init::init_peripherals).
//! On host targets the level is tracked in memory only.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::drivers::hw_init;

pub struct GpioOutput {
    gpio: i32,
    high: bool,
}

impl GpioOutput {
    /// Wrap an output GPIO that `hw_init` has already driven low.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }

    fn write(&mut self, high: bool) {
        hw_init::gpio_write(self.gpio, high);
        self.high = high;
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl StatefulOutputPin for GpioOutput {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_level_on_host() {
        let mut pin = GpioOutput::new(3);
        assert!(pin.is_set_low().unwrap());
        pin.set_high().unwrap();
        assert!(pin.is_set_high().unwrap());
        pin.set_state(false.into()).unwrap();
        assert!(pin.is_set_low().unwrap());
    }
}
