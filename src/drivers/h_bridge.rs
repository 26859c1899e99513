//! H-bridge enable/direction driver.
//!
//! Two digital lines: ENA (HIGH = bridge driving) and DIR (LOW = forward,
//! HIGH = reverse).  Direction is written before enable so the bridge never
//! drives in a stale direction.  Disabling only drops ENA; DIR keeps its
//! last level.
//!
//! Generic over `embedded-hal` output pins: [`GpioOutput`] on target,
//! mock pins in tests.
//!
//! [`GpioOutput`]: crate::drivers::gpio_out::GpioOutput

use embedded_hal::digital::OutputPin;

use crate::app::ports::ActuatorPort;
use crate::control::classifier::ActuatorState;
use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

pub struct HBridgeDriver<EN, DIR> {
    enable: EN,
    direction: DIR,
    state: ActuatorState,
    dir: Direction,
}

impl<EN: OutputPin, DIR: OutputPin> HBridgeDriver<EN, DIR> {
    /// Take ownership of the two output pins.  Assumes both start low
    /// (disabled, forward), which `hw_init` guarantees on target.
    pub fn new(enable: EN, direction: DIR) -> Self {
        Self {
            enable,
            direction,
            state: ActuatorState::Disabled,
            dir: Direction::Forward,
        }
    }

    pub fn drive(&mut self, dir: Direction) -> Result<(), ActuatorError> {
        self.set_direction_hw(dir)?;
        self.set_enable_hw(true)?;
        self.dir = dir;
        self.state = match dir {
            Direction::Forward => ActuatorState::Forward,
            Direction::Reverse => ActuatorState::Reverse,
        };
        Ok(())
    }

    pub fn disable(&mut self) -> Result<(), ActuatorError> {
        self.set_enable_hw(false)?;
        self.state = ActuatorState::Disabled;
        Ok(())
    }

    fn set_direction_hw(&mut self, dir: Direction) -> Result<(), ActuatorError> {
        let res = match dir {
            Direction::Forward => self.direction.set_low(),
            Direction::Reverse => self.direction.set_high(),
        };
        res.map_err(|_| ActuatorError::DirectionWriteFailed)
    }

    fn set_enable_hw(&mut self, on: bool) -> Result<(), ActuatorError> {
        let res = if on {
            self.enable.set_high()
        } else {
            self.enable.set_low()
        };
        res.map_err(|_| ActuatorError::EnableWriteFailed)
    }

    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Last direction written to DIR.
    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Give the pins back (tests inspect them).
    pub fn release(self) -> (EN, DIR) {
        (self.enable, self.direction)
    }
}

impl<EN: OutputPin, DIR: OutputPin> ActuatorPort for HBridgeDriver<EN, DIR> {
    fn apply(&mut self, state: ActuatorState) -> Result<(), ActuatorError> {
        match state {
            ActuatorState::Forward => self.drive(Direction::Forward),
            ActuatorState::Reverse => self.drive(Direction::Reverse),
            ActuatorState::Disabled => self.disable(),
        }
    }
}
