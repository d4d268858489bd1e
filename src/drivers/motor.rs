use avr_device::atmega128a::PORTD;

use crate::config::{DISPLAY_DIGITS_LEN, MOTOR_FWD_PIN, MOTOR_MASK, MOTOR_REV_PIN};
use crate::hal::gpio;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Display tag for the value region of the panel caption.
    pub fn tag(self) -> &'static [u8; DISPLAY_DIGITS_LEN] {
        match self {
            Direction::Forward => b"fw",
            Direction::Reverse => b"rv",
        }
    }
}

/// Two-direction DC motor driver on the port-D bridge legs.
pub struct MotorDrive {
    _priv: (),
}

impl MotorDrive {
    pub fn new() -> Self {
        Self { _priv: () }
    }

    /// Pin the direction pattern onto the bridge.
    ///
    /// Both legs change in a single masked write so the bridge never sees
    /// a transient both-high pattern.
    pub fn drive(&mut self, direction: Direction) {
        let pattern = match direction {
            Direction::Forward => 1 << MOTOR_FWD_PIN,
            Direction::Reverse => 1 << MOTOR_REV_PIN,
        };
        gpio::write_masked::<PORTD>(MOTOR_MASK, pattern);
    }
}

impl Default for MotorDrive {
    fn default() -> Self {
        Self::new()
    }
}
