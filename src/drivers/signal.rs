use avr_device::atmega128a::PORTD;

use crate::config::SIGNAL_MASK;
use crate::hal::gpio;

/// Phase-inverted square-wave output stage.
///
/// Each drive writes the stored level to the signal bit and inverts it
/// for the next cycle; the main loop's pacing delay sets the half-period.
pub struct SignalOutput {
    level: u8,
}

impl SignalOutput {
    pub const fn new() -> Self {
        Self { level: 0 }
    }

    pub fn toggle(&mut self) {
        gpio::write_masked::<PORTD>(SIGNAL_MASK, self.level);
        self.level = !self.level;
    }
}

impl Default for SignalOutput {
    fn default() -> Self {
        Self::new()
    }
}
