//! Application layer: panel event handling and output pacing.
//!
//! One `run_cycle` call is one cooperative main-loop iteration: drive the
//! output stage, decode panel edges from the event latch, apply parameter
//! changes and refresh the display, then pace the next cycle against the
//! millisecond clock.

use embedded_hal::digital::v2::OutputPin;
use ufmt::uwriteln;

use crate::clock;
use crate::config;
use crate::drivers::{EdgeDecoder, Lcd, SerialConsole};
use crate::hal::gpio::PortOps;

#[cfg(all(feature = "signal-gen", not(feature = "motor-drive")))]
use crate::drivers::SignalOutput;
#[cfg(feature = "motor-drive")]
use crate::drivers::{Direction, MotorDrive};

#[cfg(not(any(feature = "signal-gen", feature = "motor-drive")))]
compile_error!("enable either the signal-gen or motor-drive output stage");

/// Software pacing delay in milliseconds.
///
/// The floor is 1, not 0: a zero delay would take `sync_delay`'s
/// disabled fast path and stop pacing the output entirely.
pub struct DelaySetting {
    ms: u16,
}

impl DelaySetting {
    pub const fn new(ms: u16) -> Self {
        Self { ms }
    }

    pub fn get(&self) -> u16 {
        self.ms
    }

    /// One step up; no-op at the ceiling.
    pub fn increment(&mut self) {
        if self.ms < config::DELAY_MAX_MS {
            self.ms += 1;
        }
    }

    /// One step down; no-op at or below the floor.
    pub fn decrement(&mut self) {
        if self.ms > config::DELAY_MIN_MS {
            self.ms -= 1;
        }
    }
}

#[cfg(all(feature = "signal-gen", not(feature = "motor-drive")))]
pub struct Application {
    decoder: EdgeDecoder,
    delay: DelaySetting,
    signal: SignalOutput,
}

#[cfg(all(feature = "signal-gen", not(feature = "motor-drive")))]
impl Application {
    pub fn new() -> Self {
        Self {
            decoder: EdgeDecoder::new(),
            delay: DelaySetting::new(config::DELAY_DEFAULT_MS),
            signal: SignalOutput::new(),
        }
    }

    pub fn run_cycle<DATA, RS, RW, EN>(
        &mut self,
        lcd: &mut Lcd<DATA, RS, RW, EN>,
        console: &mut SerialConsole,
    ) where
        DATA: PortOps,
        RS: OutputPin,
        RW: OutputPin,
        EN: OutputPin,
    {
        self.signal.toggle();

        let edges = self.decoder.poll(clock::events());
        if edges.fired(config::EVENT_BTN_UP) {
            self.delay.increment();
        }
        if edges.fired(config::EVENT_BTN_DOWN) {
            self.delay.decrement();
        }
        if edges.any() {
            lcd.buffer_mut().set_value(self.delay.get() as u8);
            lcd.render();
            uwriteln!(console, "speed: {} ms\r", self.delay.get()).ok();
        }

        clock::sync_delay(self.delay.get());
    }
}

#[cfg(feature = "motor-drive")]
pub struct Application {
    decoder: EdgeDecoder,
    direction: Direction,
    motor: MotorDrive,
}

#[cfg(feature = "motor-drive")]
impl Application {
    pub fn new() -> Self {
        Self {
            decoder: EdgeDecoder::new(),
            direction: Direction::Forward,
            motor: MotorDrive::new(),
        }
    }

    pub fn run_cycle<DATA, RS, RW, EN>(
        &mut self,
        lcd: &mut Lcd<DATA, RS, RW, EN>,
        console: &mut SerialConsole,
    ) where
        DATA: PortOps,
        RS: OutputPin,
        RW: OutputPin,
        EN: OutputPin,
    {
        self.motor.drive(self.direction);

        let edges = self.decoder.poll(clock::events());
        if edges.fired(config::EVENT_SWITCH) {
            self.direction = self.direction.toggled();
            lcd.buffer_mut().set_tag(self.direction.tag());
            lcd.render();
            let name = match self.direction {
                Direction::Forward => "forward",
                Direction::Reverse => "reverse",
            };
            uwriteln!(console, "direction: {}\r", name).ok();
        }

        clock::sync_delay(config::MOTOR_DRIVE_MS);
    }
}
