use core::marker::PhantomData;

use embedded_hal::digital::v2::OutputPin;

use crate::clock;
use crate::config::{DISPLAY_DIGITS_LEN, DISPLAY_LABEL_LEN, DISPLAY_LEN, LCD_STROBE_DELAY_MS};
use crate::hal::gpio::PortOps;

/// Sentinel byte: advance the cursor to the next line instead of writing.
pub const LINE_BREAK: u8 = 0x00;

// HD44780 command set used by the panel
const CMD_FUNCTION_8BIT_2LINE: u8 = 0x38; // 8-bit bus, two lines, 5x7 font
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_CLEAR: u8 = 0x01;
const CMD_CURSOR_LINE1: u8 = 0x81; // line 1, column 1
const CMD_CURSOR_LINE2: u8 = 0xC1; // line 2, column 1: the output line

/// Fixed-layout display contents: a label region followed by a two-
/// character value region.
pub struct DisplayBuffer {
    chars: [u8; DISPLAY_LEN],
}

impl DisplayBuffer {
    pub const fn new(text: [u8; DISPLAY_LEN]) -> Self {
        Self { chars: text }
    }

    pub fn set(&mut self, text: &[u8; DISPLAY_LEN]) {
        self.chars = *text;
    }

    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.chars[index]
    }

    /// Write `value` into the value region as two ASCII decimal digits,
    /// tens digit first.
    pub fn set_value(&mut self, value: u8) {
        self.chars[DISPLAY_LABEL_LEN] = b'0' + value / 10;
        self.chars[DISPLAY_LABEL_LEN + 1] = b'0' + value % 10;
    }

    /// Replace the value region with a fixed tag.
    pub fn set_tag(&mut self, tag: &[u8; DISPLAY_DIGITS_LEN]) {
        self.chars[DISPLAY_LABEL_LEN..].copy_from_slice(tag);
    }

    pub fn as_bytes(&self) -> &[u8; DISPLAY_LEN] {
        &self.chars
    }
}

/// Character LCD over an 8-bit data port and three control lines.
///
/// Every command and character strobe is timed by the millisecond clock,
/// so the timer interrupt must be running before the display is touched.
pub struct Lcd<DATA, RS, RW, EN> {
    _data: PhantomData<DATA>,
    rs: RS,
    rw: RW,
    en: EN,
    buffer: DisplayBuffer,
}

impl<DATA, RS, RW, EN> Lcd<DATA, RS, RW, EN>
where
    DATA: PortOps,
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
{
    pub fn new(rs: RS, rw: RW, en: EN, text: [u8; DISPLAY_LEN]) -> Self {
        Self {
            _data: PhantomData,
            rs,
            rw,
            en,
            buffer: DisplayBuffer::new(text),
        }
    }

    pub fn init(&mut self) {
        self.command(CMD_FUNCTION_8BIT_2LINE);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_CLEAR);
        self.command(CMD_CURSOR_LINE1);
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    /// Replace the buffer contents and render them.
    pub fn show(&mut self, text: &[u8; DISPLAY_LEN]) {
        self.buffer.set(text);
        self.render();
    }

    /// Emit the buffer onto the output line. The sentinel byte issues a
    /// cursor-advance command in place of a character.
    pub fn render(&mut self) {
        self.command(CMD_CURSOR_LINE2);
        for index in 0..DISPLAY_LEN {
            let ch = self.buffer.get(index);
            if ch == LINE_BREAK {
                self.command(CMD_CURSOR_LINE2);
            } else {
                self.write_char(ch);
            }
        }
    }

    fn command(&mut self, code: u8) {
        DATA::write_port(code);
        self.rs.set_low().ok();
        self.rw.set_low().ok();
        self.en.set_high().ok();
        clock::sync_delay(LCD_STROBE_DELAY_MS);
        self.en.set_low().ok();
    }

    fn write_char(&mut self, ch: u8) {
        DATA::write_port(ch);
        self.rw.set_low().ok();
        self.rs.set_high().ok();
        self.en.set_high().ok();
        clock::sync_delay(LCD_STROBE_DELAY_MS);
        self.rs.set_low().ok();
        self.en.set_low().ok();
    }
}
