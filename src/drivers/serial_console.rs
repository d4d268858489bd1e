use core::convert::Infallible;

use crate::hal::Uart;

/// Debug console over USART0. Main context only; the tick handler never
/// touches it.
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new() -> Self {
        Self { uart: Uart::new() }
    }

    pub fn write_line(&mut self, s: &str) {
        self.uart.write_str(s);
        self.uart.write_str("\r\n");
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.uart.write_byte(byte);
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.uart.read_byte()
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.uart.write_str(s);
        Ok(())
    }
}

impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}
