use avr_device::atmega128a::USART0;
use core::convert::Infallible;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

// UCSR0A
const RXC0: u8 = 1 << 7;
const UDRE0: u8 = 1 << 5;
// UCSR0B
const RXEN0: u8 = 1 << 4;
const TXEN0: u8 = 1 << 3;

/// Polled USART0, 8N1. The tick handler is the only interrupt in this
/// firmware, so the console polls instead of running RX/TX vectors.
pub struct Uart {
    _priv: (),
}

impl Uart {
    pub fn new() -> Self {
        let usart = unsafe { &*USART0::ptr() };
        usart.ubrr0h.write(|w| unsafe { w.bits((UBRR >> 8) as u8) });
        usart.ubrr0l.write(|w| unsafe { w.bits(UBRR as u8) });
        usart.ucsr0b.write(|w| unsafe { w.bits(RXEN0 | TXEN0) });
        Self { _priv: () }
    }

    /// Non-blocking write; `WouldBlock` until the data register is free.
    pub fn try_write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        let usart = unsafe { &*USART0::ptr() };
        if usart.ucsr0a.read().bits() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        usart.udr0.write(|w| unsafe { w.bits(byte) });
        Ok(())
    }

    pub fn write_byte(&mut self, byte: u8) {
        let _ = nb::block!(self.try_write(byte));
    }

    /// Non-blocking read; `WouldBlock` until a byte has been received.
    pub fn try_read(&mut self) -> nb::Result<u8, Infallible> {
        let usart = unsafe { &*USART0::ptr() };
        if usart.ucsr0a.read().bits() & RXC0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(usart.udr0.read().bits())
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.try_read().ok()
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}
