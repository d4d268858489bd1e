use avr_device::atmega128a::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// Byte-wide access to one I/O port's registers.
pub trait PortOps {
    fn read_port() -> u8;
    fn write_port(value: u8);
    fn read_pins() -> u8;
    fn read_ddr() -> u8;
    fn write_ddr(value: u8);
}

macro_rules! impl_port_ops {
    ($PORT:ty, $port:ident, $ddr:ident, $pin:ident) => {
        impl PortOps for $PORT {
            #[inline]
            fn read_port() -> u8 {
                unsafe { (*<$PORT>::ptr()).$port.read().bits() }
            }
            #[inline]
            fn write_port(value: u8) {
                let p = unsafe { &*<$PORT>::ptr() };
                p.$port.write(|w| unsafe { w.bits(value) });
            }
            #[inline]
            fn read_pins() -> u8 {
                unsafe { (*<$PORT>::ptr()).$pin.read().bits() }
            }
            #[inline]
            fn read_ddr() -> u8 {
                unsafe { (*<$PORT>::ptr()).$ddr.read().bits() }
            }
            #[inline]
            fn write_ddr(value: u8) {
                let p = unsafe { &*<$PORT>::ptr() };
                p.$ddr.write(|w| unsafe { w.bits(value) });
            }
        }
    };
}

impl_port_ops!(PORTB, portb, ddrb, pinb);
impl_port_ops!(PORTC, portc, ddrc, pinc);
impl_port_ops!(PORTD, portd, ddrd, pind);

/// Masked read-modify-write of one port.
///
/// Sets the requested bits where `value` has them high, clears exactly the
/// complementary requested bits, and leaves every bit outside `mask`
/// untouched. All port writes that share a port with other concerns go
/// through here.
#[inline]
pub fn write_masked<P: PortOps>(mask: u8, value: u8) {
    P::write_port((P::read_port() & !mask) | (value & mask));
}

#[derive(Debug)]
pub struct Pin<PORT, const N: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const N: u8, MODE> Pin<PORT, N, MODE> {
    pub const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<PORT: PortOps, const N: u8, MODE: PinMode> Pin<PORT, N, MODE> {
    pub fn into_output(self) -> Pin<PORT, N, Output> {
        PORT::write_ddr(PORT::read_ddr() | (1 << N));
        Pin::new()
    }

    pub fn into_input_pullup(self) -> Pin<PORT, N, Input> {
        PORT::write_ddr(PORT::read_ddr() & !(1 << N));
        PORT::write_port(PORT::read_port() | (1 << N));
        Pin::new()
    }
}

impl<PORT: PortOps, const N: u8> Pin<PORT, N, Output> {
    #[inline]
    pub fn set_high(&mut self) {
        PORT::write_port(PORT::read_port() | (1 << N));
    }

    #[inline]
    pub fn set_low(&mut self) {
        PORT::write_port(PORT::read_port() & !(1 << N));
    }
}

impl<PORT: PortOps, const N: u8> Pin<PORT, N, Input> {
    #[inline]
    pub fn is_high(&self) -> bool {
        PORT::read_pins() & (1 << N) != 0
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<PORT: PortOps, const N: u8> embedded_hal::digital::v2::OutputPin for Pin<PORT, N, Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self);
        Ok(())
    }
}

// Panel board pin map
pub mod board {
    use super::*;
    use crate::config;

    pub type LcdRs = Pin<PORTC, { config::LCD_RS_PIN }, Output>;
    pub type LcdRw = Pin<PORTC, { config::LCD_RW_PIN }, Output>;
    pub type LcdEn = Pin<PORTC, { config::LCD_EN_PIN }, Output>;
    pub type BtnUp = Pin<PORTC, { config::BTN_UP_PIN }, Input>;
    pub type BtnDown = Pin<PORTC, { config::BTN_DOWN_PIN }, Input>;

    /// LCD control lines, handed to the display driver.
    pub struct Panel {
        pub rs: LcdRs,
        pub rw: LcdRw,
        pub en: LcdEn,
    }

    /// One-time port bring-up: data bus and control lines output and low,
    /// buttons input with pull-ups, output-stage bits output and low.
    pub fn init() -> Panel {
        // LCD data bus drives the whole of port B.
        PORTB::write_ddr(0xff);
        PORTB::write_port(0x00);

        let mut rs = LcdRs::new().into_output();
        let mut rw = LcdRw::new().into_output();
        let mut en = LcdEn::new().into_output();
        rs.set_low();
        rw.set_low();
        en.set_low();

        let _up = BtnUp::new().into_input_pullup();
        let _down = BtnDown::new().into_input_pullup();

        PORTD::write_ddr(PORTD::read_ddr() | config::OUTPUT_STAGE_MASK);
        write_masked::<PORTD>(config::OUTPUT_STAGE_MASK, 0x00);

        Panel { rs, rw, en }
    }
}
