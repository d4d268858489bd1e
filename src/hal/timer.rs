use avr_device::atmega128a::TC1;

use crate::config::TICK_COMPARE;

// TCCR1B: clear-on-compare-match, prescaler 256
const WGM12: u8 = 1 << 3;
const CS12: u8 = 1 << 2;
// TIMSK: compare A interrupt enable
const OCIE1A: u8 = 1 << 4;

/// Timer 1 in CTC mode, one compare-match interrupt per millisecond.
pub struct TickTimer {
    _priv: (),
}

impl TickTimer {
    pub fn new() -> Self {
        Self { _priv: () }
    }

    pub fn start(&mut self) {
        let tc1 = unsafe { &*TC1::ptr() };
        tc1.tcnt1.write(|w| unsafe { w.bits(0) });
        tc1.ocr1a.write(|w| unsafe { w.bits(TICK_COMPARE) });
        tc1.tccr1b.write(|w| unsafe { w.bits(WGM12 | CS12) });
        tc1.timsk.modify(|r, w| unsafe { w.bits(r.bits() | OCIE1A) });
    }

    pub fn stop(&mut self) {
        let tc1 = unsafe { &*TC1::ptr() };
        tc1.timsk.modify(|r, w| unsafe { w.bits(r.bits() & !OCIE1A) });
        tc1.tccr1b.write(|w| unsafe { w.bits(0) });
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
