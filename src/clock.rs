//! System time base and input event latch.
//!
//! Timer 1 fires a compare-match interrupt once per millisecond. The
//! handler advances the tick counter and republishes the watched input
//! pins into the event latch, so input sampling resolution equals the
//! tick rate by construction. Main-context code paces itself against the
//! counter with [`sync_delay`].

use core::cell::Cell;

use avr_device::atmega128a::PORTC;
use avr_device::interrupt::{self, Mutex};

use crate::config::{EVENT_MASK, TICK_PERIOD};

/// Shared state between the tick interrupt and main context.
///
/// Ownership is single-writer per field: `tick` (interrupt context) is the
/// only writer of both cells, everything else reads through [`now`] and
/// [`events`]. There is no public setter for the latch; publishing a
/// sample is only possible through `tick`.
pub struct SystemClock {
    ticks: Cell<u16>,
    latch: Cell<u8>,
}

impl SystemClock {
    pub const fn new() -> Self {
        Self {
            ticks: Cell::new(0),
            latch: Cell::new(0),
        }
    }

    /// Advance the counter one tick and publish the input sample.
    ///
    /// The counter wraps to 0 when the increment would reach
    /// `TICK_PERIOD`; it never holds a value at or above the modulus.
    /// O(1), interrupt context only.
    #[inline]
    pub fn tick(&self, sample: u8) {
        let next = self.ticks.get() + 1;
        self.ticks.set(if next == TICK_PERIOD { 0 } else { next });
        self.latch.set(sample);
    }

    /// Current counter value, in `[0, TICK_PERIOD)`.
    #[inline]
    pub fn now(&self) -> u16 {
        self.ticks.get()
    }

    /// Latest input sample, one bit per watched pin, active high.
    #[inline]
    pub fn events(&self) -> u8 {
        self.latch.get()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Global clock instance, shared with the tick interrupt.
static CLOCK: Mutex<SystemClock> = Mutex::new(SystemClock::new());

/// Current millisecond counter value, readable from any context.
#[inline]
pub fn now() -> u16 {
    interrupt::free(|cs| CLOCK.borrow(cs).now())
}

/// Latest event-latch value written by the tick interrupt.
#[inline]
pub fn events() -> u8 {
    interrupt::free(|cs| CLOCK.borrow(cs).events())
}

/// Busy-wait `offset` ticks against the millisecond counter.
///
/// An `offset` of 0 returns immediately; that no-op path is how
/// delay-disabled operation is expressed. Otherwise the target
/// `(offset + now()) % TICK_PERIOD` is computed once and the wait resolves
/// on exact modular equality, so a wait is bounded by `TICK_PERIOD` ticks
/// even across counter wraparound. Callers must keep `offset` below
/// `TICK_PERIOD` and must be in main context; waiting inside the tick
/// handler would deadlock against the counter it advances.
pub fn sync_delay(offset: u16) {
    if offset == 0 {
        return;
    }
    let target = (offset + now()) % TICK_PERIOD;
    while now() != target {}
}

#[avr_device::interrupt(atmega128a)]
fn TIMER1_COMPA() {
    // Watched pins are active low with pull-ups; invert so latch bits read
    // 1 while pressed.
    let pinc = unsafe { (*PORTC::ptr()).pinc.read().bits() };
    let sample = !pinc & EVENT_MASK;
    interrupt::free(|cs| CLOCK.borrow(cs).tick(sample));
}
