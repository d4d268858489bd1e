#![no_std]
#![no_main]

use panic_halt as _;

use atmega128_ctrlpanel::{
    clock::SystemClock,
    config::TICK_PERIOD,
    expect, expect_eq,
    testing::{TestCase, TestResult, TestRunner},
};

struct CounterWrapsOncePerPeriod;
impl TestCase for CounterWrapsOncePerPeriod {
    fn name(&self) -> &'static str {
        "counter wraps once per period"
    }

    fn run(&self) -> TestResult {
        let clock = SystemClock::new();
        let mut zeros = 0u16;

        for _ in 0..TICK_PERIOD {
            clock.tick(0);
            expect!(clock.now() < TICK_PERIOD);
            if clock.now() == 0 {
                zeros += 1;
            }
        }

        expect_eq!(zeros, 1);
        expect_eq!(clock.now(), 0);
        TestResult::Pass
    }
}

struct CounterWrapsFromAnyOffset;
impl TestCase for CounterWrapsFromAnyOffset {
    fn name(&self) -> &'static str {
        "counter returns to zero from mid-period offsets"
    }

    fn run(&self) -> TestResult {
        for &start in &[1u16, 499, 999] {
            let clock = SystemClock::new();
            for _ in 0..start {
                clock.tick(0);
            }
            expect_eq!(clock.now(), start);

            let mut zeros = 0u16;
            for _ in 0..(TICK_PERIOD - start) {
                clock.tick(0);
                expect!(clock.now() < TICK_PERIOD);
                if clock.now() == 0 {
                    zeros += 1;
                }
            }
            expect_eq!(zeros, 1);
            expect_eq!(clock.now(), 0);
        }
        TestResult::Pass
    }
}

struct LatchFollowsSample;
impl TestCase for LatchFollowsSample {
    fn name(&self) -> &'static str {
        "latch holds the latest sample only"
    }

    fn run(&self) -> TestResult {
        let clock = SystemClock::new();
        expect_eq!(clock.events(), 0);

        clock.tick(0x18);
        expect_eq!(clock.events(), 0x18);

        // No history: the next tick replaces the snapshot outright.
        clock.tick(0x00);
        expect_eq!(clock.events(), 0x00);
        TestResult::Pass
    }
}

#[avr_device::entry]
fn main() -> ! {
    let mut runner = TestRunner::new();
    runner.run_suite(
        "clock",
        &[
            &CounterWrapsOncePerPeriod,
            &CounterWrapsFromAnyOffset,
            &LatchFollowsSample,
        ],
    );

    loop {}
}
