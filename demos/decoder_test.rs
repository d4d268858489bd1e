#![no_std]
#![no_main]

use panic_halt as _;

use atmega128_ctrlpanel::{
    application::DelaySetting,
    config::{DELAY_MAX_MS, EVENT_BTN_DOWN, EVENT_BTN_UP},
    drivers::{Direction, EdgeDecoder},
    expect, expect_eq,
    testing::{TestCase, TestResult, TestRunner},
};

struct EdgeFiresPerRisingTransition;
impl TestCase for EdgeFiresPerRisingTransition {
    fn name(&self) -> &'static str {
        "edge fires once per rising transition"
    }

    fn run(&self) -> TestResult {
        let mut decoder = EdgeDecoder::new();
        let bit = EVENT_BTN_UP;

        // press - release - press across four polls: two edges, fired on
        // the rising segments only
        expect!(!decoder.poll(0).fired(bit));
        expect!(decoder.poll(bit).fired(bit));
        expect!(!decoder.poll(0).fired(bit));
        expect!(decoder.poll(bit).fired(bit));
        TestResult::Pass
    }
}

struct HeldInputFiresOnce;
impl TestCase for HeldInputFiresOnce {
    fn name(&self) -> &'static str {
        "held input fires exactly once"
    }

    fn run(&self) -> TestResult {
        let mut decoder = EdgeDecoder::new();
        let bit = EVENT_BTN_DOWN;

        let mut fired = 0u8;
        for _ in 0..10 {
            if decoder.poll(bit).fired(bit) {
                fired += 1;
            }
        }
        expect_eq!(fired, 1);
        TestResult::Pass
    }
}

struct IndependentBitsShareAPoll;
impl TestCase for IndependentBitsShareAPoll {
    fn name(&self) -> &'static str {
        "two bits may fire in the same poll"
    }

    fn run(&self) -> TestResult {
        let mut decoder = EdgeDecoder::new();

        let edges = decoder.poll(EVENT_BTN_UP | EVENT_BTN_DOWN);
        expect!(edges.fired(EVENT_BTN_UP));
        expect!(edges.fired(EVENT_BTN_DOWN));
        TestResult::Pass
    }
}

struct DelayClampBehavior;
impl TestCase for DelayClampBehavior {
    fn name(&self) -> &'static str {
        "delay clamps at ceiling and floor"
    }

    fn run(&self) -> TestResult {
        let mut delay = DelaySetting::new(DELAY_MAX_MS);
        delay.increment();
        expect_eq!(delay.get(), DELAY_MAX_MS);

        let mut delay = DelaySetting::new(1);
        delay.decrement();
        expect_eq!(delay.get(), 1);

        let mut delay = DelaySetting::new(2);
        delay.decrement();
        expect_eq!(delay.get(), 1);
        TestResult::Pass
    }
}

struct DirectionTogglesBothWays;
impl TestCase for DirectionTogglesBothWays {
    fn name(&self) -> &'static str {
        "direction toggle is an involution"
    }

    fn run(&self) -> TestResult {
        expect_eq!(Direction::Forward.toggled(), Direction::Reverse);
        expect_eq!(Direction::Reverse.toggled(), Direction::Forward);
        expect_eq!(Direction::Forward.toggled().toggled(), Direction::Forward);
        TestResult::Pass
    }
}

#[avr_device::entry]
fn main() -> ! {
    let mut runner = TestRunner::new();
    runner.run_suite(
        "decoder",
        &[
            &EdgeFiresPerRisingTransition,
            &HeldInputFiresOnce,
            &IndependentBitsShareAPoll,
            &DelayClampBehavior,
            &DirectionTogglesBothWays,
        ],
    );

    loop {}
}
