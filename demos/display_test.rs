#![no_std]
#![no_main]

use panic_halt as _;

use atmega128_ctrlpanel::{
    application::DelaySetting,
    config::{CAPTION, DELAY_DEFAULT_MS, DISPLAY_LABEL_LEN, EVENT_BTN_UP},
    drivers::{DisplayBuffer, EdgeDecoder},
    expect, expect_eq,
    testing::{TestCase, TestResult, TestRunner},
};

struct TwoDigitEncoding;
impl TestCase for TwoDigitEncoding {
    fn name(&self) -> &'static str {
        "value region encodes tens then ones"
    }

    fn run(&self) -> TestResult {
        let mut buffer = DisplayBuffer::new(CAPTION);

        for (value, text) in [(7u8, b"07"), (50, b"50"), (99, b"99")] {
            buffer.set_value(value);
            expect_eq!(&buffer.as_bytes()[DISPLAY_LABEL_LEN..], &text[..]);
        }

        // The label region is untouched by value updates.
        expect_eq!(
            &buffer.as_bytes()[..DISPLAY_LABEL_LEN],
            &CAPTION[..DISPLAY_LABEL_LEN]
        );
        TestResult::Pass
    }
}

struct PanelIncrementEndToEnd;
impl TestCase for PanelIncrementEndToEnd {
    fn name(&self) -> &'static str {
        "up edge bumps the value and the digits"
    }

    fn run(&self) -> TestResult {
        let mut decoder = EdgeDecoder::new();
        let mut delay = DelaySetting::new(DELAY_DEFAULT_MS);
        let mut buffer = DisplayBuffer::new(CAPTION);
        expect_eq!(delay.get(), 50);

        // One rising edge on the up bit, wired the way the application
        // wires it: bump the parameter, then refresh the digit region.
        let edges = decoder.poll(EVENT_BTN_UP);
        if edges.fired(EVENT_BTN_UP) {
            delay.increment();
        }
        expect_eq!(delay.get(), 51);
        expect!(edges.any());

        buffer.set_value(delay.get() as u8);
        expect_eq!(&buffer.as_bytes()[DISPLAY_LABEL_LEN..], &b"51"[..]);
        TestResult::Pass
    }
}

#[avr_device::entry]
fn main() -> ! {
    let mut runner = TestRunner::new();
    runner.run_suite("display", &[&TwoDigitEncoding, &PanelIncrementEndToEnd]);

    loop {}
}
