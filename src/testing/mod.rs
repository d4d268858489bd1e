//! On-target test support, reporting over the serial console.

use ufmt::uwriteln;

use crate::drivers::SerialConsole;

pub trait TestCase {
    fn name(&self) -> &'static str;
    fn run(&self) -> TestResult;
}

#[derive(PartialEq)]
pub enum TestResult {
    Pass,
    Fail(&'static str),
}

pub struct TestRunner {
    console: SerialConsole,
    total: u16,
    passed: u16,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            console: SerialConsole::new(),
            total: 0,
            passed: 0,
        }
    }

    pub fn run_suite(&mut self, name: &'static str, tests: &[&dyn TestCase]) {
        uwriteln!(&mut self.console, "\r\n=== Suite: {} ===\r", name).ok();

        for test in tests {
            self.total += 1;
            match test.run() {
                TestResult::Pass => {
                    self.passed += 1;
                    uwriteln!(&mut self.console, "{}: PASS\r", test.name()).ok();
                }
                TestResult::Fail(reason) => {
                    uwriteln!(&mut self.console, "{}: FAIL - {}\r", test.name(), reason).ok();
                }
            }
        }

        self.print_summary();
    }

    pub fn all_passed(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }

    fn print_summary(&mut self) {
        uwriteln!(&mut self.console, "passed {}/{}\r", self.passed, self.total).ok();
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail the enclosing [`TestCase::run`] unless the condition holds.
#[macro_export]
macro_rules! expect {
    ($cond:expr) => {
        if !$cond {
            return $crate::testing::TestResult::Fail(concat!("expected ", stringify!($cond)));
        }
    };
}

/// Fail the enclosing [`TestCase::run`] unless both sides are equal.
#[macro_export]
macro_rules! expect_eq {
    ($left:expr, $right:expr) => {
        if $left != $right {
            return $crate::testing::TestResult::Fail(concat!(
                "expected ",
                stringify!($left),
                " == ",
                stringify!($right)
            ));
        }
    };
}
