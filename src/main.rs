#![no_std]
#![no_main]

use panic_halt as _;

use avr_device::atmega128a::PORTB;

use atmega128_ctrlpanel::application::Application;
use atmega128_ctrlpanel::config;
use atmega128_ctrlpanel::drivers::{Lcd, SerialConsole};
use atmega128_ctrlpanel::hal::{board, TickTimer};

#[avr_device::entry]
fn main() -> ! {
    let panel = board::init();

    // The LCD strobes are timed by the millisecond clock, so the tick
    // interrupt must be running before the display is touched.
    let mut timer = TickTimer::new();
    timer.start();
    unsafe { avr_device::interrupt::enable() };

    let mut console = SerialConsole::new();
    console.write_line("ATmega128 ctrlpanel v0.1.0");

    let mut lcd: Lcd<PORTB, _, _, _> = Lcd::new(panel.rs, panel.rw, panel.en, config::CAPTION);
    lcd.init();
    lcd.render();

    let mut app = Application::new();

    loop {
        app.run_cycle(&mut lcd, &mut console);
    }
}
