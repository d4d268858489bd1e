#![no_std]
#![no_main]

// Motor-drive variant of the panel loop; build with
// `--features motor-drive`.

use panic_halt as _;

use avr_device::atmega128a::PORTB;

use atmega128_ctrlpanel::{
    application::Application,
    config,
    drivers::{Lcd, SerialConsole},
    hal::{board, TickTimer},
};

#[avr_device::entry]
fn main() -> ! {
    let panel = board::init();

    let mut timer = TickTimer::new();
    timer.start();
    unsafe { avr_device::interrupt::enable() };

    let mut console = SerialConsole::new();
    console.write_line("motor-drive demo");

    let mut lcd: Lcd<PORTB, _, _, _> = Lcd::new(panel.rs, panel.rw, panel.en, config::CAPTION);
    lcd.init();
    lcd.render();

    let mut app = Application::new();

    loop {
        app.run_cycle(&mut lcd, &mut console);
    }
}
