pub mod buttons;
pub mod lcd;
pub mod motor;
pub mod serial_console;
pub mod signal;

pub use buttons::{EdgeDecoder, Edges};
pub use lcd::{DisplayBuffer, Lcd};
pub use motor::{Direction, MotorDrive};
pub use serial_console::SerialConsole;
pub use signal::SignalOutput;
