pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::{board, Input, Output, Pin, PortOps};
pub use timer::TickTimer;
pub use uart::Uart;
