//! Configuration constants for the panel-rig firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Tick interrupt rate in Hz
pub const TICK_HZ: u32 = 1_000;

/// Modulus of the millisecond counter; `clock::now()` stays below this
pub const TICK_PERIOD: u16 = 1_000;

/// Timer 1 compare value for one tick at prescaler 256
pub const TICK_COMPARE: u16 = (CPU_FREQ_HZ / 256 / TICK_HZ) as u16;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// LCD register-select line, port C
pub const LCD_RS_PIN: u8 = 0;
/// LCD read/write line, port C
pub const LCD_RW_PIN: u8 = 1;
/// LCD enable strobe, port C
pub const LCD_EN_PIN: u8 = 2;
/// "up" button, port C, active low
pub const BTN_UP_PIN: u8 = 3;
/// "down" button (direction switch in the motor variant), port C, active low
pub const BTN_DOWN_PIN: u8 = 4;

/// Event-latch bit for the "up" button
pub const EVENT_BTN_UP: u8 = 1 << BTN_UP_PIN;
/// Event-latch bit for the "down" button
pub const EVENT_BTN_DOWN: u8 = 1 << BTN_DOWN_PIN;
/// Event-latch bit for the motor-variant direction switch
pub const EVENT_SWITCH: u8 = 1 << BTN_UP_PIN;
/// Input bits sampled into the event latch every tick
pub const EVENT_MASK: u8 = EVENT_BTN_UP | EVENT_BTN_DOWN;

/// Square-wave output bit, port D
pub const SIGNAL_PIN: u8 = 0;
/// Port-D mask for the square-wave output
pub const SIGNAL_MASK: u8 = 1 << SIGNAL_PIN;
/// Motor forward leg, port D
pub const MOTOR_FWD_PIN: u8 = 0;
/// Motor reverse leg, port D
pub const MOTOR_REV_PIN: u8 = 1;
/// Port-D mask for the motor driver
pub const MOTOR_MASK: u8 = (1 << MOTOR_FWD_PIN) | (1 << MOTOR_REV_PIN);

/// Port-D bits owned by the selected output stage
#[cfg(not(feature = "motor-drive"))]
pub const OUTPUT_STAGE_MASK: u8 = SIGNAL_MASK;
#[cfg(feature = "motor-drive")]
pub const OUTPUT_STAGE_MASK: u8 = MOTOR_MASK;

/// Characters reserved for the display label
pub const DISPLAY_LABEL_LEN: usize = 13;
/// Characters reserved for the two-digit value region
pub const DISPLAY_DIGITS_LEN: usize = 2;
/// Total display buffer length
pub const DISPLAY_LEN: usize = DISPLAY_LABEL_LEN + DISPLAY_DIGITS_LEN;

/// Busy-wait after each LCD command/data strobe, in ticks
pub const LCD_STROBE_DELAY_MS: u16 = 3;

/// Pacing delay floor; 0 would disable pacing entirely
pub const DELAY_MIN_MS: u16 = 1;
/// Pacing delay ceiling
pub const DELAY_MAX_MS: u16 = 90;
/// Pacing delay at power-on
pub const DELAY_DEFAULT_MS: u16 = 50;

/// Motor-variant drive period between direction refreshes
pub const MOTOR_DRIVE_MS: u16 = 20;

/// Startup caption; the last two characters are the value region
#[cfg(not(feature = "motor-drive"))]
pub const CAPTION: [u8; DISPLAY_LEN] = *b" speed (ms): 50";
#[cfg(feature = "motor-drive")]
pub const CAPTION: [u8; DISPLAY_LEN] = *b" direction:  fw";
