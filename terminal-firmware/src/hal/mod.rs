// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Peripherie-Traits aus terminal-core
// für die konkrete Hardware am ESP32-C6.

pub mod clock;
pub mod gpio;
pub mod lcd_writer;
pub mod matrix_writer;
pub mod segment_writer;
pub mod shift_out;
pub mod uart_source;

pub use clock::EmbassyClock;
pub use gpio::{GpioIndicator, GpioMotionSensor};
pub use lcd_writer::Hd44780I2c;
pub use matrix_writer::Max7219;
pub use segment_writer::Hc595Digit;
pub use uart_source::UartSource;
