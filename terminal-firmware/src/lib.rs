// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von terminal-core
pub use terminal_core::{Devices, Scheduler, TerminalConfig};

use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Output};
use esp_hal::i2c::master::I2c;

use crate::hal::{GpioIndicator, GpioMotionSensor, Hc595Digit, Hd44780I2c, Max7219, UartSource};

// ============================================================================
// Type-Aliase für die konkreten Treiber
// ============================================================================
//
// Embassy Tasks dürfen nicht generisch sein. Diese Aliase legen die
// Hardware-Typen fest, die der Terminal Task bekommt.

/// LCD: HD44780 über I2C0
pub type LcdDriver = Hd44780I2c<I2c<'static, Blocking>, Delay>;

/// Dot-Matrix: MAX7219 über DIN/CS/CLK
pub type MatrixDriver = Max7219<Output<'static>, Output<'static>, Output<'static>>;

/// 7-Segment: 74HC595 über Data/Clock/Latch
pub type SegmentDriver = Hc595Digit<Output<'static>, Output<'static>, Output<'static>>;

/// Alle Treiber des Terminals
pub type TerminalDevices = Devices<
    UartSource<'static>,
    LcdDriver,
    MatrixDriver,
    SegmentDriver,
    GpioIndicator<Output<'static>>,
    GpioMotionSensor<Input<'static>>,
>;
