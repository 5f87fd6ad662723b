//! Terminal Core - Platform-agnostic Scheduler, Protocol and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den gemeinsamen Anzeige-Zustand und die
//! komplette Scheduler-/Protokoll-Logik.

#![no_std]

pub mod config;
pub mod font;
pub mod logic;
pub mod matrix;
pub mod motion;
pub mod router;
pub mod scheduler;
pub mod serial;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{Polarity, TerminalConfig};
pub use logic::{scroll_step, segment_pattern, shift_bits_msb_first};
pub use motion::{MotionDebouncer, MotionSample};
pub use router::{Message, RouteOutcome, Router};
pub use scheduler::{Devices, Interval, RoutedLine, Scheduler, TickReport};
pub use serial::{LINE_CAPACITY, LineAssembler, MAX_LINE_LEN};
pub use traits::{
    CharDisplay, Clock, DriverError, IndicatorWriter, LCD_WIDTH, MATRIX_COLUMNS, MatrixWriter,
    MotionSensor, SegmentWriter, SerialSource,
};
pub use types::{BoundedText, Device, DisplayState, DriverFault, Field, Text};
