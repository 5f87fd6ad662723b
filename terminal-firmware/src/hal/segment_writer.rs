// Einzelne 7-Segment-Ziffer hinter einem 74HC595
//
// Protokoll: Latch low -> Byte MSB zuerst schieben -> Latch high.

use embedded_hal::digital::OutputPin;
use terminal_core::{DriverError, SegmentWriter};

use super::shift_out::shift_out;

/// Segment-Writer über Data/Clock/Latch
pub struct Hc595Digit<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
}

impl<DATA, CLK, LATCH> Hc595Digit<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    pub fn new(data: DATA, clock: CLK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    /// Anzeige dunkel schalten
    pub fn init(&mut self) -> Result<(), DriverError> {
        self.write_segments(0x00)
    }
}

impl<DATA, CLK, LATCH> SegmentWriter for Hc595Digit<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    fn write_segments(&mut self, pattern: u8) -> Result<(), DriverError> {
        self.latch.set_low().map_err(|_| DriverError::WriteFailed)?;
        shift_out(&mut self.data, &mut self.clock, pattern)?;
        self.latch.set_high().map_err(|_| DriverError::WriteFailed)
    }
}
