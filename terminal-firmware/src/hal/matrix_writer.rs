// MAX7219 8x8 Dot-Matrix (bit-banged, DIN/CS/CLK)
//
// Digit-Register 1..=8 entsprechen den Spalten 0..=7 des Moduls.

use embedded_hal::digital::OutputPin;
use terminal_core::{DriverError, MATRIX_COLUMNS, MatrixWriter};

use super::shift_out::shift_out;

// MAX7219 Register
const REG_DIGIT0: u8 = 0x01;
const REG_DECODE_MODE: u8 = 0x09;
const REG_INTENSITY: u8 = 0x0A;
const REG_SCAN_LIMIT: u8 = 0x0B;
const REG_SHUTDOWN: u8 = 0x0C;
const REG_DISPLAY_TEST: u8 = 0x0F;

/// Matrix-Writer über drei GPIOs
pub struct Max7219<DIN, CS, CLK> {
    din: DIN,
    cs: CS,
    clk: CLK,
}

impl<DIN, CS, CLK> Max7219<DIN, CS, CLK>
where
    DIN: OutputPin,
    CS: OutputPin,
    CLK: OutputPin,
{
    pub fn new(din: DIN, cs: CS, clk: CLK) -> Self {
        Self { din, cs, clk }
    }

    /// Register setzen und Matrix leeren
    ///
    /// # Parameter
    /// - `intensity`: Helligkeit 0-15 (größere Werte werden begrenzt)
    pub fn init(&mut self, intensity: u8) -> Result<(), DriverError> {
        self.write_register(REG_DISPLAY_TEST, 0x00)?;
        self.write_register(REG_SCAN_LIMIT, 0x07)?;
        self.write_register(REG_DECODE_MODE, 0x00)?;
        self.write_register(REG_INTENSITY, intensity.min(0x0F))?;
        self.write_register(REG_SHUTDOWN, 0x01)?;
        self.write_columns(&[0; MATRIX_COLUMNS])
    }

    fn write_register(&mut self, register: u8, data: u8) -> Result<(), DriverError> {
        self.cs.set_low().map_err(|_| DriverError::WriteFailed)?;
        shift_out(&mut self.din, &mut self.clk, register)?;
        shift_out(&mut self.din, &mut self.clk, data)?;
        // Übernahme mit steigender Flanke an CS/LOAD
        self.cs.set_high().map_err(|_| DriverError::WriteFailed)
    }
}

impl<DIN, CS, CLK> MatrixWriter for Max7219<DIN, CS, CLK>
where
    DIN: OutputPin,
    CS: OutputPin,
    CLK: OutputPin,
{
    fn write_columns(&mut self, columns: &[u8; MATRIX_COLUMNS]) -> Result<(), DriverError> {
        for (register, &column) in (REG_DIGIT0..).zip(columns) {
            self.write_register(register, column)?;
        }
        Ok(())
    }
}
