//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die schmalen Schreib-/Lese-Schnittstellen
//! der Peripherie ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** HD44780/PCF8574, MAX7219, 74HC595, GPIO, UART (terminal-firmware)
//! - **Testing:** Mock-Implementierungen (terminal-tests)

/// Breite einer LCD-Zeile in Zeichen
pub const LCD_WIDTH: usize = 16;

/// Anzahl Spalten der Dot-Matrix
pub const MATRIX_COLUMNS: usize = 8;

/// Fehler-Typ für Peripherie-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    WriteFailed,
    ReadFailed,
}

/// Zweizeiliges Zeichen-Display (16x2)
pub trait CharDisplay {
    /// Schreibt genau eine volle Zeile (`row` 0 oder 1)
    fn write_text(&mut self, row: u8, text: &[u8; LCD_WIDTH]) -> Result<(), DriverError>;
}

/// 8x8 Dot-Matrix, spaltenweise adressiert
pub trait MatrixWriter {
    /// Gibt alle 8 Spalten aus (Bit 0 = oberste Zeile)
    fn write_columns(&mut self, columns: &[u8; MATRIX_COLUMNS]) -> Result<(), DriverError>;
}

/// Einzelne 7-Segment-Ziffer hinter einem Schieberegister
pub trait SegmentWriter {
    /// Schreibt das rohe Segment-Muster (Bit 0 = Segment a ... Bit 6 = g)
    fn write_segments(&mut self, pattern: u8) -> Result<(), DriverError>;
}

/// Digitaler Indikator-Ausgang (z.B. LED)
pub trait IndicatorWriter {
    fn set(&mut self, on: bool) -> Result<(), DriverError>;
}

/// Digitaler Sensor-Eingang (Rohpegel, noch ohne Polaritäts-Normalisierung)
pub trait MotionSensor {
    fn is_high(&mut self) -> Result<bool, DriverError>;
}

/// Nicht-blockierende Byte-Quelle (UART)
pub trait SerialSource {
    /// Liefert das nächste verfügbare Byte oder `None` wenn aktuell nichts anliegt
    fn read_byte(&mut self) -> Option<u8>;
}

/// Monotone Millisekunden-Uhr
pub trait Clock {
    fn now_ms(&self) -> u64;
}
