//! Mock-Treiber für die Integration Tests
//!
//! Alle Mocks zählen ihre Schreibzugriffe und können einen Fehler
//! beim nächsten Zugriff simulieren.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;

use terminal_core::{
    CharDisplay, Clock, Devices, DriverError, IndicatorWriter, LCD_WIDTH, MATRIX_COLUMNS,
    MatrixWriter, MotionSensor, Scheduler, SegmentWriter, SerialSource, TerminalConfig,
    TickReport,
};

// ============================================================================
// Serial
// ============================================================================

#[derive(Default)]
pub struct MockSerial {
    pub pending: VecDeque<u8>,
}

impl MockSerial {
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes.iter().copied());
    }

    /// Hängt `\n` an
    pub fn push_line(&mut self, line: &[u8]) {
        self.push_bytes(line);
        self.pending.push_back(b'\n');
    }
}

impl SerialSource for MockSerial {
    fn read_byte(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}

// ============================================================================
// LCD
// ============================================================================

#[derive(Default)]
pub struct MockLcd {
    pub rows: [[u8; LCD_WIDTH]; 2],
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLcd {
    pub fn row(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.rows[row]).into_owned()
    }
}

impl CharDisplay for MockLcd {
    fn write_text(&mut self, row: u8, text: &[u8; LCD_WIDTH]) -> Result<(), DriverError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(DriverError::WriteFailed);
        }

        self.rows[usize::from(row)] = *text;
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Dot-Matrix
// ============================================================================

#[derive(Default)]
pub struct MockMatrix {
    pub frames: Vec<[u8; MATRIX_COLUMNS]>,
    pub fail_next_write: bool,
}

impl MockMatrix {
    pub fn last_frame(&self) -> Option<&[u8; MATRIX_COLUMNS]> {
        self.frames.last()
    }
}

impl MatrixWriter for MockMatrix {
    fn write_columns(&mut self, columns: &[u8; MATRIX_COLUMNS]) -> Result<(), DriverError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(DriverError::WriteFailed);
        }

        self.frames.push(*columns);
        Ok(())
    }
}

// ============================================================================
// 7-Segment
// ============================================================================

#[derive(Default)]
pub struct MockSegments {
    pub last_pattern: Option<u8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl SegmentWriter for MockSegments {
    fn write_segments(&mut self, pattern: u8) -> Result<(), DriverError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(DriverError::WriteFailed);
        }

        self.last_pattern = Some(pattern);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Indikator + Sensor
// ============================================================================

#[derive(Default)]
pub struct MockIndicator {
    pub history: Vec<bool>,
    pub fail_next_write: bool,
}

impl IndicatorWriter for MockIndicator {
    fn set(&mut self, on: bool) -> Result<(), DriverError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(DriverError::WriteFailed);
        }

        self.history.push(on);
        Ok(())
    }
}

/// Liefert die Pegel aus `levels` der Reihe nach, danach bleibt `idle_level`
#[derive(Default)]
pub struct MockSensor {
    pub levels: VecDeque<bool>,
    pub idle_level: bool,
    pub read_count: usize,
    pub fail_next_read: bool,
}

impl MockSensor {
    pub fn push_levels(&mut self, levels: &[bool]) {
        self.levels.extend(levels.iter().copied());
    }
}

impl MotionSensor for MockSensor {
    fn is_high(&mut self) -> Result<bool, DriverError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(DriverError::ReadFailed);
        }

        self.read_count += 1;
        Ok(self.levels.pop_front().unwrap_or(self.idle_level))
    }
}

// ============================================================================
// Clock
// ============================================================================

#[derive(Default)]
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type MockDevices =
    Devices<MockSerial, MockLcd, MockMatrix, MockSegments, MockIndicator, MockSensor>;

pub fn mock_devices() -> MockDevices {
    Devices {
        serial: MockSerial::default(),
        lcd: MockLcd::default(),
        matrix: MockMatrix::default(),
        segments: MockSegments::default(),
        indicator: MockIndicator::default(),
        sensor: MockSensor::default(),
    }
}

pub fn setup() -> (Scheduler, MockDevices) {
    (Scheduler::new(TerminalConfig::default()), mock_devices())
}

/// Ein Tick zur Zeit der Clock
pub fn tick(scheduler: &mut Scheduler, devices: &mut MockDevices, clock: &MockClock) -> TickReport {
    scheduler.tick(clock.now_ms(), devices)
}

/// Springt zum nächsten LCD-Schritt (Vielfaches von 350 ms) und tickt
pub fn next_lcd_step(
    scheduler: &mut Scheduler,
    devices: &mut MockDevices,
    clock: &MockClock,
) -> TickReport {
    clock.advance(scheduler.config().lcd_interval_ms);
    tick(scheduler, devices, clock)
}
