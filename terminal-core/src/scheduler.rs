//! Kooperativer Super-Loop Scheduler
//!
//! Ein Aufruf von [`Scheduler::tick`] entspricht einer Iteration der
//! Hauptschleife. Jeder periodische Task wird jedes Mal angeboten und prüft
//! selbst über sein [`Interval`], ob er an der Reihe ist. Kein Task blockiert,
//! die Kommunikation läuft ausschließlich über [`DisplayState`].
//!
//! Reihenfolge pro Tick:
//! 1. Serial: alle verfügbaren Bytes lesen, fertige Zeilen routen
//! 2. LCD-Scroller (gated)
//! 3. Matrix-Scroller (gated)
//! 4. Bewegungssensor (gated)
//! 5. 7-Segment-Ziffer (jeder Tick)

use heapless::Vec;

use crate::config::TerminalConfig;
use crate::logic::{scroll_step, segment_pattern};
use crate::matrix::MatrixScroller;
use crate::motion::{MotionDebouncer, MotionSample};
use crate::router::{RouteOutcome, Router};
use crate::serial::LineAssembler;
use crate::traits::{
    CharDisplay, DriverError, IndicatorWriter, MatrixWriter, MotionSensor, SegmentWriter,
    SerialSource,
};
use crate::types::{Device, DisplayState, DriverFault};

/// Maximal gemeldete Zeilen pro Tick (geroutet wird trotzdem jede Zeile)
pub const MAX_REPORTED_LINES: usize = 8;

/// Maximal gemeldete Treiberfehler pro Tick
pub const MAX_REPORTED_FAULTS: usize = 6;

/// "Bin ich dran?"-Prädikat eines periodischen Tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period_ms: u64,
    last_ms: u64,
}

impl Interval {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: 0,
        }
    }

    /// `true` wenn seit dem letzten Lauf mindestens eine Periode vergangen ist.
    /// Merkt sich dann `now_ms` als neuen Startpunkt.
    pub fn is_due(&mut self, now_ms: u64) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Alle Peripherie-Treiber, die der Scheduler bedient
pub struct Devices<R, L, M, G, I, S> {
    pub serial: R,
    pub lcd: L,
    pub matrix: M,
    pub segments: G,
    pub indicator: I,
    pub sensor: S,
}

/// Eine geroutete Zeile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoutedLine {
    pub outcome: RouteOutcome,
    /// Wegen vollem Zeilen-Buffer verworfene Bytes
    pub truncated: usize,
}

/// Was in einem Tick passiert ist (für Logging in der Firmware)
#[derive(Debug, Default)]
pub struct TickReport {
    pub bytes_read: usize,
    pub lines: Vec<RoutedLine, MAX_REPORTED_LINES>,
    pub lcd_refreshed: bool,
    pub matrix_refreshed: bool,
    pub motion: Option<MotionSample>,
    pub faults: Vec<DriverFault, MAX_REPORTED_FAULTS>,
}

impl TickReport {
    fn record(&mut self, device: Device, result: Result<(), DriverError>) {
        if let Err(error) = result {
            // Bei vollem Report geht nur die Meldung verloren, nicht der Tick
            let _ = self.faults.push(DriverFault { device, error });
        }
    }
}

/// Scheduler mit gemeinsamem Anzeige-Zustand
pub struct Scheduler {
    config: TerminalConfig,
    state: DisplayState,
    assembler: LineAssembler,
    router: Router,
    matrix: MatrixScroller,
    debouncer: MotionDebouncer,
    lcd_timer: Interval,
    matrix_timer: Interval,
    motion_timer: Interval,
}

impl Scheduler {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            config,
            state: DisplayState::new(),
            assembler: LineAssembler::new(),
            router: Router::new(),
            matrix: MatrixScroller::new(),
            debouncer: MotionDebouncer::new(config.polarity),
            lcd_timer: Interval::new(config.lcd_interval_ms),
            matrix_timer: Interval::new(config.matrix_interval_ms),
            motion_timer: Interval::new(config.motion_interval_ms),
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn matrix_columns(&self) -> &[u8; crate::traits::MATRIX_COLUMNS] {
        self.matrix.columns()
    }

    /// Eine Iteration der Hauptschleife
    pub fn tick<R, L, M, G, I, S>(
        &mut self,
        now_ms: u64,
        devices: &mut Devices<R, L, M, G, I, S>,
    ) -> TickReport
    where
        R: SerialSource,
        L: CharDisplay,
        M: MatrixWriter,
        G: SegmentWriter,
        I: IndicatorWriter,
        S: MotionSensor,
    {
        let mut report = TickReport::default();

        self.service_serial(&mut devices.serial, &mut report);

        if self.lcd_timer.is_due(now_ms) {
            self.scroll_lcd(&mut devices.lcd, &mut report);
        }
        if self.matrix_timer.is_due(now_ms) {
            self.scroll_matrix(&mut devices.matrix, &mut report);
        }
        if self.motion_timer.is_due(now_ms) {
            self.poll_motion(&mut devices.sensor, &mut devices.indicator, &mut report);
        }
        self.update_digit(&mut devices.segments, &mut report);

        report
    }

    /// Liest alle anliegenden Bytes. Lange Bursts verzögern die übrigen
    /// Tasks entsprechend, es gibt keine Unterbrechung.
    fn service_serial<R: SerialSource>(&mut self, serial: &mut R, report: &mut TickReport) {
        let Self {
            assembler,
            router,
            state,
            ..
        } = self;
        let lines = &mut report.lines;

        let bytes_read = assembler.drain(serial, |line, truncated| {
            let outcome = router.route(line, state);
            let _ = lines.push(RoutedLine { outcome, truncated });
        });
        report.bytes_read = bytes_read;
    }

    fn scroll_lcd<L: CharDisplay>(&mut self, lcd: &mut L, report: &mut TickReport) {
        let state = &mut self.state;
        let top = scroll_step(state.question.as_bytes(), &mut state.question_cursor);
        let bottom = scroll_step(state.answer.as_bytes(), &mut state.answer_cursor);

        report.record(Device::Lcd, lcd.write_text(0, &top));
        report.record(Device::Lcd, lcd.write_text(1, &bottom));
        report.lcd_refreshed = true;
    }

    fn scroll_matrix<M: MatrixWriter>(&mut self, matrix: &mut M, report: &mut TickReport) {
        let columns = self.matrix.step(&mut self.state);
        report.record(Device::Matrix, matrix.write_columns(columns));
        report.matrix_refreshed = true;
    }

    fn poll_motion<S: MotionSensor, I: IndicatorWriter>(
        &mut self,
        sensor: &mut S,
        indicator: &mut I,
        report: &mut TickReport,
    ) {
        let level = match sensor.is_high() {
            Ok(level) => level,
            Err(error) => {
                // Abtastung auslassen, vorheriger Zustand bleibt erhalten
                report.record(Device::Sensor, Err(error));
                return;
            }
        };

        let sample = self.debouncer.sample(level);
        if sample.rising {
            self.state.motion_count = self.state.motion_count.wrapping_add(1);
        }
        report.record(Device::Indicator, indicator.set(sample.active));
        report.motion = Some(sample);
    }

    fn update_digit<G: SegmentWriter>(&mut self, segments: &mut G, report: &mut TickReport) {
        let pattern = segment_pattern(self.state.motion_digit());
        report.record(Device::Segments, segments.write_segments(pattern));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal-Treiber: Sensor dauerhaft high, Ausgaben werden nur gemerkt
    struct Bench {
        pattern: u8,
        indicator: bool,
    }

    impl SerialSource for Bench {
        fn read_byte(&mut self) -> Option<u8> {
            None
        }
    }

    impl CharDisplay for Bench {
        fn write_text(&mut self, _row: u8, _text: &[u8; 16]) -> Result<(), DriverError> {
            Ok(())
        }
    }

    impl MatrixWriter for Bench {
        fn write_columns(&mut self, _columns: &[u8; 8]) -> Result<(), DriverError> {
            Ok(())
        }
    }

    impl SegmentWriter for Bench {
        fn write_segments(&mut self, pattern: u8) -> Result<(), DriverError> {
            self.pattern = pattern;
            Ok(())
        }
    }

    impl IndicatorWriter for Bench {
        fn set(&mut self, on: bool) -> Result<(), DriverError> {
            self.indicator = on;
            Ok(())
        }
    }

    impl MotionSensor for Bench {
        fn is_high(&mut self) -> Result<bool, DriverError> {
            Ok(true)
        }
    }

    fn bench() -> Bench {
        Bench {
            pattern: 0,
            indicator: false,
        }
    }

    #[test]
    fn test_interval_not_due_before_period() {
        let mut interval = Interval::new(350);
        assert!(!interval.is_due(0));
        assert!(!interval.is_due(349));
        assert!(interval.is_due(350));
        assert!(!interval.is_due(699));
        assert!(interval.is_due(700));
    }

    #[test]
    fn test_interval_restarts_from_late_run() {
        let mut interval = Interval::new(80);
        assert!(interval.is_due(200));
        // Nächster Lauf zählt ab 200, nicht ab 160
        assert!(!interval.is_due(279));
        assert!(interval.is_due(280));
    }

    #[test]
    fn test_motion_count_wraps_to_zero() {
        let mut scheduler = Scheduler::new(TerminalConfig::default());
        scheduler.state.motion_count = u32::MAX;
        let mut devices = Devices {
            serial: bench(),
            lcd: bench(),
            matrix: bench(),
            segments: bench(),
            indicator: bench(),
            sensor: bench(),
        };

        let report = scheduler.tick(50, &mut devices);

        assert_eq!(
            report.motion,
            Some(MotionSample {
                active: true,
                rising: true
            })
        );
        assert_eq!(scheduler.state().motion_count, 0);
        assert_eq!(devices.segments.pattern, segment_pattern(0));
        assert!(devices.indicator.indicator);
        assert!(report.faults.is_empty());
    }
}
