//! Laufzeit-Konfiguration des Schedulers
//!
//! Intervalle und Sensor-Polarität. Wird beim Start einmal festgelegt
//! und danach nicht mehr verändert.

/// Referenz-Intervall für den LCD-Scroller (ms)
pub const LCD_INTERVAL_MS: u64 = 350;

/// Referenz-Intervall für den Matrix-Scroller (ms)
pub const MATRIX_INTERVAL_MS: u64 = 80;

/// Referenz-Intervall für das Abfragen des Bewegungssensors (ms)
pub const MOTION_INTERVAL_MS: u64 = 50;

/// Aktiver Pegel des Bewegungssensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Normalisiert einen Rohpegel zu "aktiv"
    pub const fn is_active(self, level_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => level_high,
            Polarity::ActiveLow => !level_high,
        }
    }
}

/// Scheduler-Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalConfig {
    pub lcd_interval_ms: u64,
    pub matrix_interval_ms: u64,
    pub motion_interval_ms: u64,
    pub polarity: Polarity,
}

impl TerminalConfig {
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            lcd_interval_ms: LCD_INTERVAL_MS,
            matrix_interval_ms: MATRIX_INTERVAL_MS,
            motion_interval_ms: MOTION_INTERVAL_MS,
            polarity,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self::new(Polarity::ActiveHigh)
    }
}
