//! Motion Debouncer
//!
//! Zeitbasiertes Abtasten des Bewegungssensors mit Flankenerkennung.
//! Das Abtastintervall ist der einzige Filter: Wechsel innerhalb eines
//! Intervalls werden nie gesehen.

use crate::config::Polarity;

/// Ergebnis einer Abtastung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// Normalisierter Zustand (Indikator folgt diesem Wert)
    pub active: bool,
    /// Übergang inaktiv -> aktiv in dieser Abtastung
    pub rising: bool,
}

#[derive(Debug, Clone)]
pub struct MotionDebouncer {
    polarity: Polarity,
    was_active: bool,
}

impl MotionDebouncer {
    /// Startet im inaktiven Zustand
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            was_active: false,
        }
    }

    /// Verarbeitet einen Rohpegel
    pub fn sample(&mut self, level_high: bool) -> MotionSample {
        let active = self.polarity.is_active(level_high);
        let rising = active && !self.was_active;
        self.was_active = active;
        MotionSample { active, rising }
    }
}
