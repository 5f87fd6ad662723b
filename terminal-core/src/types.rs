//! Core Types für das Status-Terminal
//!
//! Datenstrukturen ohne Hardware-Dependencies

use heapless::Vec;

/// Kapazität der Text-Felder (Frage, Antwort, Staging) in Bytes
pub const TEXT_CAPACITY: usize = 1024;

/// Platzhalter bis zur ersten USER-Nachricht
pub const QUESTION_PLACEHOLDER: &[u8] = b"Waiting for a question...";

/// Platzhalter bis zur ersten GEMMA-Nachricht
pub const ANSWER_PLACEHOLDER: &[u8] = b"Waiting for an answer...";

/// Byte-Text mit fester Kapazität
///
/// Bytes jenseits der Kapazität werden verworfen (wie im Zeilen-Buffer),
/// der Buffer wächst nie. Verworfene Bytes werden nur mitgezählt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundedText<const N: usize> {
    bytes: Vec<u8, N>,
    dropped: usize,
}

/// Text-Typ der Display-Felder
pub type Text = BoundedText<TEXT_CAPACITY>;

impl<const N: usize> BoundedText<N> {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            dropped: 0,
        }
    }

    /// Erstellt einen Text, überschüssige Bytes werden abgeschnitten
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut text = Self::new();
        text.extend(bytes);
        text
    }

    /// Ersetzt den Inhalt. Gibt die Anzahl verworfener Bytes zurück.
    pub fn set(&mut self, bytes: &[u8]) -> usize {
        self.clear();
        self.extend(bytes)
    }

    /// Hängt so viel an wie Platz ist. Gibt die Anzahl verworfener Bytes zurück.
    pub fn extend(&mut self, bytes: &[u8]) -> usize {
        let room = N - self.bytes.len();
        let take = bytes.len().min(room);
        // take <= room, kann also nicht fehlschlagen
        let _ = self.bytes.extend_from_slice(&bytes[..take]);
        let dropped = bytes.len() - take;
        self.dropped += dropped;
        dropped
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.dropped = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Anzahl seit dem letzten `set`/`clear` verworfener Bytes
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Welches Text-Feld eine Nachricht betrifft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// USER: Frage, obere LCD-Zeile
    Question,
    /// GEMMA: Antwort, untere LCD-Zeile und Dot-Matrix
    Answer,
}

/// Gemeinsamer Anzeige-Zustand
///
/// Nur der Router schreibt `question`/`answer`. Die Cursor und der
/// Zähler gehören exklusiv dem jeweiligen periodischen Task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub question: Text,
    pub answer: Text,
    pub question_cursor: usize,
    pub answer_cursor: usize,
    /// Steigende Flanken seit Boot, läuft bei u32::MAX über (wrapping)
    pub motion_count: u32,
    pub matrix_char_index: usize,
    pub matrix_sub_column: usize,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            question: Text::from_bytes(QUESTION_PLACEHOLDER),
            answer: Text::from_bytes(ANSWER_PLACEHOLDER),
            question_cursor: 0,
            answer_cursor: 0,
            motion_count: 0,
            matrix_char_index: 0,
            matrix_sub_column: 0,
        }
    }

    /// Übernimmt eine neue Frage und setzt deren Scroll-Cursor zurück
    pub fn set_question(&mut self, bytes: &[u8]) -> usize {
        self.question_cursor = 0;
        self.question.set(bytes)
    }

    /// Übernimmt eine neue Antwort, setzt LCD- und Matrix-Cursor zurück
    pub fn set_answer(&mut self, bytes: &[u8]) -> usize {
        self.answer_cursor = 0;
        self.matrix_char_index = 0;
        self.matrix_sub_column = 0;
        self.answer.set(bytes)
    }

    pub fn set_field(&mut self, field: Field, bytes: &[u8]) -> usize {
        match field {
            Field::Question => self.set_question(bytes),
            Field::Answer => self.set_answer(bytes),
        }
    }

    /// Ziffer für die 7-Segment-Anzeige
    pub fn motion_digit(&self) -> u8 {
        (self.motion_count % 10) as u8
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Peripherie, die einen Fehler gemeldet hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Device {
    Lcd,
    Matrix,
    Segments,
    Indicator,
    Sensor,
}

/// Nicht-fataler Treiberfehler aus einem Tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverFault {
    pub device: Device,
    pub error: crate::DriverError,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for BoundedText<N> {
    fn format(&self, fmt: defmt::Formatter) {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => defmt::write!(fmt, "\"{=str}\" ({}/{})", s, self.len(), N),
            Err(_) => defmt::write!(fmt, "<{} bytes, non-utf8>", self.len()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DisplayState {{ question: {} @{}, answer: {} @{}, motion: {}, matrix: {}/{} }}",
            self.question.len(),
            self.question_cursor,
            self.answer.len(),
            self.answer_cursor,
            self.motion_count,
            self.matrix_char_index,
            self.matrix_sub_column
        )
    }
}
