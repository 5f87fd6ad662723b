//! Serial Line Assembler
//!
//! Sammelt eingehende Bytes in einem Buffer fester Größe bis zum
//! Zeilenende (`\n`). Bytes jenseits der Kapazität werden stillschweigend
//! verworfen, das Zeilenende wird trotzdem erkannt.

use heapless::Vec;

use crate::traits::SerialSource;

/// Buffer-Kapazität inkl. Terminator (wie im Protokoll festgelegt)
pub const LINE_CAPACITY: usize = 256;

/// Maximal nutzbare Zeilenlänge
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

/// Zeilenende
pub const LINE_TERMINATOR: u8 = b'\n';

/// Zeilen-Buffer mit "ready"-Flag
#[derive(Debug, Default)]
pub struct LineAssembler {
    buf: Vec<u8, MAX_LINE_LEN>,
    ready: bool,
    dropped: usize,
}

impl LineAssembler {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            ready: false,
            dropped: 0,
        }
    }

    /// Verarbeitet ein Byte. Gibt `true` zurück, sobald eine Zeile komplett ist.
    ///
    /// Eine fertige, aber nicht abgeholte Zeile wird vom nächsten Byte verworfen.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.ready {
            self.consume();
        }

        if byte == LINE_TERMINATOR {
            self.ready = true;
            return true;
        }

        if self.buf.push(byte).is_err() {
            self.dropped += 1;
        }
        false
    }

    /// Die fertige Zeile (ohne Terminator), falls vorhanden
    pub fn line(&self) -> Option<&[u8]> {
        self.ready.then_some(self.buf.as_slice())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Anzahl verworfener Bytes der aktuellen Zeile
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Bisher gesammelte Bytes (auch ohne Terminator)
    pub fn pending_len(&self) -> usize {
        self.buf.len()
    }

    /// Setzt Index und "ready"-Flag zurück. Der Speicher wird nicht gelöscht.
    pub fn consume(&mut self) {
        self.buf.clear();
        self.ready = false;
        self.dropped = 0;
    }

    /// Liest alle aktuell verfügbaren Bytes.
    ///
    /// Jede fertige Zeile wird sofort an `on_line` übergeben (Zeile,
    /// verworfene Bytes) und danach konsumiert. Gibt die Anzahl gelesener
    /// Bytes zurück.
    pub fn drain<S, F>(&mut self, source: &mut S, mut on_line: F) -> usize
    where
        S: SerialSource,
        F: FnMut(&[u8], usize),
    {
        let mut count = 0;
        while let Some(byte) = source.read_byte() {
            count += 1;
            if self.push(byte) {
                on_line(self.buf.as_slice(), self.dropped);
                self.consume();
            }
        }
        count
    }
}
