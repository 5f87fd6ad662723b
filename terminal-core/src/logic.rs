//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::traits::LCD_WIDTH;

/// 7-Segment-Muster für 0-9 (gemeinsame Kathode, Bit 0 = a ... Bit 6 = g)
pub const SEGMENT_DIGITS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

/// Segment-Muster für eine Ziffer, Werte >= 10 werden modulo 10 genommen
pub fn segment_pattern(digit: u8) -> u8 {
    SEGMENT_DIGITS[usize::from(digit % 10)]
}

/// Bits eines Bytes in Schiebe-Reihenfolge (MSB zuerst)
///
/// # Beispiele
///
/// ```
/// # use terminal_core::shift_bits_msb_first;
/// let bits: Vec<bool> = shift_bits_msb_first(0b1000_0001).collect();
/// assert_eq!(bits, [true, false, false, false, false, false, false, true]);
/// ```
pub fn shift_bits_msb_first(byte: u8) -> impl Iterator<Item = bool> {
    (0..8).rev().map(move |bit| byte & (1 << bit) != 0)
}

// ============================================================================
// LCD Scrolling
// ============================================================================

/// Länge der gepolsterten Variante: kurze Texte bleiben unverändert,
/// lange Texte bekommen vorne und hinten je ein Leerzeichen.
pub fn padded_len(len: usize) -> usize {
    if len <= LCD_WIDTH { len } else { len + 2 }
}

/// Größter gültiger Cursor für einen Text der Länge `len`
pub fn max_cursor(len: usize) -> usize {
    padded_len(len).saturating_sub(LCD_WIDTH)
}

fn padded_byte(text: &[u8], index: usize) -> Option<u8> {
    if text.len() <= LCD_WIDTH {
        return text.get(index).copied();
    }
    match index {
        0 => Some(b' '),
        i if i == text.len() + 1 => Some(b' '),
        i => text.get(i - 1).copied(),
    }
}

/// 16-Zeichen-Fenster ab `cursor`, rechts mit Leerzeichen aufgefüllt
pub fn scroll_window(text: &[u8], cursor: usize) -> [u8; LCD_WIDTH] {
    let mut row = [b' '; LCD_WIDTH];
    for (offset, slot) in row.iter_mut().enumerate() {
        if let Some(byte) = padded_byte(text, cursor + offset) {
            *slot = byte;
        }
    }
    row
}

/// Nächster Cursor, zyklisch ohne Pause an den Enden
pub fn advance_cursor(len: usize, cursor: usize) -> usize {
    let next = cursor + 1;
    if next > max_cursor(len) { 0 } else { next }
}

/// Ein Scroll-Schritt: Fenster berechnen, Cursor weiterschieben.
///
/// Ein Cursor außerhalb des gültigen Bereichs wird vorher auf 0 gesetzt.
pub fn scroll_step(text: &[u8], cursor: &mut usize) -> [u8; LCD_WIDTH] {
    if *cursor > max_cursor(text.len()) {
        *cursor = 0;
    }
    let row = scroll_window(text, *cursor);
    *cursor = advance_cursor(text.len(), *cursor);
    row
}
