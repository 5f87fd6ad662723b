//! Property Tests für Zeilen-Buffer, LCD-Scrolling und Matrix-Scroller

use proptest::prelude::*;
use terminal_core::logic::{max_cursor, padded_len};
use terminal_core::matrix::MatrixScroller;
use terminal_core::{DisplayState, LCD_WIDTH, LineAssembler, MAX_LINE_LEN, scroll_step};

/// Referenz: Text mit Rand-Leerzeichen, falls länger als eine Zeile
fn padded(text: &[u8]) -> Vec<u8> {
    if text.len() <= LCD_WIDTH {
        return text.to_vec();
    }
    let mut padded = Vec::with_capacity(text.len() + 2);
    padded.push(b' ');
    padded.extend_from_slice(text);
    padded.push(b' ');
    padded
}

proptest! {
    #[test]
    fn prop_assembler_never_exceeds_capacity(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut assembler = LineAssembler::new();
        for byte in bytes {
            assembler.push(byte);
            prop_assert!(assembler.pending_len() <= MAX_LINE_LEN);
        }
    }

    #[test]
    fn prop_assembler_keeps_line_prefix(
        line in prop::collection::vec(any::<u8>().prop_filter("kein Zeilenende", |b| *b != b'\n'), 0..600)
    ) {
        let mut assembler = LineAssembler::new();
        for &byte in &line {
            prop_assert!(!assembler.push(byte));
        }
        prop_assert!(assembler.push(b'\n'));

        let kept = line.len().min(MAX_LINE_LEN);
        prop_assert_eq!(assembler.line(), Some(&line[..kept]));
        prop_assert_eq!(assembler.dropped(), line.len() - kept);
    }

    #[test]
    fn prop_scroll_window_matches_padded_text(
        text in prop::collection::vec(0x20u8..0x7F, 0..80),
        steps in 1usize..200,
    ) {
        let reference = padded(&text);
        prop_assert_eq!(reference.len(), padded_len(text.len()));

        let mut cursor = 0;
        for _ in 0..steps {
            let shown_at = cursor;
            let row = scroll_step(&text, &mut cursor);
            prop_assert!(cursor <= max_cursor(text.len()));

            for (offset, &byte) in row.iter().enumerate() {
                let expected = reference.get(shown_at + offset).copied().unwrap_or(b' ');
                prop_assert_eq!(byte, expected);
            }
        }
    }

    #[test]
    fn prop_scroll_cycle_visits_every_cursor(text in prop::collection::vec(0x20u8..0x7F, 17..60)) {
        let mut cursor = 0;
        let cycle = max_cursor(text.len()) + 1;
        for expected in 0..cycle {
            prop_assert_eq!(cursor, expected);
            scroll_step(&text, &mut cursor);
        }
        prop_assert_eq!(cursor, 0);
    }

    #[test]
    fn prop_matrix_cursor_stays_in_range(
        answer in prop::collection::vec(0x20u8..0x7F, 0..40),
        steps in 1usize..300,
    ) {
        let mut state = DisplayState::new();
        state.set_answer(&answer);
        let mut scroller = MatrixScroller::new();

        for _ in 0..steps {
            scroller.step(&mut state);
            prop_assert!(state.matrix_sub_column < 6);
            prop_assert!(state.matrix_char_index <= answer.len().max(1));
        }
        if answer.is_empty() {
            prop_assert_eq!(scroller.columns(), &[0u8; 8]);
        }
    }
}
