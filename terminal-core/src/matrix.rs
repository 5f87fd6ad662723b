//! Matrix Scroller
//!
//! Schiebt den 8-Spalten-Buffer pro Schritt um eine Spalte nach links und
//! hängt rechts die nächste Glyph-Spalte der Antwort an.

use crate::font::{GLYPH_WIDTH, glyph_column};
use crate::traits::MATRIX_COLUMNS;
use crate::types::DisplayState;

/// Render-Buffer der Dot-Matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixScroller {
    columns: [u8; MATRIX_COLUMNS],
}

impl MatrixScroller {
    pub const fn new() -> Self {
        Self {
            columns: [0; MATRIX_COLUMNS],
        }
    }

    pub fn columns(&self) -> &[u8; MATRIX_COLUMNS] {
        &self.columns
    }

    /// Ein Scroll-Schritt über `state.answer`.
    ///
    /// Eine leere Antwort wird nie indiziert, es wird eine leere Spalte
    /// angehängt und der Cursor bleibt auf 0.
    pub fn step(&mut self, state: &mut DisplayState) -> &[u8; MATRIX_COLUMNS] {
        self.columns.copy_within(1.., 0);

        let answer = state.answer.as_bytes();
        if state.matrix_char_index >= answer.len() {
            state.matrix_char_index = 0;
        }
        if state.matrix_sub_column >= GLYPH_WIDTH {
            state.matrix_sub_column = 0;
        }

        let column = match answer.get(state.matrix_char_index) {
            Some(&ch) => glyph_column(ch, state.matrix_sub_column),
            None => 0,
        };
        self.columns[MATRIX_COLUMNS - 1] = column;

        if answer.is_empty() {
            state.matrix_sub_column = 0;
        } else {
            state.matrix_sub_column += 1;
            if state.matrix_sub_column >= GLYPH_WIDTH {
                state.matrix_sub_column = 0;
                state.matrix_char_index += 1;
                if state.matrix_char_index >= answer.len() {
                    state.matrix_char_index = 0;
                }
            }
        }

        &self.columns
    }
}
