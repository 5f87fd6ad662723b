//! Message Router
//!
//! Wertet eine fertige Zeile aus und überschreibt die passenden Felder
//! des Anzeige-Zustands. Unbekannte Zeilen werden stillschweigend ignoriert.
//!
//! Unterstützte Zeilen:
//! ```text
//! USER:<payload>          GEMMA:<payload>
//! USER_START:<chunk>      GEMMA_START:<chunk>
//! USER_APPEND:<chunk>     GEMMA_APPEND:<chunk>
//! USER_END:               GEMMA_END:
//! ```

use crate::types::{DisplayState, Field, Text};

/// Tag der Frage-Nachrichten
pub const QUESTION_TAG: &[u8] = b"USER";

/// Tag der Antwort-Nachrichten
pub const ANSWER_TAG: &[u8] = b"GEMMA";

/// Eine erkannte Protokoll-Zeile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// `TAG:<payload>` - ersetzt das Feld direkt
    Set { field: Field, payload: &'a [u8] },
    /// `TAG_START:<chunk>` - öffnet einen neuen Staging-Text
    Start { field: Field, chunk: &'a [u8] },
    /// `TAG_APPEND:<chunk>` - hängt an den offenen Staging-Text an
    Append { field: Field, chunk: &'a [u8] },
    /// `TAG_END:` - übernimmt den Staging-Text ins Feld
    End { field: Field },
}

impl<'a> Message<'a> {
    /// Exakter, case-sensitiver Präfix-Vergleich. USER wird vor GEMMA geprüft.
    pub fn parse(line: &'a [u8]) -> Option<Self> {
        [(QUESTION_TAG, Field::Question), (ANSWER_TAG, Field::Answer)]
            .into_iter()
            .find_map(|(tag, field)| Self::parse_tagged(line.strip_prefix(tag)?, field))
    }

    fn parse_tagged(rest: &'a [u8], field: Field) -> Option<Self> {
        if let Some(payload) = rest.strip_prefix(b":") {
            Some(Self::Set { field, payload })
        } else if let Some(chunk) = rest.strip_prefix(b"_START:") {
            Some(Self::Start { field, chunk })
        } else if let Some(chunk) = rest.strip_prefix(b"_APPEND:") {
            Some(Self::Append { field, chunk })
        } else if rest.starts_with(b"_END:") {
            Some(Self::End { field })
        } else {
            None
        }
    }
}

/// Ergebnis einer gerouteten Zeile (nur für Logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouteOutcome {
    /// Feld wurde ersetzt, Cursor zurückgesetzt
    Updated {
        field: Field,
        len: usize,
        dropped: usize,
    },
    /// Chunk wurde in den Staging-Text übernommen
    Staged { field: Field, len: usize },
    /// Zeile ohne Wirkung (unbekannt, leer, oder Chunk ohne offenes Staging)
    Ignored,
}

/// Router mit Staging-Buffer für mehrteilige Nachrichten
#[derive(Debug, Default)]
pub struct Router {
    staging: Text,
    open: Option<Field>,
}

impl Router {
    pub const fn new() -> Self {
        Self {
            staging: Text::new(),
            open: None,
        }
    }

    /// Feld mit gerade offenem Staging
    pub fn open_field(&self) -> Option<Field> {
        self.open
    }

    pub fn route(&mut self, line: &[u8], state: &mut DisplayState) -> RouteOutcome {
        let Some(message) = Message::parse(line) else {
            return RouteOutcome::Ignored;
        };

        match message {
            Message::Set { field, payload } => {
                let dropped = state.set_field(field, payload);
                RouteOutcome::Updated {
                    field,
                    len: payload.len() - dropped,
                    dropped,
                }
            }
            Message::Start { field, chunk } => {
                self.staging.set(chunk);
                self.open = Some(field);
                RouteOutcome::Staged {
                    field,
                    len: self.staging.len(),
                }
            }
            Message::Append { field, chunk } if self.open == Some(field) => {
                self.staging.extend(chunk);
                RouteOutcome::Staged {
                    field,
                    len: self.staging.len(),
                }
            }
            Message::End { field } if self.open == Some(field) => {
                self.open = None;
                let dropped = self.staging.dropped();
                state.set_field(field, self.staging.as_bytes());
                let len = self.staging.len();
                self.staging.clear();
                RouteOutcome::Updated {
                    field,
                    len,
                    dropped,
                }
            }
            Message::Append { .. } | Message::End { .. } => RouteOutcome::Ignored,
        }
    }
}
