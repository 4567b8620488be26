use crate::SchemaErrorNoteKind;

/// An error note providing additional context about a syntax error.
///
/// A note may point at a related byte offset in the same source (e.g. where
/// an unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrorNote {
    pub kind: SchemaErrorNoteKind,
    pub message: String,

    /// Optional byte offset of a related location.
    pub position: Option<usize>,
}

impl SchemaErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: SchemaErrorNoteKind::General,
            message: message.into(),
            position: None,
        }
    }

    pub fn general_at(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: SchemaErrorNoteKind::General,
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: SchemaErrorNoteKind::Help,
            message: message.into(),
            position: None,
        }
    }
}
