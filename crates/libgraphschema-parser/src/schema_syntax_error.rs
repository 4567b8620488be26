use crate::source_location::line_text;
use crate::get_location;
use crate::SchemaErrorNote;
use crate::SchemaErrorNoteKind;
use crate::SchemaErrorNotes;
use crate::SchemaSyntaxErrorKind;
use crate::Source;
use crate::SourceLocation;
use std::sync::Arc;

/// The single error raised by the lexer and parser.
///
/// Parsing is fail-fast: the first malformed construct aborts the parse and
/// is reported through one of these. The error keeps the whole [`Source`] so
/// that [`format_detailed`](Self::format_detailed) can render a caret-pointed
/// excerpt without the caller holding on to the text.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SchemaSyntaxError {
    /// Human-readable message, e.g. `Expected Name, found EOF`.
    message: String,

    schema_source: Arc<Source>,

    /// Byte offset into `source.body` where the error was detected.
    position: usize,

    /// `position` resolved to a 1-based line/column.
    location: SourceLocation,

    kind: SchemaSyntaxErrorKind,

    notes: SchemaErrorNotes,
}

impl SchemaSyntaxError {
    pub fn new(
        source: Arc<Source>,
        position: usize,
        message: impl Into<String>,
        kind: SchemaSyntaxErrorKind,
    ) -> Self {
        let location = get_location(&source, position);
        Self {
            message: message.into(),
            schema_source: source,
            position,
            location,
            kind,
            notes: SchemaErrorNotes::new(),
        }
    }

    pub fn with_notes(
        source: Arc<Source>,
        position: usize,
        message: impl Into<String>,
        kind: SchemaSyntaxErrorKind,
        notes: SchemaErrorNotes,
    ) -> Self {
        let mut error = Self::new(source, position, message, kind);
        error.notes = notes;
        error
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source the error was raised against.
    pub fn schema_source(&self) -> &Arc<Source> {
        &self.schema_source
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn kind(&self) -> &SchemaSyntaxErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &SchemaErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(SchemaErrorNote::general(message));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(SchemaErrorNote::help(message));
    }

    /// Formats this error as a single line:
    ///
    /// ```text
    /// Syntax Error GraphQL (1:18) Expected :, found Name "String"
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "Syntax Error {} ({}) {}",
            self.schema_source.name, self.location, self.message,
        )
    }

    /// Formats this error as a multi-line diagnostic with a source excerpt:
    ///
    /// ```text
    /// error: Expected :, found Name "String"
    ///   --> schema.graphql:1:18
    ///    |
    ///  1 | type User { name String }
    ///    |                  ^
    ///    = help: field definitions need `:` between the name and the type
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}:{}\n", self.schema_source.name, self.location));

        if let Some(snippet) = self.format_snippet(self.location, '^') {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                SchemaErrorNoteKind::General => "note",
                SchemaErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
            if let Some(position) = note.position {
                let location = get_location(&self.schema_source, position);
                if let Some(snippet) = self.format_snippet(location, '-') {
                    output.push_str(&snippet);
                }
            }
        }

        output
    }

    fn format_snippet(&self, location: SourceLocation, marker: char) -> Option<String> {
        let line_content = line_text(&self.schema_source.body, location.line)?;
        let gutter_width = location.line.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>gutter_width$} |\n", ""));
        output.push_str(&format!("{:>gutter_width$} | {line_content}\n", location.line));
        // Tabs are kept so the marker lines up with the excerpt above it.
        let padding: String = line_content
            .chars()
            .take(location.column - 1)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        output.push_str(&format!("{:>gutter_width$} | {padding}{marker}\n", ""));
        Some(output)
    }
}
