/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorNoteKind {
    /// General context about the error.
    ///
    /// Rendered as `= note: ...` in detailed output.
    /// Example: "string started here" (pointing at the opening quote)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in detailed output.
    /// Example: "close the string with `\"`"
    Help,
}
