use crate::SchemaErrorNote;
use crate::SmallVec;

/// Notes attached to a [`SchemaSyntaxError`](crate::SchemaSyntaxError).
///
/// Uses SmallVec since most errors carry 0-2 notes.
pub type SchemaErrorNotes = SmallVec<[SchemaErrorNote; 2]>;
