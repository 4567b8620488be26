use crate::Source;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The byte range a node was parsed from.
///
/// `start <= end`, and both index into `source.body` when a source is kept.
/// [`ParseOptions::no_source`](crate::ParseOptions::no_source) drops the
/// source reference and
/// [`ParseOptions::no_location`](crate::ParseOptions::no_location) drops the
/// whole `Loc`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Arc<Source>>,
}

impl Loc {
    pub fn new(start: usize, end: usize, source: Option<Arc<Source>>) -> Self {
        Self { start, end, source }
    }

    /// Returns the source text covered by this location, if the source was
    /// kept.
    pub fn text(&self) -> Option<&str> {
        self.source
            .as_ref()
            .and_then(|source| source.body.get(self.start..self.end))
    }
}
