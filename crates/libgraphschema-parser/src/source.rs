use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The text of a schema document together with the name it is reported
/// under in syntax errors.
///
/// A `Source` is created once per [`parse`](crate::parse) call and shared
/// (via [`Arc`]) by every [`Loc`](crate::ast::Loc) that keeps a source
/// reference.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub body: String,
    pub name: String,
}

impl Source {
    /// Name used when a source is created without one.
    pub const DEFAULT_NAME: &'static str = "GraphQL";

    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Self::DEFAULT_NAME.to_string(),
        }
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }
}

/// Anything that can be turned into a shared [`Source`]: raw text, an owned
/// `Source`, or an already-shared one.
pub trait IntoSource {
    fn into_source(self) -> Arc<Source>;
}

impl IntoSource for &str {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for &String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self.as_str()))
    }
}

impl IntoSource for Source {
    fn into_source(self) -> Arc<Source> {
        Arc::new(self)
    }
}

impl IntoSource for Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        self
    }
}

impl IntoSource for &Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        Arc::clone(self)
    }
}
