use crate::token::SchemaTokenKind;
use crate::ByteSpan;

/// A lexed token and the byte range it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaToken<'src> {
    pub kind: SchemaTokenKind<'src>,
    pub span: ByteSpan,
}

impl<'src> SchemaToken<'src> {
    pub fn new(kind: SchemaTokenKind<'src>, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: ByteSpan::new(start, end),
        }
    }

    /// Describes this token for error messages: the kind, followed by the
    /// quoted value for tokens that carry one (`Name "foo"`, `Int "4"`).
    pub fn describe(&self) -> String {
        match self.kind.value() {
            Some(value) => format!("{} \"{value}\"", self.kind.kind_name()),
            None => self.kind.kind_name().to_string(),
        }
    }
}
