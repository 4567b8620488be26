/// Options accepted by [`parse_with_options`](crate::parse_with_options) and
/// [`parse_value_with_options`](crate::parse_value_with_options).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// Omit `loc` from every node.
    pub no_location: bool,

    /// Keep `loc.start`/`loc.end` but drop the `loc.source` reference.
    pub no_source: bool,

    /// Maximum nesting of list values, object values and list types. Deeper
    /// input fails with
    /// [`SchemaSyntaxErrorKind::NestingTooDeep`](crate::SchemaSyntaxErrorKind::NestingTooDeep).
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            no_location: false,
            no_source: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
