//! Fail-fast recursive descent parser for schema documents.
//!
//! [`SchemaParser`] holds the only mutable state of a parse: the current
//! token, the end offset of the previous token (`prev_end`, used as the end
//! of every node's [`Loc`]), the `##` description preceding the current
//! token, and the nesting depth. Each `parse_*` method consumes exactly the
//! tokens of its production and leaves the cursor on the first token after
//! it. The first error aborts the parse; no partial AST is returned.
//!
//! # Connection arrows
//!
//! The lexer emits arrows one character at a time, so the connection
//! productions assemble them here:
//!
//! ```text
//! ConnectionType : ( "-" | "=" | "<" "-" | "<" "=" ) NamedType? Close NamedType
//! Close          : "-" ">" | "=" ">" | "-" | "="    (by cardinality/direction)
//! EdgeType       : ( "=" | "<" "=" ) NamedType? "=" ">"? NamedType
//! ```

use crate::ast::*;
use crate::lexer::SchemaLexer;
use crate::token::SchemaToken;
use crate::token::SchemaTokenKind;
use crate::IntoSource;
use crate::ParseOptions;
use crate::SchemaSyntaxError;
use crate::SchemaSyntaxErrorKind;
use crate::Source;
use std::borrow::Cow;
use std::sync::Arc;

type SyntaxResult<T> = Result<T, SchemaSyntaxError>;

/// Placeholder used to name the `Name` token kind in expectations.
const NAME: SchemaTokenKind<'static> = SchemaTokenKind::Name(Cow::Borrowed(""));

/// Token kinds that can open a `ConnectionType`.
const CONNECTION_PREFIXES: &[&str] = &["-", "=", "<"];

/// Parses a schema document.
///
/// ```rust
/// use libgraphschema_parser::ast::TypeRef;
/// use libgraphschema_parser::ast::Definition;
///
/// let doc = libgraphschema_parser::parse("type Hello { conn: --> World }").unwrap();
/// let Definition::Object(hello) = &doc.definitions[0] else { panic!() };
/// assert!(matches!(hello.fields[0].ty, TypeRef::Connection(_)));
/// ```
pub fn parse(source: impl IntoSource) -> Result<Document, SchemaSyntaxError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parses a schema document with explicit [`ParseOptions`].
pub fn parse_with_options(
    source: impl IntoSource,
    options: &ParseOptions,
) -> Result<Document, SchemaSyntaxError> {
    let source = source.into_source();
    log::trace!("parsing schema document `{}` ({} bytes)", source.name, source.body.len());
    let result = SchemaParser::new(&source, options.clone()).and_then(SchemaParser::parse_document);
    match &result {
        Ok(document) => log::trace!(
            "parsed {} definition(s) from `{}`",
            document.definitions.len(),
            source.name,
        ),
        Err(error) => log::debug!("syntax error: {error}"),
    }
    result
}

/// Parses a single value literal, e.g. `{lt: $max, tags: ["a", "b"]}`.
///
/// Variables are allowed. The whole input must be the value.
pub fn parse_value(source: impl IntoSource) -> Result<Value, SchemaSyntaxError> {
    parse_value_with_options(source, &ParseOptions::default())
}

/// Parses a single value literal with explicit [`ParseOptions`].
pub fn parse_value_with_options(
    source: impl IntoSource,
    options: &ParseOptions,
) -> Result<Value, SchemaSyntaxError> {
    let source = source.into_source();
    let result = SchemaParser::new(&source, options.clone()).and_then(SchemaParser::parse_value);
    if let Err(error) = &result {
        log::debug!("syntax error: {error}");
    }
    result
}

/// Parser state for a single parse of a single [`Source`].
///
/// See module documentation for details.
pub struct SchemaParser<'src> {
    lexer: SchemaLexer<'src>,
    source: &'src Arc<Source>,
    options: ParseOptions,

    /// The current (not yet consumed) token.
    token: SchemaToken<'src>,

    /// End offset of the most recently consumed token.
    prev_end: usize,

    /// `##` lines immediately preceding `token`, joined with `\n`.
    description: Option<String>,

    /// Current nesting of list values, object values and list types.
    depth: usize,
}

impl<'src> SchemaParser<'src> {
    /// Creates a parser positioned on the first token of `source`.
    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> SyntaxResult<Self> {
        let lexer = SchemaLexer::new(source);
        let (token, description) = Self::read_significant(&lexer, 0)?;
        Ok(Self {
            lexer,
            source,
            options,
            token,
            prev_end: 0,
            description,
            depth: 0,
        })
    }

    /// Parses the whole input as a document.
    pub fn parse_document(mut self) -> SyntaxResult<Document> {
        let start = self.token.span.start;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(&SchemaTokenKind::Eof)? {
                break;
            }
        }
        Ok(Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Parses the whole input as a single (non-const) value.
    pub fn parse_value(mut self) -> SyntaxResult<Value> {
        let value = self.parse_value_literal(false)?;
        self.expect(&SchemaTokenKind::Eof)?;
        Ok(value)
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Lexes from `from` until a non-description token, collecting the
    /// description lines passed on the way.
    fn read_significant(
        lexer: &SchemaLexer<'src>,
        from: usize,
    ) -> SyntaxResult<(SchemaToken<'src>, Option<String>)> {
        let mut lines: Vec<Cow<'src, str>> = Vec::new();
        let mut position = from;
        loop {
            let token = lexer.read_token(position)?;
            match token.kind {
                SchemaTokenKind::Description(line) => {
                    position = token.span.end;
                    lines.push(line);
                },
                _ => {
                    let description = (!lines.is_empty()).then(|| lines.join("\n"));
                    return Ok((token, description));
                },
            }
        }
    }

    /// Consumes the current token and returns it.
    fn advance(&mut self) -> SyntaxResult<SchemaToken<'src>> {
        let end = self.token.span.end;
        let (next, description) = Self::read_significant(&self.lexer, end)?;
        self.prev_end = end;
        self.description = description;
        Ok(std::mem::replace(&mut self.token, next))
    }

    fn peek(&self, kind: &SchemaTokenKind<'_>) -> bool {
        self.token.kind.same_kind(kind)
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(&self.token.kind, SchemaTokenKind::Name(name) if name == keyword)
    }

    /// Consumes the current token if it is of `kind`.
    fn skip(&mut self, kind: &SchemaTokenKind<'_>) -> SyntaxResult<bool> {
        if self.peek(kind) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the current token if it is of `kind`, fails otherwise.
    fn expect(&mut self, kind: &SchemaTokenKind<'_>) -> SyntaxResult<SchemaToken<'src>> {
        if self.peek(kind) {
            return self.advance();
        }
        Err(self.expected_kind_error(kind))
    }

    /// Consumes the current token if it is the name `keyword`, fails
    /// otherwise.
    fn expect_keyword(&mut self, keyword: &str) -> SyntaxResult<SchemaToken<'src>> {
        if self.peek_keyword(keyword) {
            return self.advance();
        }
        Err(self.expected_error(
            vec![format!("\"{keyword}\"")],
            format!("Expected \"{keyword}\", found {}", self.token.describe()),
        ))
    }

    /// Takes the description attached to the current token.
    fn take_description(&mut self) -> Option<String> {
        self.description.take()
    }

    /// Builds the location of a node that started at `start` and ended with
    /// the previously consumed token.
    fn loc(&self, start: usize) -> Option<Loc> {
        if self.options.no_location {
            return None;
        }
        let source = (!self.options.no_source).then(|| Arc::clone(self.source));
        Some(Loc::new(start, self.prev_end, source))
    }

    // =========================================================================
    // Errors
    // =========================================================================

    fn expected_error(&self, expected: Vec<String>, message: String) -> SchemaSyntaxError {
        let kind = match self.token.kind {
            SchemaTokenKind::Eof => SchemaSyntaxErrorKind::UnexpectedEof { expected },
            _ => SchemaSyntaxErrorKind::UnexpectedToken {
                expected,
                found: self.token.describe(),
            },
        };
        SchemaSyntaxError::new(Arc::clone(self.source), self.token.span.start, message, kind)
    }

    fn expected_kind_error(&self, kind: &SchemaTokenKind<'_>) -> SchemaSyntaxError {
        self.expected_error(
            vec![kind.kind_name().to_string()],
            format!("Expected {}, found {}", kind.kind_name(), self.token.describe()),
        )
    }

    /// An error for a token that no alternative of the current production
    /// accepts.
    fn unexpected(&self) -> SchemaSyntaxError {
        self.expected_error(vec![], format!("Unexpected {}", self.token.describe()))
    }

    // =========================================================================
    // Repetition
    // =========================================================================

    /// `open item* close`: a possibly empty list.
    fn any<T>(
        &mut self,
        open: &SchemaTokenKind<'_>,
        mut parse_fn: impl FnMut(&mut Self) -> SyntaxResult<T>,
        close: &SchemaTokenKind<'_>,
    ) -> SyntaxResult<Vec<T>> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        while !self.skip(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// `open item+ close`: a non-empty list.
    fn many<T>(
        &mut self,
        open: &SchemaTokenKind<'_>,
        mut parse_fn: impl FnMut(&mut Self) -> SyntaxResult<T>,
        close: &SchemaTokenKind<'_>,
    ) -> SyntaxResult<Vec<T>> {
        self.expect(open)?;
        let mut nodes = vec![parse_fn(self)?];
        while !self.skip(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// `item+` with no delimiters: parses items while the current token
    /// satisfies `starts_item`. Used for chained connection hops.
    fn at_least_one<T>(
        &mut self,
        starts_item: fn(&SchemaTokenKind<'src>) -> bool,
        expected: &[&str],
        mut parse_fn: impl FnMut(&mut Self) -> SyntaxResult<T>,
    ) -> SyntaxResult<Vec<T>> {
        let mut nodes = Vec::new();
        while starts_item(&self.token.kind) {
            nodes.push(parse_fn(self)?);
        }
        if nodes.is_empty() {
            return Err(self.expected_error(
                expected.iter().map(|s| s.to_string()).collect(),
                format!("Expected {}, found {}", expected.join(", "), self.token.describe()),
            ));
        }
        Ok(nodes)
    }

    // =========================================================================
    // Nesting guard
    // =========================================================================

    fn enter_recursion(&mut self) -> SyntaxResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            let limit = self.options.max_depth;
            return Err(SchemaSyntaxError::new(
                Arc::clone(self.source),
                self.token.span.start,
                format!("Maximum nesting depth of {limit} exceeded"),
                SchemaSyntaxErrorKind::NestingTooDeep { limit },
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth -= 1;
    }

    /// Runs `parse_fn` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> SyntaxResult<T>,
    ) -> SyntaxResult<T> {
        self.enter_recursion()?;
        let result = parse_fn(self);
        self.exit_recursion();
        result
    }

    // =========================================================================
    // Names and values
    // =========================================================================

    fn parse_name(&mut self) -> SyntaxResult<Name> {
        let start = self.token.span.start;
        let value = match &self.token.kind {
            SchemaTokenKind::Name(value) => value.to_string(),
            _ => return Err(self.expected_kind_error(&NAME)),
        };
        self.advance()?;
        Ok(Name {
            value,
            loc: self.loc(start),
        })
    }

    fn parse_variable(&mut self) -> SyntaxResult<Variable> {
        let start = self.token.span.start;
        self.expect(&SchemaTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            loc: self.loc(start),
        })
    }

    /// `( Argument+ )`, or nothing.
    fn parse_arguments(&mut self) -> SyntaxResult<Vec<Argument>> {
        if !self.peek(&SchemaTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        self.many(
            &SchemaTokenKind::ParenOpen,
            Self::parse_argument,
            &SchemaTokenKind::ParenClose,
        )
    }

    fn parse_argument(&mut self) -> SyntaxResult<Argument> {
        let start = self.token.span.start;
        let name = self.parse_name()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let value = self.parse_value_literal(false)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    /// Parses a value. When `is_const`, variables are rejected.
    fn parse_value_literal(&mut self, is_const: bool) -> SyntaxResult<Value> {
        let start = self.token.span.start;
        match &self.token.kind {
            SchemaTokenKind::SquareBracketOpen => self.parse_list_value(is_const).map(Value::List),
            SchemaTokenKind::CurlyBraceOpen => self.parse_object_value(is_const).map(Value::Object),
            SchemaTokenKind::IntValue(value) => {
                let value = value.to_string();
                self.advance()?;
                Ok(Value::Int(IntValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            SchemaTokenKind::FloatValue(value) => {
                let value = value.to_string();
                self.advance()?;
                Ok(Value::Float(FloatValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            SchemaTokenKind::StringValue(value) => {
                let value = value.to_string();
                self.advance()?;
                Ok(Value::String(StringValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            SchemaTokenKind::Name(name) if name == "true" || name == "false" => {
                let value = name == "true";
                self.advance()?;
                Ok(Value::Boolean(BooleanValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            SchemaTokenKind::Name(name) if name != "null" => {
                let value = name.to_string();
                self.advance()?;
                Ok(Value::Enum(EnumValue {
                    value,
                    loc: self.loc(start),
                }))
            },
            SchemaTokenKind::Dollar if !is_const => self.parse_variable().map(Value::Variable),
            SchemaTokenKind::Name(_) => {
                let mut error = self.unexpected();
                error.add_note("`null` is not a value in schema documents");
                Err(error)
            },
            SchemaTokenKind::Dollar => {
                let mut error = self.unexpected();
                error.add_note("variables are not allowed in default values");
                Err(error)
            },
            _ => Err(self.unexpected()),
        }
    }

    fn parse_const_value(&mut self) -> SyntaxResult<Value> {
        self.parse_value_literal(true)
    }

    /// `[ Value* ]`.
    fn parse_list_value(&mut self, is_const: bool) -> SyntaxResult<ListValue> {
        let start = self.token.span.start;
        let values = self.nested(|p| {
            p.any(
                &SchemaTokenKind::SquareBracketOpen,
                |p| p.parse_value_literal(is_const),
                &SchemaTokenKind::SquareBracketClose,
            )
        })?;
        Ok(ListValue {
            values,
            loc: self.loc(start),
        })
    }

    /// `{ ObjectField* }`.
    fn parse_object_value(&mut self, is_const: bool) -> SyntaxResult<ObjectValue> {
        let start = self.token.span.start;
        let fields = self.nested(|p| {
            p.any(
                &SchemaTokenKind::CurlyBraceOpen,
                |p| p.parse_object_field(is_const),
                &SchemaTokenKind::CurlyBraceClose,
            )
        })?;
        Ok(ObjectValue {
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_object_field(&mut self, is_const: bool) -> SyntaxResult<ObjectField> {
        let start = self.token.span.start;
        let name = self.parse_name()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> SyntaxResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.peek(&SchemaTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// `@ Name Arguments?`.
    fn parse_directive(&mut self) -> SyntaxResult<Directive> {
        let start = self.token.span.start;
        self.expect(&SchemaTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// `NamedType | ListType | NonNullType`.
    fn parse_type(&mut self) -> SyntaxResult<TypeRef> {
        let start = self.token.span.start;
        let ty = if self.peek(&SchemaTokenKind::SquareBracketOpen) {
            TypeRef::List(self.parse_list_type()?)
        } else {
            TypeRef::Named(self.parse_named_type()?)
        };
        self.wrap_non_null(ty, start)
    }

    fn parse_named_type(&mut self) -> SyntaxResult<NamedType> {
        let start = self.token.span.start;
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            loc: self.loc(start),
        })
    }

    /// `[ Type ]`.
    fn parse_list_type(&mut self) -> SyntaxResult<ListType> {
        let start = self.token.span.start;
        self.expect(&SchemaTokenKind::SquareBracketOpen)?;
        let ty = self.nested(Self::parse_type)?;
        self.expect(&SchemaTokenKind::SquareBracketClose)?;
        Ok(ListType {
            ty: Box::new(ty),
            loc: self.loc(start),
        })
    }

    /// Wraps `ty` in a `NonNullType` if a `!` follows.
    fn wrap_non_null(&mut self, ty: TypeRef, start: usize) -> SyntaxResult<TypeRef> {
        if self.skip(&SchemaTokenKind::Bang)? {
            return Ok(TypeRef::NonNull(NonNullType {
                ty: Box::new(ty),
                loc: self.loc(start),
            }));
        }
        Ok(ty)
    }

    /// The type of an object or interface field:
    ///
    /// - `[` starts a list type;
    /// - `-`, `=` or `<` starts one or more chained connections, wrapped in a
    ///   `ConnectionJoinType` when there is more than one;
    /// - anything else is a named type.
    ///
    /// A trailing `!` wraps any of them in a `NonNullType`.
    fn parse_field_definition_type(&mut self) -> SyntaxResult<TypeRef> {
        let start = self.token.span.start;
        let ty = if self.peek(&SchemaTokenKind::SquareBracketOpen) {
            TypeRef::List(self.parse_list_type()?)
        } else if self.token.kind.is_connection_prefix() {
            let mut connections = self.at_least_one(
                SchemaTokenKind::is_connection_prefix,
                CONNECTION_PREFIXES,
                Self::parse_connection_type,
            )?;
            if connections.len() == 1 {
                TypeRef::Connection(connections.remove(0))
            } else {
                TypeRef::ConnectionJoin(ConnectionJoinType {
                    connections,
                    loc: self.loc(start),
                })
            }
        } else {
            TypeRef::Named(self.parse_named_type()?)
        };
        self.wrap_non_null(ty, start)
    }

    /// One connection hop. See the module documentation for the arrow
    /// grammar.
    fn parse_connection_type(&mut self) -> SyntaxResult<ConnectionType> {
        let start = self.token.span.start;

        let (direction, cardinality) = if self.skip(&SchemaTokenKind::Dash)? {
            (Direction::Out, Cardinality::Singular)
        } else if self.skip(&SchemaTokenKind::Equals)? {
            (Direction::Out, Cardinality::Plural)
        } else if self.skip(&SchemaTokenKind::Less)? {
            if self.skip(&SchemaTokenKind::Dash)? {
                (Direction::In, Cardinality::Singular)
            } else if self.skip(&SchemaTokenKind::Equals)? {
                (Direction::In, Cardinality::Plural)
            } else {
                let mut error = self.unexpected();
                error.add_help("incoming connections start with `<-` or `<=`");
                return Err(error);
            }
        } else {
            return Err(self.unexpected());
        };

        let edge_label = if self.peek(&NAME) {
            Some(self.parse_named_type()?)
        } else {
            None
        };

        let close = match cardinality {
            Cardinality::Singular => SchemaTokenKind::Dash,
            Cardinality::Plural => SchemaTokenKind::Equals,
        };
        self.expect(&close)
            .map_err(|error| with_arrow_help(error, direction, Some(cardinality)))?;
        if direction == Direction::Out {
            self.expect(&SchemaTokenKind::Greater)
                .map_err(|error| with_arrow_help(error, direction, Some(cardinality)))?;
        }

        let ty = self.parse_named_type()?;
        Ok(ConnectionType {
            ty,
            edge_label,
            direction,
            cardinality,
            loc: self.loc(start),
        })
    }

    /// An edge in mutation field position. See the module documentation for
    /// the arrow grammar.
    fn parse_edge_type(&mut self) -> SyntaxResult<EdgeType> {
        let start = self.token.span.start;

        let direction = if self.skip(&SchemaTokenKind::Equals)? {
            Direction::Out
        } else if self.skip(&SchemaTokenKind::Less)? {
            self.expect(&SchemaTokenKind::Equals)
                .map_err(|error| with_arrow_help(error, Direction::In, None))?;
            Direction::In
        } else {
            return Err(self.unexpected());
        };

        let edge_label = if self.peek(&NAME) {
            Some(self.parse_named_type()?)
        } else {
            None
        };

        self.expect(&SchemaTokenKind::Equals)
            .map_err(|error| with_arrow_help(error, direction, None))?;
        if direction == Direction::Out {
            self.expect(&SchemaTokenKind::Greater)
                .map_err(|error| with_arrow_help(error, direction, None))?;
        }

        let ty = self.parse_named_type()?;
        Ok(EdgeType {
            ty,
            edge_label,
            direction,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// Dispatches on the definition keyword. Any `##` description before the
    /// keyword belongs to the definition.
    fn parse_definition(&mut self) -> SyntaxResult<Definition> {
        let description = self.take_description();
        let keyword = match &self.token.kind {
            SchemaTokenKind::Name(keyword) => keyword.clone(),
            _ => return Err(self.unexpected()),
        };
        match &*keyword {
            "scalar" => self.parse_scalar_type_definition(description).map(Definition::Scalar),
            "type" => self.parse_object_type_definition(description).map(Definition::Object),
            "interface" => {
                self.parse_interface_type_definition(description).map(Definition::Interface)
            },
            "union" => self.parse_union_type_definition(description).map(Definition::Union),
            "enum" => self.parse_enum_type_definition(description).map(Definition::Enum),
            "input" => {
                self.parse_input_object_type_definition(description).map(Definition::InputObject)
            },
            "extend" => {
                self.parse_type_extension_definition(description).map(Definition::TypeExtension)
            },
            "directive" => {
                self.parse_directive_definition(description).map(Definition::Directive)
            },
            "mutation" => self.parse_mutation_definition(description).map(Definition::Mutation),
            "query" => self.parse_query_definition(description).map(Definition::Query),
            "filter" => self.parse_filter_definition(description).map(Definition::Filter),
            "order" => self.parse_order_definition(description).map(Definition::Order),
            _ => {
                let mut error = self.unexpected();
                error.add_help(
                    "expected a definition: scalar, type, interface, union, enum, input, \
                     extend, directive, mutation, query, filter or order",
                );
                Err(error)
            },
        }
    }

    /// `scalar Name Directives?`.
    fn parse_scalar_type_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<ScalarTypeDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// `type Name ImplementsInterfaces? Directives? { FieldDefinition* }`.
    fn parse_object_type_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<ObjectTypeDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            &SchemaTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            &SchemaTokenKind::CurlyBraceClose,
        )?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `implements NamedType+`, or nothing.
    fn parse_implements_interfaces(&mut self) -> SyntaxResult<Vec<NamedType>> {
        let mut types = Vec::new();
        if self.peek_keyword("implements") {
            self.advance()?;
            loop {
                types.push(self.parse_named_type()?);
                if !self.peek(&NAME) {
                    break;
                }
            }
        }
        Ok(types)
    }

    /// `Name ArgumentsDefinition? : FieldType Directives?`.
    fn parse_field_definition(&mut self) -> SyntaxResult<FieldDefinition> {
        let description = self.take_description();
        let start = self.token.span.start;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect(&SchemaTokenKind::Colon).map_err(|mut error| {
            error.add_help("field definitions need `:` between the name and the type");
            error
        })?;
        let ty = self.parse_field_definition_type()?;
        let directives = self.parse_directives()?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        })
    }

    /// `( InputValueDefinition+ )`, or nothing.
    fn parse_argument_defs(&mut self) -> SyntaxResult<Vec<InputValueDefinition>> {
        if !self.peek(&SchemaTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        self.many(
            &SchemaTokenKind::ParenOpen,
            Self::parse_input_value_def,
            &SchemaTokenKind::ParenClose,
        )
    }

    /// `Name : Type DefaultValue? Directives?`.
    fn parse_input_value_def(&mut self) -> SyntaxResult<InputValueDefinition> {
        let description = self.take_description();
        let start = self.token.span.start;
        let name = self.parse_name()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let ty = self.parse_type()?;
        let default_value = if self.skip(&SchemaTokenKind::Equals)? {
            Some(self.parse_const_value()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    /// `interface Name Directives? { FieldDefinition* }`.
    fn parse_interface_type_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<InterfaceTypeDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            &SchemaTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            &SchemaTokenKind::CurlyBraceClose,
        )?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `union Name Directives? = NamedType ( | NamedType )*`.
    fn parse_union_type_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<UnionTypeDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        self.expect(&SchemaTokenKind::Equals)?;
        let mut types = vec![self.parse_named_type()?];
        while self.skip(&SchemaTokenKind::Pipe)? {
            types.push(self.parse_named_type()?);
        }
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    /// `enum Name Directives? { EnumValueDefinition+ }`.
    fn parse_enum_type_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<EnumTypeDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let values = self.many(
            &SchemaTokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            &SchemaTokenKind::CurlyBraceClose,
        )?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    /// `Name Directives?`.
    fn parse_enum_value_definition(&mut self) -> SyntaxResult<EnumValueDefinition> {
        let description = self.take_description();
        let start = self.token.span.start;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// `input Name Directives? { InputValueDefinition* }`.
    fn parse_input_object_type_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<InputObjectTypeDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            &SchemaTokenKind::CurlyBraceOpen,
            Self::parse_input_value_def,
            &SchemaTokenKind::CurlyBraceClose,
        )?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// `extend ObjectTypeDefinition`.
    fn parse_type_extension_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<TypeExtensionDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition(None)?;
        Ok(TypeExtensionDefinition {
            description,
            definition,
            loc: self.loc(start),
        })
    }

    /// `directive @ Name ArgumentsDefinition? on Name ( | Name )*`.
    fn parse_directive_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<DirectiveDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("directive")?;
        self.expect(&SchemaTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_keyword("on")?;
        let mut locations = vec![self.parse_name()?];
        while self.skip(&SchemaTokenKind::Pipe)? {
            locations.push(self.parse_name()?);
        }
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Mutations and queries
    // =========================================================================

    /// ```text
    /// mutation Name ArgumentsDefinition? : Type Directives?
    /// mutation Name ArgumentsDefinition? Directives? { MutationFieldDefinition* }
    /// ```
    fn parse_mutation_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<MutationDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("mutation")?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let (result, directives) = if self.skip(&SchemaTokenKind::Colon)? {
            let ty = self.parse_type()?;
            let directives = self.parse_directives()?;
            (DefinitionResult::Type { ty }, directives)
        } else {
            let directives = self.parse_directives()?;
            let fields = self.any(
                &SchemaTokenKind::CurlyBraceOpen,
                Self::parse_mutation_field_definition,
                &SchemaTokenKind::CurlyBraceClose,
            )?;
            (DefinitionResult::Fields { fields }, directives)
        };
        Ok(MutationDefinition {
            description,
            name,
            arguments,
            directives,
            result,
            loc: self.loc(start),
        })
    }

    /// `Name ArgumentsDefinition? : MutationFieldType Directives?`.
    fn parse_mutation_field_definition(&mut self) -> SyntaxResult<MutationFieldDefinition> {
        let description = self.take_description();
        let start = self.token.span.start;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let ty = self.parse_mutation_field_type()?;
        let directives = self.parse_directives()?;
        Ok(MutationFieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        })
    }

    /// Like a field type, except the arrow branch is a single `EdgeType`
    /// (`=` or `<=` prefixes only).
    fn parse_mutation_field_type(&mut self) -> SyntaxResult<TypeRef> {
        let start = self.token.span.start;
        let ty = if self.peek(&SchemaTokenKind::SquareBracketOpen) {
            TypeRef::List(self.parse_list_type()?)
        } else if self.peek(&SchemaTokenKind::Equals) || self.peek(&SchemaTokenKind::Less) {
            TypeRef::Edge(self.parse_edge_type()?)
        } else {
            TypeRef::Named(self.parse_named_type()?)
        };
        self.wrap_non_null(ty, start)
    }

    /// ```text
    /// query Name ArgumentsDefinition? : Type Directives?
    /// query Name ArgumentsDefinition? Directives? { QueryFieldDefinition+ }
    /// ```
    fn parse_query_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<QueryDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("query")?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let (result, directives) = if self.skip(&SchemaTokenKind::Colon)? {
            let ty = self.parse_type()?;
            let directives = self.parse_directives()?;
            (DefinitionResult::Type { ty }, directives)
        } else {
            let directives = self.parse_directives()?;
            let fields = self.many(
                &SchemaTokenKind::CurlyBraceOpen,
                Self::parse_query_field_definition,
                &SchemaTokenKind::CurlyBraceClose,
            )?;
            (DefinitionResult::Fields { fields }, directives)
        };
        Ok(QueryDefinition {
            description,
            name,
            arguments,
            directives,
            result,
            loc: self.loc(start),
        })
    }

    /// `Name ArgumentsDefinition? : Type Directives?`.
    fn parse_query_field_definition(&mut self) -> SyntaxResult<QueryFieldDefinition> {
        let description = self.take_description();
        let start = self.token.span.start;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let ty = self.parse_type()?;
        let directives = self.parse_directives()?;
        Ok(QueryFieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Filters and orders
    // =========================================================================

    /// The target of `filter on` / `order on`: a list type, a single
    /// connection, or a named type. No `!`.
    fn parse_filter_target(&mut self) -> SyntaxResult<TypeRef> {
        if self.peek(&SchemaTokenKind::SquareBracketOpen) {
            Ok(TypeRef::List(self.parse_list_type()?))
        } else if self.token.kind.is_connection_prefix() {
            Ok(TypeRef::Connection(self.parse_connection_type()?))
        } else if self.peek(&NAME) {
            Ok(TypeRef::Named(self.parse_named_type()?))
        } else {
            Err(self.unexpected())
        }
    }

    /// `filter on Target { FilterCondition* }`.
    fn parse_filter_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<FilterDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("filter")?;
        self.expect_keyword("on")?;
        let ty = self.parse_filter_target()?;
        let conditions = self.any(
            &SchemaTokenKind::CurlyBraceOpen,
            Self::parse_filter_condition,
            &SchemaTokenKind::CurlyBraceClose,
        )?;
        Ok(FilterDefinition {
            description,
            ty,
            conditions,
            loc: self.loc(start),
        })
    }

    /// `EnumValueDefinition : ArgumentsDefinition? ObjectValue`.
    fn parse_filter_condition(&mut self) -> SyntaxResult<FilterCondition> {
        let start = self.token.span.start;
        let key = self.parse_enum_value_definition()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let arguments = self.parse_argument_defs()?;
        let condition = self.parse_object_value(false)?;
        Ok(FilterCondition {
            key,
            arguments,
            condition,
            loc: self.loc(start),
        })
    }

    /// `order on Target { OrderExpression* }`.
    fn parse_order_definition(
        &mut self,
        description: Option<String>,
    ) -> SyntaxResult<OrderDefinition> {
        let start = self.token.span.start;
        self.expect_keyword("order")?;
        self.expect_keyword("on")?;
        let ty = self.parse_filter_target()?;
        let expressions = self.any(
            &SchemaTokenKind::CurlyBraceOpen,
            Self::parse_order_expression,
            &SchemaTokenKind::CurlyBraceClose,
        )?;
        Ok(OrderDefinition {
            description,
            ty,
            expressions,
            loc: self.loc(start),
        })
    }

    /// `EnumValueDefinition : ( ObjectValue | [ ObjectValue+ ] )`.
    fn parse_order_expression(&mut self) -> SyntaxResult<OrderExpression> {
        let start = self.token.span.start;
        let key = self.parse_enum_value_definition()?;
        self.expect(&SchemaTokenKind::Colon)?;
        let expression = if self.peek(&SchemaTokenKind::SquareBracketOpen) {
            self.many(
                &SchemaTokenKind::SquareBracketOpen,
                |p| p.parse_object_value(false),
                &SchemaTokenKind::SquareBracketClose,
            )?
        } else {
            vec![self.parse_object_value(false)?]
        };
        Ok(OrderExpression {
            key,
            expression,
            loc: self.loc(start),
        })
    }
}

/// Adds a help note spelling out the arrow shapes valid for the connection
/// or edge being parsed. `cardinality` is `None` for edges.
fn with_arrow_help(
    mut error: SchemaSyntaxError,
    direction: Direction,
    cardinality: Option<Cardinality>,
) -> SchemaSyntaxError {
    let shapes = match (direction, cardinality) {
        (Direction::Out, Some(Cardinality::Singular)) => "`--> Type` or `-Label-> Type`",
        (Direction::Out, Some(Cardinality::Plural)) | (Direction::Out, None) => {
            "`==> Type` or `=Label=> Type`"
        },
        (Direction::In, Some(Cardinality::Singular)) => "`<-- Type` or `<-Label- Type`",
        (Direction::In, Some(Cardinality::Plural)) | (Direction::In, None) => {
            "`<== Type` or `<=Label= Type`"
        },
    };
    error.add_help(format!("this arrow must be written as {shapes}"));
    error
}
