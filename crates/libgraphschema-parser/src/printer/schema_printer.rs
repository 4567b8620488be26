use crate::ast::Cardinality;
use crate::ast::DefinitionResult;
use crate::ast::Direction;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::printer::PrintError;
use crate::visitor::visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use serde::Deserialize;

/// Prints any AST node (a [`Document`](crate::ast::Document), a single
/// definition, a type, a value, ...) in canonical form.
///
/// The node is not modified.
pub fn print<T>(node: &T) -> Result<String, PrintError>
where
    T: Clone + Into<Node>,
{
    let node: Node = node.clone().into();
    let kind = node.kind();
    log::trace!("printing a {kind} node");
    let mut printer = SchemaPrinter::default();
    visit(node, &mut printer)?;
    let text = printer.finish();
    log::trace!("printed a {kind} node ({} bytes)", text.len());
    Ok(text)
}

/// Prints the JSON form of an AST node.
///
/// ```rust
/// let json = serde_json::json!({
///     "kind": "ScalarTypeDefinition",
///     "name": { "kind": "Name", "value": "foo" },
/// });
/// assert_eq!(libgraphschema_parser::print_json(&json).unwrap(), "scalar foo");
///
/// let error = libgraphschema_parser::print_json(
///     &serde_json::json!({ "random": "Data" }),
/// ).unwrap_err();
/// assert_eq!(error.to_string(), r#"Invalid AST Node: {"random":"Data"}"#);
/// ```
pub fn print_json(json: &serde_json::Value) -> Result<String, PrintError> {
    if NodeKind::of_json(json).is_none() {
        return Err(PrintError::InvalidAstNode {
            json: json.to_string(),
        });
    }
    let node = Node::deserialize(json)?;
    print(&node)
}

/// Leave-only reducer: each node's text is built from the texts its
/// children left on the stack.
#[derive(Default)]
struct SchemaPrinter {
    /// Printed nodes not yet consumed by their parent.
    stack: Vec<String>,

    /// Stack height at each entered, not yet left, node.
    marks: Vec<usize>,
}

impl SchemaPrinter {
    fn finish(mut self) -> String {
        self.stack.pop().unwrap_or_default()
    }
}

impl Visitor for SchemaPrinter {
    fn enter(&mut self, _node: &Node, _ctx: &VisitContext<'_>) -> VisitAction {
        self.marks.push(self.stack.len());
        VisitAction::Continue
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> VisitAction {
        let mark = self.marks.pop().unwrap_or(0);
        let children = Parts(self.stack.split_off(mark).into_iter());
        self.stack.push(reduce(node, children, ctx));
        VisitAction::Continue
    }
}

/// The printed children of one node, in key order.
struct Parts(std::vec::IntoIter<String>);

impl Parts {
    fn one(&mut self) -> String {
        self.0.next().unwrap_or_default()
    }

    fn many(&mut self, count: usize) -> Vec<String> {
        self.0.by_ref().take(count).collect()
    }

    fn maybe(&mut self, present: bool) -> String {
        if present { self.one() } else { String::new() }
    }
}

fn reduce(node: &Node, mut parts: Parts, ctx: &VisitContext<'_>) -> String {
    match node {
        Node::Name(n) => n.value.clone(),
        Node::Document(n) => join(&parts.many(n.definitions.len()), "\n\n") + "\n",
        Node::Variable(_) => format!("${}", parts.one()),
        Node::Argument(_) => {
            let name = parts.one();
            let value = parts.one();
            format!("{name}: {value}")
        },

        Node::IntValue(n) => n.value.clone(),
        Node::FloatValue(n) => n.value.clone(),
        Node::StringValue(n) => serde_json::Value::String(n.value.clone()).to_string(),
        Node::BooleanValue(n) => n.value.to_string(),
        Node::EnumValue(n) => n.value.clone(),
        Node::ListValue(n) => format!("[{}]", join(&parts.many(n.values.len()), ", ")),
        Node::ObjectValue(n) => format!("{{{}}}", join(&parts.many(n.fields.len()), ", ")),
        Node::ObjectField(_) => {
            let name = parts.one();
            let value = parts.one();
            format!("{name}: {value}")
        },

        Node::Directive(n) => {
            let name = parts.one();
            let arguments = parts.many(n.arguments.len());
            format!("@{name}{}", wrap("(", &join(&arguments, ", "), ")"))
        },

        Node::NamedType(_) => parts.one(),
        Node::ListType(_) => format!("[{}]", parts.one()),
        Node::NonNullType(_) => format!("{}!", parts.one()),
        Node::ConnectionType(n) => {
            let label = parts.maybe(n.edge_label.is_some());
            let ty = parts.one();
            let (open, close) = match (n.direction, n.cardinality) {
                (Direction::Out, Cardinality::Singular) => ("-", "->"),
                (Direction::Out, Cardinality::Plural) => ("=", "=>"),
                (Direction::In, Cardinality::Singular) => ("<-", "-"),
                (Direction::In, Cardinality::Plural) => ("<=", "="),
            };
            format!("{open}{label}{close} {ty}")
        },
        Node::ConnectionJoinType(n) => join(&parts.many(n.connections.len()), " "),
        Node::EdgeType(n) => {
            let label = parts.maybe(n.edge_label.is_some());
            let ty = parts.one();
            let (open, close) = match n.direction {
                Direction::Out => ("=", "=>"),
                Direction::In => ("<=", "="),
            };
            format!("{open}{label}{close} {ty}")
        },

        Node::ScalarTypeDefinition(n) => {
            let name = parts.one();
            let directives = parts.many(n.directives.len());
            described(
                n.description.as_deref(),
                join(&["scalar".to_string(), name, join(&directives, " ")], " "),
            )
        },
        Node::ObjectTypeDefinition(n) => {
            let name = parts.one();
            let interfaces = parts.many(n.interfaces.len());
            let directives = parts.many(n.directives.len());
            let fields = parts.many(n.fields.len());
            let text = join(
                &[
                    "type".to_string(),
                    name,
                    wrap("implements ", &join(&interfaces, ", "), ""),
                    join(&directives, " "),
                    block(&fields),
                ],
                " ",
            );
            // `extend ## ...` would not parse back.
            if ctx.parent() == Some(NodeKind::TypeExtensionDefinition) {
                text
            } else {
                described(n.description.as_deref(), text)
            }
        },
        Node::FieldDefinition(n) => {
            let name = parts.one();
            let arguments = parts.many(n.arguments.len());
            let ty = parts.one();
            let directives = parts.many(n.directives.len());
            described(
                n.description.as_deref(),
                field_line(name, &arguments, ty, &directives),
            )
        },
        Node::InputValueDefinition(n) => {
            let name = parts.one();
            let ty = parts.one();
            let default_value = parts.maybe(n.default_value.is_some());
            let directives = parts.many(n.directives.len());
            described(
                n.description.as_deref(),
                join(
                    &[
                        format!("{name}: {ty}"),
                        wrap("= ", &default_value, ""),
                        join(&directives, " "),
                    ],
                    " ",
                ),
            )
        },
        Node::InterfaceTypeDefinition(n) => {
            let name = parts.one();
            let directives = parts.many(n.directives.len());
            let fields = parts.many(n.fields.len());
            described(
                n.description.as_deref(),
                join(
                    &["interface".to_string(), name, join(&directives, " "), block(&fields)],
                    " ",
                ),
            )
        },
        Node::UnionTypeDefinition(n) => {
            let name = parts.one();
            let directives = parts.many(n.directives.len());
            let types = parts.many(n.types.len());
            described(
                n.description.as_deref(),
                join(
                    &[
                        "union".to_string(),
                        name,
                        join(&directives, " "),
                        format!("= {}", join(&types, " | ")),
                    ],
                    " ",
                ),
            )
        },
        Node::EnumTypeDefinition(n) => {
            let name = parts.one();
            let directives = parts.many(n.directives.len());
            let values = parts.many(n.values.len());
            described(
                n.description.as_deref(),
                join(&["enum".to_string(), name, join(&directives, " "), block(&values)], " "),
            )
        },
        Node::EnumValueDefinition(n) => {
            let name = parts.one();
            let directives = parts.many(n.directives.len());
            described(n.description.as_deref(), join(&[name, join(&directives, " ")], " "))
        },
        Node::InputObjectTypeDefinition(n) => {
            let name = parts.one();
            let directives = parts.many(n.directives.len());
            let fields = parts.many(n.fields.len());
            described(
                n.description.as_deref(),
                join(&["input".to_string(), name, join(&directives, " "), block(&fields)], " "),
            )
        },
        Node::TypeExtensionDefinition(n) => {
            described(n.description.as_deref(), format!("extend {}", parts.one()))
        },
        Node::DirectiveDefinition(n) => {
            let name = parts.one();
            let arguments = parts.many(n.arguments.len());
            let locations = parts.many(n.locations.len());
            described(
                n.description.as_deref(),
                format!(
                    "directive @{name}{} on {}",
                    argument_list(&arguments),
                    join(&locations, " | "),
                ),
            )
        },

        Node::MutationDefinition(n) => described(
            n.description.as_deref(),
            operation_line(
                "mutation",
                &mut parts,
                n.arguments.len(),
                n.directives.len(),
                &n.result,
            ),
        ),
        Node::QueryDefinition(n) => described(
            n.description.as_deref(),
            operation_line("query", &mut parts, n.arguments.len(), n.directives.len(), &n.result),
        ),
        Node::MutationFieldDefinition(n) => {
            let name = parts.one();
            let arguments = parts.many(n.arguments.len());
            let ty = parts.one();
            let directives = parts.many(n.directives.len());
            described(
                n.description.as_deref(),
                field_line(name, &arguments, ty, &directives),
            )
        },
        Node::QueryFieldDefinition(n) => {
            let name = parts.one();
            let arguments = parts.many(n.arguments.len());
            let ty = parts.one();
            let directives = parts.many(n.directives.len());
            described(
                n.description.as_deref(),
                field_line(name, &arguments, ty, &directives),
            )
        },

        Node::FilterDefinition(n) => {
            let ty = parts.one();
            let conditions = parts.many(n.conditions.len());
            described(
                n.description.as_deref(),
                join(&["filter on".to_string(), ty, block(&conditions)], " "),
            )
        },
        Node::FilterCondition(n) => {
            let key = parts.one();
            let arguments = parts.many(n.arguments.len());
            let condition = parts.one();
            format!("{key}: {}{condition}", wrap("", &argument_list(&arguments), " "))
        },
        Node::OrderDefinition(n) => {
            let ty = parts.one();
            let expressions = parts.many(n.expressions.len());
            described(
                n.description.as_deref(),
                join(&["order on".to_string(), ty, block(&expressions)], " "),
            )
        },
        Node::OrderExpression(n) => {
            let key = parts.one();
            let expression = parts.many(n.expression.len());
            if expression.len() > 1 {
                format!("{key}: [{}]", join(&expression, ", "))
            } else {
                format!("{key}: {}", join(&expression, ""))
            }
        },
    }
}

/// `name(args): type @directives`, shared by every field-like definition.
fn field_line(name: String, arguments: &[String], ty: String, directives: &[String]) -> String {
    format!(
        "{name}{}: {ty}{}",
        argument_list(arguments),
        wrap(" ", &join(directives, " "), ""),
    )
}

/// `mutation`/`query` header followed by either `: Type @directives` or
/// `@directives { fields }`.
fn operation_line<F>(
    keyword: &str,
    parts: &mut Parts,
    argument_count: usize,
    directive_count: usize,
    result: &DefinitionResult<F>,
) -> String {
    let name = parts.one();
    let arguments = parts.many(argument_count);
    let directives = join(&parts.many(directive_count), " ");
    let head = format!("{keyword} {name}{}", argument_list(&arguments));
    match result {
        DefinitionResult::Type { .. } => {
            format!("{head}: {}{}", parts.one(), wrap(" ", &directives, ""))
        },
        DefinitionResult::Fields { fields } => {
            let fields = parts.many(fields.len());
            format!("{head}{} {}", wrap(" ", &directives, ""), block(&fields))
        },
    }
}

/// Prefixes `text` with one `## ` line per description line.
fn described(description: Option<&str>, text: String) -> String {
    let Some(description) = description else {
        return text;
    };
    let mut out = String::new();
    for line in description.split('\n') {
        if line.is_empty() {
            out.push_str("##\n");
        } else {
            out.push_str("## ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(&text);
    out
}

/// Joins the non-empty items with `separator`.
fn join(items: &[String], separator: &str) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// `(a, b)`, or one argument per line when any of them carries a
/// description.
fn argument_list(arguments: &[String]) -> String {
    if arguments.iter().any(|argument| argument.contains('\n')) {
        format!("{}\n)", indent(&format!("(\n{}", join(arguments, "\n"))))
    } else {
        wrap("(", &join(arguments, ", "), ")")
    }
}

/// `start + text + end`, or nothing when `text` is empty.
fn wrap(start: &str, text: &str, end: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{start}{text}{end}")
    }
}

/// `{}` when empty, otherwise one item per line indented two spaces.
fn block(items: &[String]) -> String {
    if items.is_empty() {
        "{}".to_string()
    } else {
        format!("{}\n}}", indent(&format!("{{\n{}", join(items, "\n"))))
    }
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n  ")
}
