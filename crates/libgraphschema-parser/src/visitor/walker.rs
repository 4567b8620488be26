use crate::ast::DefinitionResult;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::visitor::KeyTable;
use crate::visitor::SchemaKeys;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;

/// Walks `root` with [`SchemaKeys`], returning the (possibly edited) tree,
/// or `None` if the visitor removed the root.
pub fn visit<V>(root: impl Into<Node>, visitor: &mut V) -> Result<Option<Node>, VisitError>
where
    V: Visitor + ?Sized,
{
    visit_with_keys(root, visitor, &SchemaKeys)
}

/// Walks `root` descending only into the child keys `keys` lists for each
/// kind.
pub fn visit_with_keys<V, K>(
    root: impl Into<Node>,
    visitor: &mut V,
    keys: &K,
) -> Result<Option<Node>, VisitError>
where
    V: Visitor + ?Sized,
    K: KeyTable + ?Sized,
{
    let mut walker = Walker {
        visitor,
        keys,
        ancestors: Vec::new(),
        broken: false,
    };
    walker.walk(root.into(), None, None)
}

struct Walker<'w, V: ?Sized, K: ?Sized> {
    visitor: &'w mut V,
    keys: &'w K,

    /// Kinds of the nodes whose children are being walked, root first.
    ancestors: Vec<NodeKind>,

    /// Set once a callback returns `Break`.
    broken: bool,
}

impl<V, K> Walker<'_, V, K>
where
    V: Visitor + ?Sized,
    K: KeyTable + ?Sized,
{
    fn walk(
        &mut self,
        node: Node,
        key: Option<&'static str>,
        index: Option<usize>,
    ) -> Result<Option<Node>, VisitError> {
        if self.broken {
            return Ok(Some(node));
        }

        let action = self.visitor.enter(&node, &VisitContext {
            key,
            index,
            ancestors: &self.ancestors,
        });
        let node = match action {
            VisitAction::Continue => node,
            VisitAction::Replace(replacement) => replacement,
            VisitAction::Skip => return Ok(Some(node)),
            VisitAction::Remove => return Ok(None),
            VisitAction::Break => {
                log::trace!("visit stopped on entering a {} node", node.kind());
                self.broken = true;
                return Ok(Some(node));
            },
        };

        self.ancestors.push(node.kind());
        let node = self.walk_children(node);
        self.ancestors.pop();
        let node = node?;
        if self.broken {
            return Ok(Some(node));
        }

        let action = self.visitor.leave(&node, &VisitContext {
            key,
            index,
            ancestors: &self.ancestors,
        });
        Ok(match action {
            VisitAction::Continue | VisitAction::Skip => Some(node),
            VisitAction::Replace(replacement) => Some(replacement),
            VisitAction::Remove => None,
            VisitAction::Break => {
                log::trace!("visit stopped on leaving a {} node", node.kind());
                self.broken = true;
                Some(node)
            },
        })
    }

    /// The kind of the node whose children are being walked.
    fn parent(&self) -> NodeKind {
        self.ancestors.last().copied().unwrap_or(NodeKind::Document)
    }

    fn required<T>(&mut self, child: T, key: &'static str) -> Result<T, VisitError>
    where
        T: Into<Node> + TryFrom<Node, Error = Node>,
    {
        match self.walk(child.into(), Some(key), None)? {
            Some(node) => self.downcast(node, key),
            None => Err(VisitError::RequiredChildRemoved {
                parent: self.parent(),
                key,
            }),
        }
    }

    fn required_boxed<T>(&mut self, child: Box<T>, key: &'static str) -> Result<Box<T>, VisitError>
    where
        T: Into<Node> + TryFrom<Node, Error = Node>,
    {
        self.required(*child, key).map(Box::new)
    }

    fn optional<T>(&mut self, child: Option<T>, key: &'static str) -> Result<Option<T>, VisitError>
    where
        T: Into<Node> + TryFrom<Node, Error = Node>,
    {
        let Some(child) = child else {
            return Ok(None);
        };
        match self.walk(child.into(), Some(key), None)? {
            Some(node) => self.downcast(node, key).map(Some),
            None => Ok(None),
        }
    }

    fn list<T>(&mut self, children: Vec<T>, key: &'static str) -> Result<Vec<T>, VisitError>
    where
        T: Into<Node> + TryFrom<Node, Error = Node>,
    {
        let mut kept = Vec::with_capacity(children.len());
        for (index, child) in children.into_iter().enumerate() {
            if let Some(node) = self.walk(child.into(), Some(key), Some(index))? {
                kept.push(self.downcast(node, key)?);
            }
        }
        Ok(kept)
    }

    /// Walks whichever of `"type"` or `"fields"` the result holds.
    fn definition_result<F>(
        &mut self,
        result: DefinitionResult<F>,
        key: &'static str,
    ) -> Result<DefinitionResult<F>, VisitError>
    where
        F: Into<Node> + TryFrom<Node, Error = Node>,
    {
        Ok(match (key, result) {
            ("type", DefinitionResult::Type { ty }) => DefinitionResult::Type {
                ty: self.required(ty, key)?,
            },
            ("fields", DefinitionResult::Fields { fields }) => DefinitionResult::Fields {
                fields: self.list(fields, key)?,
            },
            (_, result) => result,
        })
    }

    fn downcast<T>(&self, node: Node, key: &'static str) -> Result<T, VisitError>
    where
        T: TryFrom<Node, Error = Node>,
    {
        T::try_from(node).map_err(|found| VisitError::MismatchedReplacement {
            parent: self.parent(),
            key,
            found: found.kind(),
        })
    }

    /// Walks the children `self.keys` lists for the node's kind, in order,
    /// writing each (possibly edited) child back into its slot.
    fn walk_children(&mut self, node: Node) -> Result<Node, VisitError> {
        let table: &K = self.keys;
        let keys = table.keys(node.kind());
        let node = match node {
            Node::Name(_)
            | Node::IntValue(_)
            | Node::FloatValue(_)
            | Node::StringValue(_)
            | Node::BooleanValue(_)
            | Node::EnumValue(_) => node,

            Node::Document(mut n) => {
                for &key in keys {
                    if key == "definitions" {
                        n.definitions = self.list(n.definitions, key)?;
                    }
                }
                Node::Document(n)
            },
            Node::Variable(mut n) => {
                for &key in keys {
                    if key == "name" {
                        n.name = self.required(n.name, key)?;
                    }
                }
                Node::Variable(n)
            },
            Node::Argument(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "value" => n.value = self.required(n.value, key)?,
                        _ => {},
                    }
                }
                Node::Argument(n)
            },
            Node::ListValue(mut n) => {
                for &key in keys {
                    if key == "values" {
                        n.values = self.list(n.values, key)?;
                    }
                }
                Node::ListValue(n)
            },
            Node::ObjectValue(mut n) => {
                for &key in keys {
                    if key == "fields" {
                        n.fields = self.list(n.fields, key)?;
                    }
                }
                Node::ObjectValue(n)
            },
            Node::ObjectField(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "value" => n.value = self.required(n.value, key)?,
                        _ => {},
                    }
                }
                Node::ObjectField(n)
            },
            Node::Directive(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        _ => {},
                    }
                }
                Node::Directive(n)
            },

            Node::NamedType(mut n) => {
                for &key in keys {
                    if key == "name" {
                        n.name = self.required(n.name, key)?;
                    }
                }
                Node::NamedType(n)
            },
            Node::ListType(mut n) => {
                for &key in keys {
                    if key == "type" {
                        n.ty = self.required_boxed(n.ty, key)?;
                    }
                }
                Node::ListType(n)
            },
            Node::NonNullType(mut n) => {
                for &key in keys {
                    if key == "type" {
                        n.ty = self.required_boxed(n.ty, key)?;
                    }
                }
                Node::NonNullType(n)
            },
            Node::ConnectionType(mut n) => {
                for &key in keys {
                    match key {
                        "edgeLabel" => n.edge_label = self.optional(n.edge_label, key)?,
                        "type" => n.ty = self.required(n.ty, key)?,
                        _ => {},
                    }
                }
                Node::ConnectionType(n)
            },
            Node::ConnectionJoinType(mut n) => {
                for &key in keys {
                    if key == "connections" {
                        n.connections = self.list(n.connections, key)?;
                    }
                }
                Node::ConnectionJoinType(n)
            },
            Node::EdgeType(mut n) => {
                for &key in keys {
                    match key {
                        "edgeLabel" => n.edge_label = self.optional(n.edge_label, key)?,
                        "type" => n.ty = self.required(n.ty, key)?,
                        _ => {},
                    }
                }
                Node::EdgeType(n)
            },

            Node::ScalarTypeDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        _ => {},
                    }
                }
                Node::ScalarTypeDefinition(n)
            },
            Node::ObjectTypeDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "interfaces" => n.interfaces = self.list(n.interfaces, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "fields" => n.fields = self.list(n.fields, key)?,
                        _ => {},
                    }
                }
                Node::ObjectTypeDefinition(n)
            },
            Node::FieldDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "type" => n.ty = self.required(n.ty, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        _ => {},
                    }
                }
                Node::FieldDefinition(n)
            },
            Node::InputValueDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "type" => n.ty = self.required(n.ty, key)?,
                        "defaultValue" => n.default_value = self.optional(n.default_value, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        _ => {},
                    }
                }
                Node::InputValueDefinition(n)
            },
            Node::InterfaceTypeDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "fields" => n.fields = self.list(n.fields, key)?,
                        _ => {},
                    }
                }
                Node::InterfaceTypeDefinition(n)
            },
            Node::UnionTypeDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "types" => n.types = self.list(n.types, key)?,
                        _ => {},
                    }
                }
                Node::UnionTypeDefinition(n)
            },
            Node::EnumTypeDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "values" => n.values = self.list(n.values, key)?,
                        _ => {},
                    }
                }
                Node::EnumTypeDefinition(n)
            },
            Node::EnumValueDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        _ => {},
                    }
                }
                Node::EnumValueDefinition(n)
            },
            Node::InputObjectTypeDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "fields" => n.fields = self.list(n.fields, key)?,
                        _ => {},
                    }
                }
                Node::InputObjectTypeDefinition(n)
            },
            Node::TypeExtensionDefinition(mut n) => {
                for &key in keys {
                    if key == "definition" {
                        n.definition = self.required(n.definition, key)?;
                    }
                }
                Node::TypeExtensionDefinition(n)
            },
            Node::DirectiveDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "locations" => n.locations = self.list(n.locations, key)?,
                        _ => {},
                    }
                }
                Node::DirectiveDefinition(n)
            },

            Node::MutationDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "type" | "fields" => n.result = self.definition_result(n.result, key)?,
                        _ => {},
                    }
                }
                Node::MutationDefinition(n)
            },
            Node::MutationFieldDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "type" => n.ty = self.required(n.ty, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        _ => {},
                    }
                }
                Node::MutationFieldDefinition(n)
            },
            Node::QueryDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        "type" | "fields" => n.result = self.definition_result(n.result, key)?,
                        _ => {},
                    }
                }
                Node::QueryDefinition(n)
            },
            Node::QueryFieldDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "name" => n.name = self.required(n.name, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "type" => n.ty = self.required(n.ty, key)?,
                        "directives" => n.directives = self.list(n.directives, key)?,
                        _ => {},
                    }
                }
                Node::QueryFieldDefinition(n)
            },
            Node::FilterDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "type" => n.ty = self.required(n.ty, key)?,
                        "conditions" => n.conditions = self.list(n.conditions, key)?,
                        _ => {},
                    }
                }
                Node::FilterDefinition(n)
            },
            Node::FilterCondition(mut n) => {
                for &key in keys {
                    match key {
                        "key" => n.key = self.required(n.key, key)?,
                        "arguments" => n.arguments = self.list(n.arguments, key)?,
                        "condition" => n.condition = self.required(n.condition, key)?,
                        _ => {},
                    }
                }
                Node::FilterCondition(n)
            },
            Node::OrderDefinition(mut n) => {
                for &key in keys {
                    match key {
                        "type" => n.ty = self.required(n.ty, key)?,
                        "expressions" => n.expressions = self.list(n.expressions, key)?,
                        _ => {},
                    }
                }
                Node::OrderDefinition(n)
            },
            Node::OrderExpression(mut n) => {
                for &key in keys {
                    match key {
                        "key" => n.key = self.required(n.key, key)?,
                        "expression" => n.expression = self.list(n.expression, key)?,
                        _ => {},
                    }
                }
                Node::OrderExpression(n)
            },
        };
        Ok(node)
    }
}
