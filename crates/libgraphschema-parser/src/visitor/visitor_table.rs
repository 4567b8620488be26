use crate::ast::Node;
use crate::ast::NodeKind;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use indexmap::IndexMap;

type Callback<'a> = Box<dyn FnMut(&Node, &VisitContext<'_>) -> VisitAction + 'a>;

/// A [`Visitor`] assembled from closures keyed by [`NodeKind`].
///
/// A kind-specific callback takes precedence over the catch-all for the same
/// side; kinds with neither get [`VisitAction::Continue`].
///
/// ```rust
/// use libgraphschema_parser::ast::NodeKind;
/// use libgraphschema_parser::visitor::{VisitAction, VisitorTable};
///
/// let doc = libgraphschema_parser::parse("type A { b: C, d: E }").unwrap();
/// let mut fields = 0;
/// let mut table = VisitorTable::new().on_enter(NodeKind::FieldDefinition, |_, _| {
///     fields += 1;
///     VisitAction::Skip
/// });
/// libgraphschema_parser::visit(doc, &mut table).unwrap();
/// drop(table);
/// assert_eq!(fields, 2);
/// ```
#[derive(Default)]
pub struct VisitorTable<'a> {
    enter: IndexMap<NodeKind, Callback<'a>>,
    leave: IndexMap<NodeKind, Callback<'a>>,
    enter_any: Option<Callback<'a>>,
    leave_any: Option<Callback<'a>>,
}

impl<'a> VisitorTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(
        mut self,
        kind: NodeKind,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> VisitAction + 'a,
    ) -> Self {
        self.enter.insert(kind, Box::new(callback));
        self
    }

    pub fn on_leave(
        mut self,
        kind: NodeKind,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> VisitAction + 'a,
    ) -> Self {
        self.leave.insert(kind, Box::new(callback));
        self
    }

    /// Sets the `enter` callback for kinds without their own.
    pub fn on_enter_any(
        mut self,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> VisitAction + 'a,
    ) -> Self {
        self.enter_any = Some(Box::new(callback));
        self
    }

    /// Sets the `leave` callback for kinds without their own.
    pub fn on_leave_any(
        mut self,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> VisitAction + 'a,
    ) -> Self {
        self.leave_any = Some(Box::new(callback));
        self
    }
}

impl Visitor for VisitorTable<'_> {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> VisitAction {
        match self.enter.get_mut(&node.kind()).or(self.enter_any.as_mut()) {
            Some(callback) => callback(node, ctx),
            None => VisitAction::Continue,
        }
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> VisitAction {
        match self.leave.get_mut(&node.kind()).or(self.leave_any.as_mut()) {
            Some(callback) => callback(node, ctx),
            None => VisitAction::Continue,
        }
    }
}
