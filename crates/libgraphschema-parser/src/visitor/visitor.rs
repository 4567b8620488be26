use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;

/// Callbacks run by [`visit`](crate::visit) around every node.
///
/// Both methods default to [`VisitAction::Continue`], so implementors
/// override only the side they need. The printer, for instance, only
/// implements `leave`.
pub trait Visitor {
    /// Called before the node's children are walked.
    fn enter(&mut self, _node: &Node, _ctx: &VisitContext<'_>) -> VisitAction {
        VisitAction::Continue
    }

    /// Called after the node's children are walked, with the children
    /// already edited.
    fn leave(&mut self, _node: &Node, _ctx: &VisitContext<'_>) -> VisitAction {
        VisitAction::Continue
    }
}
