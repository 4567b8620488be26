use crate::ast::Node;

/// What the walker does after a [`Visitor`](crate::visitor::Visitor)
/// callback returns.
#[derive(Clone, Debug, PartialEq)]
pub enum VisitAction {
    /// Keep the node and carry on.
    Continue,

    /// From `enter`: keep the node but do not walk its children or call its
    /// `leave`. From `leave`: same as [`Continue`](Self::Continue).
    Skip,

    /// Put this node in place of the current one. From `enter`, the
    /// replacement's children are walked instead of the original's.
    Replace(Node),

    /// Drop the node from its parent. Removing an element of a list slot
    /// shrinks the list; removing an optional child clears it; removing a
    /// required child is a [`VisitError`](crate::visitor::VisitError).
    Remove,

    /// Stop the walk. The tree is returned as edited so far and no further
    /// callbacks (including pending `leave`s) run.
    Break,
}
