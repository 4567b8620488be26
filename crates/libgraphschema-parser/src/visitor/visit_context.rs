use crate::ast::NodeKind;

/// Where the node handed to a callback sits in the tree.
#[derive(Clone, Copy, Debug)]
pub struct VisitContext<'a> {
    /// The key of the parent slot holding this node (`"fields"`, `"type"`,
    /// ...), or `None` for the root.
    pub key: Option<&'static str>,

    /// The position within the parent slot when that slot is a list.
    pub index: Option<usize>,

    /// Kinds of every ancestor, root first. Empty for the root.
    pub ancestors: &'a [NodeKind],
}

impl VisitContext<'_> {
    pub fn parent(&self) -> Option<NodeKind> {
        self.ancestors.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}
