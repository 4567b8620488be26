use crate::ast::NodeKind;

/// An edit requested by a visitor that the tree cannot hold.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum VisitError {
    #[error("cannot remove the required `{key}` child of a {parent} node")]
    RequiredChildRemoved {
        parent: NodeKind,
        key: &'static str,
    },

    #[error("a {found} node cannot replace the `{key}` child of a {parent} node")]
    MismatchedReplacement {
        parent: NodeKind,
        key: &'static str,
        found: NodeKind,
    },
}
