use crate::ast::Loc;
use crate::ast::NodeKind;

/// Trait implemented by every AST node struct and category enum.
///
/// Node types implement this via `#[inherent] impl AstNode`, so `kind()`
/// and `loc()` are callable without importing the trait while generic code
/// can still take `T: AstNode`.
pub trait AstNode {
    /// The node's `kind` discriminant.
    fn kind(&self) -> NodeKind;

    /// The node's location, unless parsed with `no_location`.
    fn loc(&self) -> Option<&Loc>;
}

/// Implements [`AstNode`] for node structs that carry a `loc` field and are
/// named after their [`NodeKind`].
macro_rules! impl_ast_node {
    ($($node:ident),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::ast::AstNode for $crate::ast::$node {
                pub fn kind(&self) -> $crate::ast::NodeKind {
                    $crate::ast::NodeKind::$node
                }

                pub fn loc(&self) -> Option<&$crate::ast::Loc> {
                    self.loc.as_ref()
                }
            }
        )*
    };
}

pub(crate) use impl_ast_node;
