use crate::visitor::VisitError;

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// The input is not an AST node: its `kind` is missing or unknown.
    #[error("Invalid AST Node: {json}")]
    InvalidAstNode { json: String },

    /// A node below the root failed to deserialize.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Visit(#[from] VisitError),
}
