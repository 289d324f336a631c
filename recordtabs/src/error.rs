//! Error types for record tab operations

use recordtabs_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for record tab operations
pub type Result<T> = std::result::Result<T, TabError>;

/// Errors that can occur while producing tab content
///
/// Deciding whether a tab is shown never fails; only delegated rendering does.
#[derive(Debug, Error)]
pub enum TabError {
    /// The hierarchy driver has nothing for the requested tree
    #[error("Hierarchy tree '{tree_id}' not found")]
    TreeNotFound { tree_id: String },

    /// The hierarchy driver failed to render a tree
    #[error("Failed to render hierarchy tree '{tree_id}': {message}")]
    Render { tree_id: String, message: String },
}

impl TabError {
    pub fn tree_not_found(tree_id: impl Into<String>) -> Self {
        Self::TreeNotFound {
            tree_id: tree_id.into(),
        }
    }

    pub fn render(tree_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            tree_id: tree_id.into(),
            message: message.into(),
        }
    }
}

impl Severity for TabError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Request parameters are not validated against the tree list,
            // so an unknown tree is an expected user-driven condition
            TabError::TreeNotFound { .. } => ErrorSeverity::Warning,
            TabError::Render { .. } => ErrorSeverity::Error,
        }
    }
}
