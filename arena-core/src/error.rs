//! Error types for search and play

/// Errors raised while choosing or applying actions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("no legal action available")]
    NoLegalAction,

    #[error("invalid action: {action}")]
    InvalidAction { action: String },
}

impl ArenaError {
    /// Build an `InvalidAction` from any debuggable action
    pub fn invalid_action<A: std::fmt::Debug>(action: &A) -> Self {
        ArenaError::InvalidAction {
            action: format!("{:?}", action),
        }
    }
}
