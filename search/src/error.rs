//! Typed search errors.
//!
//! An exhausted frontier is not a failure of [`crate::search::search`]: the
//! loop maps [`SearchError::EmptyFrontier`] to a "not found" result. The
//! remaining variants are pre-flight policy failures and frontier
//! bookkeeping faults.

/// Typed failure raised by the frontier or by pre-flight validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `pop_min` was called on an empty frontier.
    EmptyFrontier,
    /// `remove_at` was called for a node that holds no frontier slot.
    NotInFrontier { node_id: usize },
    /// The policy failed validation; no search steps were taken.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "frontier is empty"),
            Self::NotInFrontier { node_id } => {
                write!(f, "node {node_id} is not in the frontier")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
