//! Search policy types.

use crate::error::SearchError;

/// Search budget and close-handling configuration.
///
/// The default policy runs to goal or frontier exhaustion, never reopens a
/// closed node, and keeps no per-expansion log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions. `u64::MAX` means unbounded.
    pub max_expansions: u64,
    /// What to do when a cheaper path reaches an already closed node.
    pub close_policy: ClosePolicyV1,
    /// Keep an `ExpandEventV1` per frontier pop in the search graph.
    pub record_expansions: bool,
}

impl SearchPolicyV1 {
    /// Reject configurations that cannot run a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_expansions(self, max_expansions: u64) -> Self {
        Self {
            max_expansions,
            ..self
        }
    }

    #[must_use]
    pub fn with_close_policy(self, close_policy: ClosePolicyV1) -> Self {
        Self {
            close_policy,
            ..self
        }
    }

    #[must_use]
    pub fn recording_expansions(self) -> Self {
        Self {
            record_expansions: true,
            ..self
        }
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: u64::MAX,
            close_policy: ClosePolicyV1::MonotoneClose,
            record_expansions: false,
        }
    }
}

/// Handling of an improved path to a node that has already been expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePolicyV1 {
    /// Closed nodes stay closed; the cheaper path is counted and dropped.
    /// Optimal only with a consistent heuristic. Default.
    MonotoneClose,
    /// Closed nodes are re-opened with the cheaper cost and re-expanded.
    /// Optimal with any admissible heuristic.
    ReopenOnImprovement,
}

impl ClosePolicyV1 {
    /// Stable label used in the search graph.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonotoneClose => "monotone_close",
            Self::ReopenOnImprovement => "reopen_on_improvement",
        }
    }
}
