//! `SearchGraphV1`: counters and optional expansion log of one run.
//!
//! This is the observability surface of the engine. It is a plain value,
//! serialized through the kernel's canonical JSON encoder so that two runs
//! over the same inputs produce byte-identical records.

use peg_kernel::proof::canon::{canonical_json_bytes, CanonError};
use peg_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

use crate::policy::ClosePolicyV1;

/// The complete record of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphV1 {
    /// One event per frontier pop, in pop order. Empty unless the policy
    /// asked for `record_expansions`.
    pub expansions: Vec<ExpandEventV1>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of frontier pops, starting at 0.
    pub expansion_order: u64,
    pub node_id: usize,
    pub g_cost: u64,
    pub f_cost: u64,
    /// Successors returned by the domain (0 for the goal, which is not expanded).
    pub successors: u64,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The target was popped.
    GoalReached { node_id: usize },
    /// No open nodes remained.
    FrontierExhausted,
    /// `max_expansions` pops happened without reaching the target.
    ExpansionBudgetExceeded,
}

/// Aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    pub space_id: String,
    pub close_policy: ClosePolicyV1,
    pub termination_reason: TerminationReasonV1,

    pub total_expansions: u64,
    pub total_successors_generated: u64,
    /// Successors whose state was already registered.
    pub total_duplicates: u64,
    /// Open nodes re-ranked through remove + push.
    pub total_decrease_keys: u64,
    /// Closed nodes re-opened (only under `ReopenOnImprovement`).
    pub total_reopened: u64,
    /// Cheaper paths to closed nodes that were dropped (only under `MonotoneClose`).
    pub total_closed_improvements_ignored: u64,
    pub nodes_created: u64,
    pub frontier_high_water: u64,
    /// Open nodes left when the loop stopped.
    pub frontier_remaining: u64,
}

impl SearchGraphV1 {
    /// Produce canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

impl TerminationReasonV1 {
    /// Stable label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "expansion_order": e.expansion_order,
        "f_cost": e.f_cost,
        "g_cost": e.g_cost,
        "node_id": e.node_id,
        "successors": e.successors,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "close_policy": m.close_policy.as_str(),
        "frontier_high_water": m.frontier_high_water,
        "frontier_remaining": m.frontier_remaining,
        "nodes_created": m.nodes_created,
        "space_id": m.space_id,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_closed_improvements_ignored": m.total_closed_improvements_ignored,
        "total_decrease_keys": m.total_decrease_keys,
        "total_duplicates": m.total_duplicates,
        "total_expansions": m.total_expansions,
        "total_reopened": m.total_reopened,
        "total_successors_generated": m.total_successors_generated,
    })
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
