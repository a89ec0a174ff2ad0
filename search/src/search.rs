//! Search entry point and expansion loop.
//!
//! # Loop
//!
//! ```text
//! pop_min ─┬─ EmptyFrontier ───────────────▶ not found
//!          └─ node (now Closed) ─┬─ is_target ─▶ reconstruct path
//!                                └─ for each (next, cost) in neighbors:
//!                                     tentative = g + cost
//!                                     if tentative < next.g:
//!                                        Open   → remove_at, re-rank, push
//!                                        Closed → per ClosePolicyV1
//!                                        else   → rank, push
//! ```
//!
//! The registry and frontier are created per call and never outlive it; the
//! node arena is moved into the result.

use crate::contract::StateSpace;
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::graph::{ExpandEventV1, SearchGraphMetadata, SearchGraphV1, TerminationReasonV1};
use crate::node::{NodeId, NodeStatus, SearchNode};
use crate::policy::{ClosePolicyV1, SearchPolicyV1};
use crate::registry::NodeRegistry;

/// Result of a search execution.
///
/// `found == false` always comes with an empty path and `cost == 0`; no
/// partial paths are returned.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// States from start to target inclusive.
    pub path: Vec<S>,
    /// Total edge cost of `path`.
    pub cost: u64,
    pub found: bool,
    /// The node the target was matched at.
    pub goal_node: Option<NodeId>,
    /// Every node created during the run, indexed by `NodeId`.
    pub nodes: Vec<SearchNode<S>>,
    pub graph: SearchGraphV1,
}

impl<S> SearchResult<S> {
    /// Returns `true` if the search terminated because the target was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    successors: u64,
    duplicates: u64,
    decrease_keys: u64,
    reopened: u64,
    closed_improvements_ignored: u64,
}

/// Run A* from `start` until a state matching `target` is popped.
///
/// Frontier exhaustion and budget exhaustion are outcomes, not errors: both
/// return `Ok` with `found == false`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before any step if the policy is
/// rejected, and [`SearchError::NotInFrontier`] if frontier bookkeeping is
/// found inconsistent mid-run.
pub fn search<W>(
    start: W::State,
    target: &W::State,
    space: &W,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: StateSpace + ?Sized,
{
    policy.validate()?;

    let mut registry = NodeRegistry::new();
    let mut frontier = PriorityFrontier::new();
    let mut counters = Counters::default();
    let mut expansions = Vec::new();

    let root = registry.get_or_create(start);
    let root_h = space.heuristic(&registry.get(root).state, target);
    open_node(registry.get_mut(root), None, 0, root_h);
    frontier.push(&mut registry, root);

    let termination_reason = loop {
        if counters.expansions >= policy.max_expansions {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }
        let Ok(current) = frontier.pop_min(&mut registry) else {
            break TerminationReasonV1::FrontierExhausted;
        };
        counters.expansions += 1;

        let node = registry.get_mut(current);
        node.status = NodeStatus::Closed;
        // Every node that reaches the frontier has a cost.
        let current_g = node.g_cost.unwrap_or(0);
        let current_f = node.f_cost;

        if space.is_target(&registry.get(current).state, target) {
            if policy.record_expansions {
                expansions.push(expand_event(&counters, current, current_g, current_f, 0));
            }
            break TerminationReasonV1::GoalReached {
                node_id: current.index(),
            };
        }

        let neighbors = space.neighbors(&registry.get(current).state);
        if policy.record_expansions {
            let successors = neighbors.len() as u64;
            expansions.push(expand_event(&counters, current, current_g, current_f, successors));
        }

        for (next_state, edge_cost) in neighbors {
            counters.successors += 1;
            let tentative = current_g.saturating_add(edge_cost);

            let before = registry.len();
            let next = registry.get_or_create(next_state);
            if registry.len() == before {
                counters.duplicates += 1;
            }

            let next_node = registry.get(next);
            if next_node.g_cost.is_some_and(|g| tentative >= g) {
                continue;
            }
            let status = next_node.status;
            match status {
                NodeStatus::Unvisited => {}
                NodeStatus::Open => {
                    frontier.remove_at(&mut registry, next)?;
                    counters.decrease_keys += 1;
                }
                NodeStatus::Closed => match policy.close_policy {
                    ClosePolicyV1::MonotoneClose => {
                        counters.closed_improvements_ignored += 1;
                        continue;
                    }
                    ClosePolicyV1::ReopenOnImprovement => counters.reopened += 1,
                },
            }

            let h = space.heuristic(&registry.get(next).state, target);
            open_node(registry.get_mut(next), Some(current), tentative, h);
            frontier.push(&mut registry, next);
        }
    };

    let metadata = SearchGraphMetadata {
        space_id: space.space_id().to_string(),
        close_policy: policy.close_policy,
        termination_reason,
        total_expansions: counters.expansions,
        total_successors_generated: counters.successors,
        total_duplicates: counters.duplicates,
        total_decrease_keys: counters.decrease_keys,
        total_reopened: counters.reopened,
        total_closed_improvements_ignored: counters.closed_improvements_ignored,
        nodes_created: registry.len() as u64,
        frontier_high_water: frontier.high_water(),
        frontier_remaining: frontier.len() as u64,
    };
    let graph = SearchGraphV1 {
        expansions,
        metadata,
    };

    let nodes = registry.into_nodes();
    let (path, cost, goal_node) = match termination_reason {
        TerminationReasonV1::GoalReached { node_id } => {
            let goal = NodeId(node_id);
            let path = reconstruct_path(&nodes, goal)
                .into_iter()
                .map(|id| nodes[id.index()].state.clone())
                .collect();
            (path, nodes[node_id].g_cost.unwrap_or(0), Some(goal))
        }
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            (Vec::new(), 0, None)
        }
    };

    Ok(SearchResult {
        found: goal_node.is_some(),
        path,
        cost,
        goal_node,
        nodes,
        graph,
    })
}

/// Thin form of [`search`] with the default policy: `(path, cost, found)`.
///
/// # Errors
///
/// Same as [`search`].
pub fn search_path<W>(
    start: W::State,
    target: &W::State,
    space: &W,
) -> Result<(Vec<W::State>, u64, bool), SearchError>
where
    W: StateSpace + ?Sized,
{
    let result = search(start, target, space, &SearchPolicyV1::default())?;
    Ok((result.path, result.cost, result.found))
}

/// Node ids from the root to `goal`, following parent links.
///
/// # Panics
///
/// Panics if a parent id is out of range for `nodes`.
#[must_use]
pub fn reconstruct_path<S>(nodes: &[SearchNode<S>], goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        path.push(id);
        current = nodes[id.index()].parent;
    }
    path.reverse();
    path
}

fn open_node<S>(node: &mut SearchNode<S>, parent: Option<NodeId>, g: u64, h: u64) {
    node.g_cost = Some(g);
    node.h_cost = h;
    node.f_cost = g.saturating_add(h);
    node.parent = parent;
    node.status = NodeStatus::Open;
}

fn expand_event(
    counters: &Counters,
    id: NodeId,
    g_cost: u64,
    f_cost: u64,
    successors: u64,
) -> ExpandEventV1 {
    ExpandEventV1 {
        expansion_order: counters.expansions - 1,
        node_id: id.index(),
        g_cost,
        f_cost,
        successors,
    }
}
