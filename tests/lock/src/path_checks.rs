//! Structural checks on returned paths and node arenas.

use peg_harness::worlds::peg_board::BoardStateSpace;
use peg_kernel::board::state::BoardState;
use peg_search::node::{NodeStatus, SearchNode};
use peg_search::search::SearchResult;

/// Assert that `result` is a legal, unit-cost, start-to-target path.
///
/// # Panics
///
/// Panics with a description of the first violated property.
pub fn assert_valid_path(
    start: &BoardState,
    target: &BoardState,
    result: &SearchResult<BoardState>,
) {
    assert!(result.found, "expected a path");
    let path = &result.path;
    assert_eq!(path.first(), Some(start), "path must begin at the start board");
    let last = path.last().expect("non-empty path");
    assert!(last.same_layout(target), "path must end on the target layout");
    assert_eq!(
        result.cost,
        (path.len() - 1) as u64,
        "every move costs 1, so cost is moves"
    );
    for (i, pair) in path.windows(2).enumerate() {
        assert!(
            BoardStateSpace.is_legal_step(&pair[0], &pair[1]),
            "step {i} is not a legal move"
        );
        assert!(pair[0].diff_move(&pair[1]).is_some(), "step {i} moves more than one piece");
        assert_ne!(pair[0].to_move(), pair[1].to_move(), "step {i} did not pass the turn");
    }
}

/// Assert the arena-level invariants of a finished run.
///
/// # Panics
///
/// Panics with a description of the first violated property.
pub fn assert_arena_invariants<S>(nodes: &[SearchNode<S>])
where
    S: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    let mut seen = std::collections::HashSet::new();
    for node in nodes {
        assert!(seen.insert(node.state.clone()), "state {:?} interned twice", node.state);
        if node.status == NodeStatus::Unvisited {
            continue;
        }
        let g = node.g_cost.expect("reached nodes carry a cost");
        assert!(node.f_cost >= g, "f < g at node {}", node.node_id);
        if let Some(parent) = node.parent {
            assert_eq!(
                nodes[parent.index()].status,
                NodeStatus::Closed,
                "parent of node {} was never expanded",
                node.node_id
            );
        }
        assert_eq!(
            node.heap_slot().is_some(),
            node.status == NodeStatus::Open,
            "heap slot disagrees with status at node {}",
            node.node_id
        );
    }
}
