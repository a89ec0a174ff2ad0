//! Committed grid fixtures and a zero-heuristic view of the peg world.

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use peg_harness::grid::load_grid;
use peg_harness::worlds::peg_board::BoardStateSpace;
use peg_kernel::board::state::BoardState;
use peg_search::contract::StateSpace;

/// Names of the committed grids under `fixtures/`.
pub const FIXTURE_GRIDS: &[&str] = &[
    "mirror_line.txt",
    "boxed_in.txt",
    "open_corners.txt",
    "walled_4x4.txt",
];

/// Absolute path of a committed grid.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures")).join(name)
}

/// Decode a committed grid.
///
/// # Panics
///
/// Panics if the fixture is missing or malformed.
#[must_use]
pub fn fixture_board(name: &str) -> BoardState {
    load_grid(&fixture_path(name)).unwrap_or_else(|e| panic!("fixture {name}: {e}"))
}

/// The peg world with its heuristic replaced by zero.
///
/// Searching this space is uniform-cost search, so its costs are optimal
/// regardless of how good the corner heuristic is for a given target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninformed;

impl StateSpace for Uninformed {
    type State = BoardState;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "peg_board_uninformed"
    }

    fn neighbors(&self, state: &BoardState) -> Vec<(BoardState, u64)> {
        BoardStateSpace.neighbors(state)
    }

    fn heuristic(&self, _state: &BoardState, _target: &BoardState) -> u64 {
        0
    }

    fn is_target(&self, state: &BoardState, target: &BoardState) -> bool {
        BoardStateSpace.is_target(state, target)
    }
}

/// Breadth-first move count from `start` to a board with `target`'s layout,
/// computed without the search crate.
#[must_use]
pub fn bfs_distance(start: &BoardState, target: &BoardState) -> Option<u64> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back((start.clone(), 0u64));
    while let Some((state, depth)) = queue.pop_front() {
        if state.same_layout(target) {
            return Some(depth);
        }
        for mv in BoardStateSpace.legal_moves(&state) {
            let next = state.apply_move(mv);
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}
