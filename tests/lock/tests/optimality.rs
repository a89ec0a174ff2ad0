//! Path cost against independent baselines.
//!
//! Proves:
//! 1. Zero-heuristic search matches a plain breadth-first move count
//! 2. Corner-heuristic search never beats the breadth-first count and
//!    always returns a legal path
//! 3. Reachability agrees between the engine and the baseline
//!
//! The corner heuristic measures distance to fixed corners, not to the
//! mirrored target, so it is not a lower bound for every board. Only the
//! zero-heuristic run is held to exact optimality.

use lock_tests::fixtures::{bfs_distance, fixture_board, Uninformed, FIXTURE_GRIDS};
use lock_tests::path_checks::{assert_arena_invariants, assert_valid_path};
use peg_harness::grid::decode_grid;
use peg_harness::worlds::peg_board::BoardStateSpace;
use peg_kernel::board::state::BoardState;
use peg_search::policy::SearchPolicyV1;
use peg_search::search::search;

fn boards() -> Vec<(String, BoardState)> {
    let mut out: Vec<(String, BoardState)> = FIXTURE_GRIDS
        .iter()
        .map(|name| ((*name).to_string(), fixture_board(name)))
        .collect();
    for text in [
        "2\n2 0\n0 1",
        "3\n2 0 0\n0 3 0\n1 0 0",
        "3\n2 2 0\n0 0 0\n0 1 1",
        "4\n2 0 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 1",
    ] {
        out.push((text.replace('\n', "/"), decode_grid(text).unwrap()));
    }
    out
}

#[test]
fn uninformed_search_matches_breadth_first() {
    for (name, start) in boards() {
        let target = start.mirrored();
        let expected = bfs_distance(&start, &target);
        let result =
            search(start.clone(), &target, &Uninformed, &SearchPolicyV1::default()).unwrap();

        assert_eq!(result.found, expected.is_some(), "{name}: reachability");
        if let Some(distance) = expected {
            assert_eq!(result.cost, distance, "{name}: uniform-cost search must be optimal");
            assert_valid_path(&start, &target, &result);
        }
        assert_arena_invariants(&result.nodes);
    }
}

#[test]
fn corner_heuristic_paths_are_legal_and_never_shorter_than_optimal() {
    for (name, start) in boards() {
        let target = start.mirrored();
        let expected = bfs_distance(&start, &target);
        let result =
            search(start.clone(), &target, &BoardStateSpace, &SearchPolicyV1::default()).unwrap();

        assert_eq!(result.found, expected.is_some(), "{name}: reachability");
        if let Some(distance) = expected {
            assert!(result.cost >= distance, "{name}: cost below the breadth-first count");
            assert_valid_path(&start, &target, &result);
        }
        assert_arena_invariants(&result.nodes);
    }
}
