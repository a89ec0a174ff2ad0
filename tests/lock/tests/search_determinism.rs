//! In-process determinism of search and reports.
//!
//! Proves:
//! 1. Repeating a search yields the same path, cost and search graph
//! 2. Expansion logs are identical across repeated runs
//! 3. Canonical report bytes and digests are stable across runs
//! 4. Report structure binds the start and target fingerprints

use lock_tests::fixtures::{fixture_board, FIXTURE_GRIDS};
use peg_harness::runner::run_board;
use peg_harness::worlds::peg_board::BoardStateSpace;
use peg_kernel::proof::canon::canonical_json_bytes;
use peg_search::policy::SearchPolicyV1;
use peg_search::search::search;

#[test]
fn repeated_searches_are_identical() {
    for name in FIXTURE_GRIDS {
        let start = fixture_board(name);
        let target = start.mirrored();
        let policy = SearchPolicyV1::default().recording_expansions();

        let first = search(start.clone(), &target, &BoardStateSpace, &policy).unwrap();
        for _ in 0..3 {
            let again = search(start.clone(), &target, &BoardStateSpace, &policy).unwrap();
            assert_eq!(first.path, again.path, "{name}: path");
            assert_eq!(first.cost, again.cost, "{name}: cost");
            assert_eq!(first.found, again.found, "{name}: found");
            assert_eq!(first.goal_node, again.goal_node, "{name}: goal node");
            assert_eq!(first.graph, again.graph, "{name}: search graph");
        }
    }
}

#[test]
fn recorded_expansions_are_numbered_in_pop_order() {
    let start = fixture_board("walled_4x4.txt");
    let policy = SearchPolicyV1::default().recording_expansions();
    let result = search(start.clone(), &start.mirrored(), &BoardStateSpace, &policy).unwrap();

    let events = &result.graph.expansions;
    assert_eq!(events.len() as u64, result.graph.metadata.total_expansions);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.expansion_order, i as u64);
    }
    assert_eq!(events[0].node_id, 0, "the start node is expanded first");
    assert_eq!(events[0].g_cost, 0);
}

#[test]
fn report_bytes_and_digest_are_stable() {
    for name in FIXTURE_GRIDS {
        let a = run_board(fixture_board(name), &SearchPolicyV1::default()).unwrap();
        let b = run_board(fixture_board(name), &SearchPolicyV1::default()).unwrap();
        let bytes = a.report_bytes().unwrap();
        assert_eq!(bytes, b.report_bytes().unwrap(), "{name}");
        assert_eq!(a.report_digest().unwrap(), b.report_digest().unwrap(), "{name}");

        let reparsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            canonical_json_bytes(&reparsed).unwrap(),
            bytes,
            "{name}: report bytes must already be canonical"
        );
    }
}

#[test]
fn report_binds_board_fingerprints() {
    let outcome = run_board(fixture_board("mirror_line.txt"), &SearchPolicyV1::default()).unwrap();
    let report = outcome.report_json();
    assert_eq!(
        report["start"]["fingerprint"].as_str(),
        Some(outcome.start.fingerprint().as_str())
    );
    assert_eq!(
        report["target"]["fingerprint"].as_str(),
        Some(outcome.target.fingerprint().as_str())
    );
    assert_ne!(report["start"]["fingerprint"], report["target"]["fingerprint"]);
    assert_eq!(
        report["path"][3]["fingerprint"], report["target"]["fingerprint"],
        "fingerprints ignore the side to move"
    );
    assert_eq!(report["search_graph"]["metadata"]["space_id"], "peg_board");
}
