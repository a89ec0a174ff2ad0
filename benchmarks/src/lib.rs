//! Shared helpers for peg benchmark suites.
//!
//! A [`Regime`] is a start board plus a policy chosen to stress one part of
//! the engine: deep single-lane paths, dead ends, budget cut-offs, or a wide
//! frontier.

use peg_harness::grid::decode_grid;
use peg_harness::runner::{run_board, RunOutcome};
use peg_harness::worlds::peg_board::BoardStateSpace;
use peg_kernel::board::state::BoardState;
use peg_search::policy::SearchPolicyV1;
use peg_search::search::{search, SearchResult};

/// A benchmark input.
pub struct Regime {
    pub name: &'static str,
    pub start: BoardState,
    pub policy: SearchPolicyV1,
}

fn board(text: &str) -> BoardState {
    decode_grid(text).unwrap_or_else(|e| panic!("benchmark grid is malformed: {e}"))
}

/// Single walled row: three forced moves, tiny frontier.
#[must_use]
pub fn regime_mirror_line() -> Regime {
    Regime {
        name: "mirror_line",
        start: board("3\n2 0 1\n3 3 3\n3 3 3"),
        policy: SearchPolicyV1::default(),
    }
}

/// The side to move has no legal move: one expansion, then exhaustion.
#[must_use]
pub fn regime_dead_end() -> Regime {
    Regime {
        name: "dead_end",
        start: board("3\n1 3 0\n3 2 3\n0 3 0"),
        policy: SearchPolicyV1::default(),
    }
}

/// Two pieces per side on a walled 4×4 board, run to completion.
#[must_use]
pub fn regime_walled_4x4() -> Regime {
    Regime {
        name: "walled_4x4",
        start: board("4\n2 2 0 0\n0 3 0 0\n0 0 3 1\n0 0 0 1"),
        policy: SearchPolicyV1::default(),
    }
}

/// Three pieces per side on an open 5×5 board, cut off by budget.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    Regime {
        name: "budget_limited",
        start: board("5\n2 2 0 0 0\n2 0 0 0 0\n0 0 0 0 0\n0 0 0 0 1\n0 0 0 1 1"),
        policy: SearchPolicyV1::default().with_max_expansions(2_000),
    }
}

/// Many pieces with many jumps: wide branching keeps the frontier large.
#[must_use]
pub fn regime_frontier_pressure() -> Regime {
    Regime {
        name: "frontier_pressure",
        start: board("5\n2 2 2 0 0\n2 2 0 0 0\n2 0 0 0 1\n0 0 0 1 1\n0 0 1 1 1"),
        policy: SearchPolicyV1::default().with_max_expansions(5_000),
    }
}

/// Every regime, in report order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_mirror_line(),
        regime_dead_end(),
        regime_walled_4x4(),
        regime_budget_limited(),
        regime_frontier_pressure(),
    ]
}

/// Engine only: mirror the start and call `search()` directly.
///
/// # Panics
///
/// Panics if the search returns an error. Benchmark failures are fatal.
#[must_use]
pub fn run_search_only(regime: &Regime) -> SearchResult<BoardState> {
    let target = regime.start.mirrored();
    search(regime.start.clone(), &target, &BoardStateSpace, &regime.policy)
        .unwrap_or_else(|e| panic!("{}: search failed: {e}", regime.name))
}

/// Full runner path including canonical report serialization.
///
/// # Panics
///
/// Panics if the run or the report fails. Benchmark failures are fatal.
#[must_use]
pub fn run_end_to_end(regime: &Regime) -> (RunOutcome, Vec<u8>) {
    let outcome = run_board(regime.start.clone(), &regime.policy)
        .unwrap_or_else(|e| panic!("{}: run failed: {e}", regime.name));
    let bytes = outcome
        .report_bytes()
        .unwrap_or_else(|e| panic!("{}: report failed: {e}", regime.name));
    (outcome, bytes)
}

/// Canonical JSON of the search graph metadata, for attaching to reports.
#[must_use]
pub fn graph_metadata_json(result: &SearchResult<BoardState>) -> serde_json::Value {
    result.graph.to_json_value()["metadata"].clone()
}
