//! Runner: grid → start board → mirrored goal → search → outcome.
//!
//! # Pipeline
//!
//! ```text
//! load_grid() → BoardState (white to move)
//!   → mirrored() → target
//!   → search(start, target, BoardStateSpace, policy)
//!   → RunOutcome { start, target, result, elapsed }
//! ```
//!
//! The runner owns orchestration only. Move rules live in
//! [`BoardStateSpace`], the loop lives in `peg_search`.
//!
//! # Report
//!
//! [`RunOutcome::report_json`] is deterministic: two runs over the same
//! grid and policy produce byte-identical canonical JSON. Wall-clock time
//! is not part of it.

use std::path::Path;
use std::time::{Duration, Instant};

use peg_kernel::board::cell::Side;
use peg_kernel::board::state::{BoardState, MoveKind};
use peg_kernel::proof::canon::{canonical_json_bytes, CanonError};
use peg_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};

use peg_search::contract::StateSpace;
use peg_search::error::SearchError;
use peg_search::policy::SearchPolicyV1;
use peg_search::search::{search, SearchResult};

use crate::grid::{load_grid, InputDecodeError};
use crate::worlds::peg_board::BoardStateSpace;

/// Schema tag carried in every report.
pub const REPORT_SCHEMA_VERSION: &str = "peg_run_report.v1";

/// Error during a run.
#[derive(Debug)]
pub enum RunError {
    /// The grid could not be decoded.
    Decode(InputDecodeError),
    /// The search loop rejected its inputs or lost consistency.
    Search(SearchError),
    /// Report serialization failed.
    Canon { detail: String },
    /// The report file could not be written.
    Io { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "grid decode error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon { .. } | Self::Io { .. } => None,
        }
    }
}

impl From<InputDecodeError> for RunError {
    fn from(e: InputDecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon {
            detail: e.to_string(),
        }
    }
}

/// Everything one run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub start: BoardState,
    pub target: BoardState,
    pub result: SearchResult<BoardState>,
    /// Wall-clock time spent inside `search`.
    pub elapsed: Duration,
}

/// Load `path` and search for its mirrored goal.
///
/// # Errors
///
/// Returns [`RunError::Decode`] before any search if the grid is malformed,
/// and [`RunError::Search`] if the search itself fails.
pub fn run_grid(path: &Path, policy: &SearchPolicyV1) -> Result<RunOutcome, RunError> {
    let start = load_grid(path)?;
    run_board(start, policy)
}

/// Search from `start` to its mirrored goal.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search fails.
pub fn run_board(start: BoardState, policy: &SearchPolicyV1) -> Result<RunOutcome, RunError> {
    let target = start.mirrored();
    let space = BoardStateSpace::new();
    let clock = Instant::now();
    let result = search(start.clone(), &target, &space, policy)?;
    let elapsed = clock.elapsed();
    Ok(RunOutcome {
        start,
        target,
        result,
        elapsed,
    })
}

impl RunOutcome {
    /// Number of states on the path, start and target included.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.result.path.len()
    }

    /// Counter lines the CLI prints: nodes still open, nodes expanded, and
    /// either the path cost or why no path was found.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let meta = &self.result.graph.metadata;
        let last = if self.result.found {
            format!("Len: {}", self.result.cost)
        } else {
            format!("no path found ({})", meta.termination_reason.as_str())
        };
        vec![
            format!("Opened: {}", meta.frontier_remaining),
            format!("Expanded: {}", meta.total_expansions),
            last,
        ]
    }

    /// Structured report of the run, without wall-clock time.
    #[must_use]
    pub fn report_json(&self) -> serde_json::Value {
        let path: Vec<serde_json::Value> = self.result.path.iter().map(board_to_json).collect();
        let moves: Vec<serde_json::Value> = self
            .result
            .path
            .windows(2)
            .filter_map(|pair| move_to_json(&pair[0], &pair[1]))
            .collect();
        serde_json::json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "space_id": BoardStateSpace.space_id(),
            "start": board_to_json(&self.start),
            "target": board_to_json(&self.target),
            "found": self.result.found,
            "cost": self.result.cost,
            "path": path,
            "moves": moves,
            "search_graph": self.result.graph.to_json_value(),
        })
    }

    /// Canonical JSON bytes of [`Self::report_json`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if serialization fails.
    pub fn report_bytes(&self) -> Result<Vec<u8>, RunError> {
        Ok(canonical_json_bytes(&self.report_json())?)
    }

    /// Digest of the canonical report.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if serialization fails.
    pub fn report_digest(&self) -> Result<ContentHash, RunError> {
        let bytes = self.report_bytes()?;
        Ok(canonical_hash(DOMAIN_RUN_REPORT, &bytes))
    }

    /// Write the canonical report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Canon`] if serialization fails and
    /// [`RunError::Io`] if the file cannot be written.
    pub fn write_report(&self, path: &Path) -> Result<(), RunError> {
        let bytes = self.report_bytes()?;
        std::fs::write(path, bytes).map_err(|e| RunError::Io {
            detail: format!("{}: {e}", path.display()),
        })
    }
}

fn board_to_json(board: &BoardState) -> serde_json::Value {
    serde_json::json!({
        "fingerprint": board.fingerprint().as_str(),
        "identity_hex": hex::encode(board.identity_bytes()),
        "rows": board.digit_rows(),
        "to_move": board.to_move().map(Side::label),
    })
}

fn move_to_json(before: &BoardState, after: &BoardState) -> Option<serde_json::Value> {
    let mv = before.diff_move(after)?;
    let (fr, fc) = before.coords(mv.from);
    let (tr, tc) = before.coords(mv.to);
    let kind = match mv.kind {
        MoveKind::Slide => "slide",
        MoveKind::Jump => "jump",
    };
    Some(serde_json::json!({
        "from": [fr, fc],
        "kind": kind,
        "side": before.to_move().map(Side::label),
        "to": [tr, tc],
    }))
}
