//! Grid files through the runner.
//!
//! Proves:
//! 1. Every committed fixture decodes and re-encodes to itself
//! 2. A written grid file runs to the same outcome as the in-memory board
//! 3. Malformed files fail at decode time, before any search

use lock_tests::fixtures::{fixture_board, fixture_path, FIXTURE_GRIDS};
use peg_harness::grid::{decode_grid, encode_grid, InputDecodeError};
use peg_harness::runner::{run_board, run_grid, RunError};
use peg_kernel::board::cell::Side;
use peg_search::policy::SearchPolicyV1;

#[test]
fn fixtures_round_trip_through_the_encoder() {
    for name in FIXTURE_GRIDS {
        let text = std::fs::read_to_string(fixture_path(name)).unwrap();
        let board = decode_grid(&text).unwrap();
        assert_eq!(board.to_move(), Some(Side::White), "{name}: white starts");
        assert_eq!(encode_grid(&board), text, "{name}");
    }
}

#[test]
fn file_and_memory_runs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.txt");
    let board = fixture_board("open_corners.txt");
    std::fs::write(&path, encode_grid(&board)).unwrap();

    let from_file = run_grid(&path, &SearchPolicyV1::default()).unwrap();
    let from_memory = run_board(board, &SearchPolicyV1::default()).unwrap();
    assert_eq!(from_file.result.path, from_memory.result.path);
    assert_eq!(
        from_file.report_digest().unwrap(),
        from_memory.report_digest().unwrap()
    );
}

#[test]
fn malformed_files_fail_before_search() {
    let dir = tempfile::tempdir().unwrap();
    let cases: &[(&str, fn(&InputDecodeError) -> bool)] = &[
        ("", |e| matches!(e, InputDecodeError::Empty)),
        ("three\n2 0 1", |e| matches!(e, InputDecodeError::InvalidSize { .. })),
        ("2\n2 0\n0 9", |e| {
            matches!(e, InputDecodeError::InvalidToken { index: 4, .. })
        }),
        ("2\n2 0\n0", |e| {
            matches!(
                e,
                InputDecodeError::CellCountMismatch {
                    expected: 4,
                    found: 3
                }
            )
        }),
    ];
    for (i, (text, is_expected)) in cases.iter().enumerate() {
        let path = dir.path().join(format!("bad_{i}.txt"));
        std::fs::write(&path, text).unwrap();
        match run_grid(&path, &SearchPolicyV1::default()) {
            Err(RunError::Decode(e)) => assert!(is_expected(&e), "case {i}: unexpected {e:?}"),
            other => panic!("case {i}: expected a decode error, got {other:?}"),
        }
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_grid(&dir.path().join("absent.txt"), &SearchPolicyV1::default()).unwrap_err();
    assert!(
        matches!(err, RunError::Decode(InputDecodeError::Io { .. })),
        "got {err:?}"
    );
}
