//! Grid file decoding.
//!
//! # Format
//!
//! ```text
//! 3
//! 2 0 1
//! 3 3 3
//! 3 3 3
//! ```
//!
//! Tokens are separated by whitespace or commas. The first token is the
//! board size N. Every following token is a run of cell digits (`0` empty,
//! `1` black, `2` white, `3` blocked), so `2 0 1` and `201` decode the same
//! row. Exactly N² digits must follow. White moves first.
//!
//! Any failure here happens before a search starts.

use std::path::Path;

use peg_kernel::board::cell::{Cell, Side};
use peg_kernel::board::state::{BoardError, BoardState};

/// Error decoding a grid file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDecodeError {
    /// The file could not be read.
    Io { detail: String },
    /// No tokens at all.
    Empty,
    /// The size token is not a positive integer.
    InvalidSize { token: String },
    /// A cell token holds something other than the digits `0..=3`.
    /// `index` is the token's position, counting the size token as 0.
    InvalidToken { index: usize, token: String },
    /// The number of cell digits is not N².
    CellCountMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for InputDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Empty => write!(f, "grid is empty"),
            Self::InvalidSize { token } => write!(f, "invalid board size: {token:?}"),
            Self::InvalidToken { index, token } => {
                write!(f, "invalid cell token {token:?} at position {index}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for InputDecodeError {}

/// Decode grid text into a start board with White to move.
///
/// # Errors
///
/// Returns [`InputDecodeError`] on any malformed input.
pub fn decode_grid(text: &str) -> Result<BoardState, InputDecodeError> {
    let mut tokens = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let size_token = tokens.next().ok_or(InputDecodeError::Empty)?;
    let size = match size_token.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(InputDecodeError::InvalidSize {
                token: size_token.to_string(),
            })
        }
    };
    let expected = size.checked_mul(size).ok_or_else(|| InputDecodeError::InvalidSize {
        token: size_token.to_string(),
    })?;

    // The size token is untrusted; never reserve more than the text can hold.
    let mut cells = Vec::with_capacity(expected.min(text.len()));
    for (offset, token) in tokens.enumerate() {
        for ch in token.chars() {
            let cell = ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Cell::from_digit)
                .ok_or_else(|| InputDecodeError::InvalidToken {
                    index: offset + 1,
                    token: token.to_string(),
                })?;
            cells.push(cell);
        }
    }
    if cells.len() != expected {
        return Err(InputDecodeError::CellCountMismatch {
            expected,
            found: cells.len(),
        });
    }

    BoardState::new(size, cells, Some(Side::White)).map_err(|e| match e {
        BoardError::ZeroSize => InputDecodeError::InvalidSize {
            token: size_token.to_string(),
        },
        BoardError::CellCountMismatch { expected, found } => {
            InputDecodeError::CellCountMismatch { expected, found }
        }
    })
}

/// Read and decode a grid file.
///
/// # Errors
///
/// Returns [`InputDecodeError::Io`] if the file cannot be read, otherwise
/// whatever [`decode_grid`] returns.
pub fn load_grid(path: &Path) -> Result<BoardState, InputDecodeError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputDecodeError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    decode_grid(&text)
}

/// Encode a board back into the grid format, one row per line.
#[must_use]
pub fn encode_grid(state: &BoardState) -> String {
    let mut out = format!("{}\n", state.size());
    for row in state.digit_rows() {
        let spaced: Vec<String> = row.chars().map(String::from).collect();
        out.push_str(&spaced.join(" "));
        out.push('\n');
    }
    out
}
