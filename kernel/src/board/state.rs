//! `BoardState`: an immutable N×N token grid plus the side to move.
//!
//! # Layout
//!
//! Cells are flattened row-major: index `row * size + col`.
//!
//! # Equality semantics
//!
//! `BoardState` derives `Eq` and `Hash` over `(size, cells, to_move)`, so two
//! positions with identical tokens but different sides to move are distinct
//! search states. Goal comparison ignores the side to move and uses
//! [`BoardState::same_layout`] instead.

use crate::board::cell::{Cell, Side};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_BOARD_STATE};

/// Failure constructing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size must be at least 1.
    ZeroSize,
    /// `cells.len()` must equal `size * size`.
    CellCountMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "board size must be at least 1"),
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Whether a move steps to an adjacent cell or hops over one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Slide,
    Jump,
}

/// A single piece relocation, by flat cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub kind: MoveKind,
}

/// Immutable board position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    /// `None` on goal boards, where the side to move is not part of the goal.
    to_move: Option<Side>,
}

impl BoardState {
    /// Build a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `size` is zero or the cell count is not `size²`.
    pub fn new(size: usize, cells: Vec<Cell>, to_move: Option<Side>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            size,
            cells,
            to_move,
        })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub const fn to_move(&self) -> Option<Side> {
        self.to_move
    }

    /// Flat index of `(row, col)`. Callers must stay on the board.
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// `(row, col)` of a flat index.
    #[must_use]
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Cell at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Cell at `(row + dr, col + dc)`, or `None` off the board.
    #[must_use]
    pub fn offset_cell(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<(usize, Cell)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        let cell = self.cell(r, c)?;
        Some((self.index(r, c), cell))
    }

    /// Same board with the side to move replaced.
    #[must_use]
    pub fn with_side(&self, to_move: Option<Side>) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
            to_move,
        }
    }

    /// The goal board for this start: white and black swapped, blocked and
    /// empty cells unchanged, side to move undefined.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|c| c.mirrored()).collect(),
            to_move: None,
        }
    }

    /// Token equality, ignoring the side to move.
    #[must_use]
    pub fn same_layout(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }

    /// Successor after relocating the piece at `mv.from` to `mv.to`.
    ///
    /// The side to move flips. Legality is the caller's concern.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Self {
        let mut cells = self.cells.clone();
        cells[mv.to] = cells[mv.from];
        cells[mv.from] = Cell::Empty;
        Self {
            size: self.size,
            cells,
            to_move: self.to_move.map(Side::opposite),
        }
    }

    /// Recover the single-piece move that turns `self` into `next`.
    ///
    /// Returns `None` unless exactly one piece left one cell and landed on an
    /// empty cell one or two steps away along a row or column.
    #[must_use]
    pub fn diff_move(&self, next: &Self) -> Option<Move> {
        if self.size != next.size {
            return None;
        }
        let changed: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i] != next.cells[i])
            .collect();
        let [a, b] = changed.as_slice() else {
            return None;
        };
        let (from, to) = if next.cells[*a] == Cell::Empty {
            (*a, *b)
        } else {
            (*b, *a)
        };
        let piece = self.cells[from];
        if !piece.is_piece() || next.cells[from] != Cell::Empty {
            return None;
        }
        if self.cells[to] != Cell::Empty || next.cells[to] != piece {
            return None;
        }
        let (fr, fc) = self.coords(from);
        let (tr, tc) = self.coords(to);
        let distance = match (fr == tr, fc == tc) {
            (true, false) => fc.abs_diff(tc),
            (false, true) => fr.abs_diff(tr),
            _ => return None,
        };
        let kind = match distance {
            1 => MoveKind::Slide,
            2 => MoveKind::Jump,
            _ => return None,
        };
        Some(Move { from, to, kind })
    }

    /// Number of pieces of `side` on the board.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        let piece = side.piece();
        self.cells.iter().filter(|&&c| c == piece).count()
    }

    /// Layout bytes: `size` as LE u32, then one digit byte per cell.
    ///
    /// The side to move is excluded, so a goal board and any position with
    /// the same tokens share these bytes.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        // A board with more than u32::MAX cells per side cannot be allocated.
        let size = u32::try_from(self.size).unwrap_or(u32::MAX);
        let mut out = Vec::with_capacity(4 + self.cells.len());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend(self.cells.iter().map(|c| c.to_digit()));
        out
    }

    /// Canonical fingerprint of the layout.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(DOMAIN_BOARD_STATE, &self.identity_bytes())
    }

    /// Row strings of digits, e.g. `["210", "333", "333"]`.
    #[must_use]
    pub fn digit_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| char::from(b'0' + c.to_digit())).collect())
            .collect()
    }
}
