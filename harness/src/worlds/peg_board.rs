//! `BoardStateSpace`: the peg-swap puzzle as a searchable state space.
//!
//! Rules, applied to every piece of the side to move:
//!
//! - **Slide**: one step along a row or column onto an empty cell.
//! - **Jump**: two steps along a row or column, over an adjacent piece of
//!   either side, onto an empty cell. The jumped piece stays. Blocked cells
//!   and empty cells cannot be jumped over.
//!
//! Every move costs 1 and passes the turn. Move order is deterministic:
//! cells row-major, and per cell right, left, down, up, each as slide then
//! jump.
//!
//! Heuristic: each white piece's Manhattan distance to the top-left corner
//! plus each black piece's distance to the bottom-right corner.

use peg_kernel::board::cell::Cell;
use peg_kernel::board::state::{BoardState, Move, MoveKind};

use peg_search::contract::StateSpace;

/// Step directions as `(dr, dc)`: right, left, down, up.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Peg-swap world.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardStateSpace;

impl BoardStateSpace {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// All legal moves for the side to move, in generation order.
    ///
    /// A board with no side to move (a goal board) has no moves.
    #[must_use]
    pub fn legal_moves(&self, state: &BoardState) -> Vec<Move> {
        let Some(side) = state.to_move() else {
            return Vec::new();
        };
        let piece = side.piece();
        let size = state.size();
        let mut moves = Vec::new();
        for from in 0..size * size {
            if state.cells()[from] != piece {
                continue;
            }
            let (row, col) = state.coords(from);
            for (dr, dc) in DIRECTIONS {
                let Some((near, near_cell)) = state.offset_cell(row, col, dr, dc) else {
                    continue;
                };
                if near_cell == Cell::Empty {
                    moves.push(Move {
                        from,
                        to: near,
                        kind: MoveKind::Slide,
                    });
                } else if near_cell.is_piece() {
                    if let Some((far, Cell::Empty)) = state.offset_cell(row, col, 2 * dr, 2 * dc) {
                        moves.push(Move {
                            from,
                            to: far,
                            kind: MoveKind::Jump,
                        });
                    }
                }
            }
        }
        moves
    }

    /// True if `next` is reachable from `state` by one legal move.
    #[must_use]
    pub fn is_legal_step(&self, state: &BoardState, next: &BoardState) -> bool {
        self.legal_moves(state)
            .into_iter()
            .any(|mv| state.apply_move(mv) == *next)
    }

    /// Sum of corner distances over all pieces.
    #[must_use]
    pub fn corner_distance(state: &BoardState) -> u64 {
        let size = state.size();
        let mut total = 0usize;
        for (index, cell) in state.cells().iter().enumerate() {
            let Some(side) = cell.side() else {
                continue;
            };
            let (row, col) = state.coords(index);
            let (tr, tc) = side.target_corner(size);
            total += row.abs_diff(tr) + col.abs_diff(tc);
        }
        total as u64
    }
}

impl StateSpace for BoardStateSpace {
    type State = BoardState;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "peg_board"
    }

    fn neighbors(&self, state: &BoardState) -> Vec<(BoardState, u64)> {
        self.legal_moves(state)
            .into_iter()
            .map(|mv| (state.apply_move(mv), 1))
            .collect()
    }

    fn heuristic(&self, state: &BoardState, _target: &BoardState) -> u64 {
        Self::corner_distance(state)
    }

    /// Goal boards carry no side to move, so only tokens are compared.
    fn is_target(&self, state: &BoardState, target: &BoardState) -> bool {
        state.same_layout(target)
    }
}
