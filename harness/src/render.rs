//! Text drawing of boards for the console.

use peg_kernel::board::cell::Cell;
use peg_kernel::board::state::BoardState;

const fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Black => '◎',
        Cell::White => '◉',
        Cell::Blocked => '✕',
    }
}

/// Draw `state` one row per line, e.g. `⎾◉⏉ ⏉◎⏋`.
#[must_use]
pub fn render_board(state: &BoardState) -> String {
    let mut out = String::new();
    for row in state.cells().chunks(state.size()) {
        for (col, &cell) in row.iter().enumerate() {
            out.push(if col == 0 { '⎾' } else { '⏉' });
            out.push(symbol(cell));
        }
        out.push_str("⏋\n");
    }
    out
}

/// Draw every board of a path, separated by blank lines.
#[must_use]
pub fn render_path(path: &[BoardState]) -> String {
    path.iter().map(render_board).collect::<Vec<_>>().join("\n")
}
