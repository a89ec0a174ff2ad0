//! Board module: cell tokens, sides, and the immutable board state.

pub mod cell;
pub mod state;
