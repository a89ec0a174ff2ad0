//! State spaces the runner can search.

pub mod peg_board;
