//! Peg harness: grid files in, solved paths and run reports out.
//!
//! The harness owns the peg-swap world and everything around the search
//! call (decoding, drawing, timing, reporting). It does not implement any
//! search logic itself; that lives in `peg_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod render;
pub mod runner;
pub mod worlds;
