//! Peg Kernel: the deterministic board carrier for the peg-swap puzzle.
//!
//! # API Surface
//!
//! - [`board::state::BoardState`] -- immutable N×N token grid plus side to move
//! - [`board::cell::Cell`] / [`board::cell::Side`] -- cell tokens and the two sides
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 fingerprints
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON encoder
//!
//! # Module Dependency Direction
//!
//! `board` ← `proof`
//!
//! `board` uses `proof::hash` for fingerprints; `proof` depends on nothing
//! internal. The kernel has no notion of search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod proof;
