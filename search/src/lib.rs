//! Peg Search: deterministic A* over an implicitly defined state graph.
//!
//! This crate is generic over the state type. It depends only on
//! `peg_kernel` for canonical JSON and hashing of its audit record; it knows
//! nothing about boards.
//!
//! # Crate dependency graph
//!
//! ```text
//! peg_kernel  ←  peg_search  ←  peg_harness
//! (board, hash)   (A* engine)     (peg world, grid I/O, CLI)
//! ```
//!
//! # Key types
//!
//! - [`StateSpace`](contract::StateSpace): what a domain must provide to be searchable
//! - [`NodeRegistry`](registry::NodeRegistry): one arena node per distinct state
//! - [`PriorityFrontier`](frontier::PriorityFrontier): indexed min-heap with removal
//! - [`search`](search::search): the expansion loop
//! - [`SearchGraphV1`](graph::SearchGraphV1): counters and expansion log of one run

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod registry;
pub mod search;
