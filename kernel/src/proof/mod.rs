//! Proof module: canonical hashing and canonical JSON.
//!
//! Depends on nothing internal. `board` depends on `proof::hash`.

pub mod canon;
pub mod hash;
