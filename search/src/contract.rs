//! Search domain contract trait.

use std::hash::Hash;

/// Trait for domains that can be searched.
///
/// # Contract
///
/// - `neighbors` is finite and deterministic: same state → same successors
///   in the same order. Duplicates are allowed; the engine deduplicates.
/// - `heuristic` never overestimates the remaining cost to `target` if the
///   caller wants optimal paths. It is a non-negative integer by type.
/// - `Eq`/`Hash` on `State` must agree with the domain's notion of "same
///   position": the registry interns states by value.
///
/// Panics raised by a domain propagate out of the search unchanged.
pub trait StateSpace {
    type State: Clone + Eq + Hash;

    /// Identifier recorded in the search graph metadata.
    fn space_id(&self) -> &str;

    /// Successor states with their edge costs.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::State, u64)>;

    /// Lower-bound estimate of the remaining cost from `state` to `target`.
    fn heuristic(&self, state: &Self::State, target: &Self::State) -> u64;

    /// Goal test. Domains override this when part of the state is not part
    /// of the goal.
    fn is_target(&self, state: &Self::State, target: &Self::State) -> bool {
        state == target
    }
}
