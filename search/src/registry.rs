//! Node registry: interns states into an arena of [`SearchNode`]s.
//!
//! Nodes are addressed by [`NodeId`]; parent links are ids, never
//! references, so path reconstruction is an index walk. Nothing is ever
//! removed. The whole arena is dropped (or moved into the result) at the end
//! of a run.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{NodeId, SearchNode};

/// Arena of search nodes with a by-value index.
#[derive(Debug)]
pub struct NodeRegistry<S> {
    nodes: Vec<SearchNode<S>>,
    index: HashMap<S, NodeId>,
}

impl<S: Clone + Eq + Hash> NodeRegistry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Return the node for `state`, creating an unvisited one if needed.
    ///
    /// Exactly one node exists per distinct state value.
    pub fn get_or_create(&mut self, state: S) -> NodeId {
        if let Some(&id) = self.index.get(&state) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(state.clone(), id);
        self.nodes.push(SearchNode::unvisited(id, state));
        id
    }

    /// Look up an existing node without creating one.
    #[must_use]
    pub fn find(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }
}

impl<S> NodeRegistry<S> {
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }

    /// Consume the registry, keeping the arena in creation order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<SearchNode<S>> {
        self.nodes
    }
}

impl<S: Clone + Eq + Hash> Default for NodeRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
