//! Indexed binary min-heap over open nodes.
//!
//! The heap stores [`NodeId`]s; ranks live on the nodes themselves in the
//! [`NodeRegistry`]. Every node in the heap records its current slot in
//! [`SearchNode::heap_slot`](crate::node::SearchNode::heap_slot), which is
//! what makes [`PriorityFrontier::remove_at`] O(log n). Every swap inside the
//! heap rewrites the slots of both nodes it touches.

use crate::error::SearchError;
use crate::node::{FrontierKey, NodeId};
use crate::registry::NodeRegistry;

/// Min-ordered frontier keyed by [`FrontierKey`].
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: Vec<NodeId>,
    next_push_order: u64,
    high_water: u64,
}

impl PriorityFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`, stamping it with a fresh push order and its heap slot.
    ///
    /// The node's `f_cost` must already be set.
    pub fn push<S>(&mut self, nodes: &mut NodeRegistry<S>, id: NodeId) {
        let slot = self.heap.len();
        {
            let node = nodes.get_mut(id);
            node.push_order = self.next_push_order;
            node.heap_slot = Some(slot);
        }
        self.next_push_order += 1;
        self.heap.push(id);
        self.sift_up(nodes, slot);
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the lowest-ranked node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if there is nothing to pop.
    pub fn pop_min<S>(&mut self, nodes: &mut NodeRegistry<S>) -> Result<NodeId, SearchError> {
        self.remove_slot(nodes, 0).ok_or(SearchError::EmptyFrontier)
    }

    /// Remove an arbitrary member, located through its stored slot.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NotInFrontier`] if `id` holds no slot, or its
    /// slot does not point back at it.
    pub fn remove_at<S>(
        &mut self,
        nodes: &mut NodeRegistry<S>,
        id: NodeId,
    ) -> Result<(), SearchError> {
        let not_in_frontier = SearchError::NotInFrontier {
            node_id: id.index(),
        };
        let Some(slot) = nodes.get(id).heap_slot else {
            return Err(not_in_frontier);
        };
        if self.heap.get(slot) != Some(&id) {
            return Err(not_in_frontier);
        }
        self.remove_slot(nodes, slot);
        Ok(())
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Check heap order and that every member's stored slot points back at it.
    #[must_use]
    pub fn is_consistent<S>(&self, nodes: &NodeRegistry<S>) -> bool {
        self.heap.iter().enumerate().all(|(slot, &id)| {
            let slot_ok = nodes.get(id).heap_slot == Some(slot);
            let order_ok = slot == 0 || key(nodes, self.heap[(slot - 1) / 2]) <= key(nodes, id);
            slot_ok && order_ok
        })
    }

    fn remove_slot<S>(&mut self, nodes: &mut NodeRegistry<S>, slot: usize) -> Option<NodeId> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(nodes, slot, last);
        let removed = self.heap.pop()?;
        nodes.get_mut(removed).heap_slot = None;
        if slot < self.heap.len() {
            let settled = self.sift_down(nodes, slot);
            self.sift_up(nodes, settled);
        }
        Some(removed)
    }

    fn sift_up<S>(&mut self, nodes: &mut NodeRegistry<S>, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if key(nodes, self.heap[slot]) >= key(nodes, self.heap[parent]) {
                break;
            }
            self.swap(nodes, slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down<S>(&mut self, nodes: &mut NodeRegistry<S>, mut slot: usize) -> usize {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len()
                && key(nodes, self.heap[left]) < key(nodes, self.heap[smallest])
            {
                smallest = left;
            }
            if right < self.heap.len()
                && key(nodes, self.heap[right]) < key(nodes, self.heap[smallest])
            {
                smallest = right;
            }
            if smallest == slot {
                return slot;
            }
            self.swap(nodes, slot, smallest);
            slot = smallest;
        }
    }

    fn swap<S>(&mut self, nodes: &mut NodeRegistry<S>, a: usize, b: usize) {
        self.heap.swap(a, b);
        nodes.get_mut(self.heap[a]).heap_slot = Some(a);
        nodes.get_mut(self.heap[b]).heap_slot = Some(b);
    }
}

fn key<S>(nodes: &NodeRegistry<S>, id: NodeId) -> FrontierKey {
    nodes.get(id).frontier_key()
}
