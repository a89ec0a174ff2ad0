//! Search node, node identifiers, and the frontier ordering key.

/// Index of a node in its run's [`crate::registry::NodeRegistry`] arena.
///
/// Identifiers are dense and assigned in creation order, starting at 0 for
/// the start state. They are only meaningful within the run that made them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Membership of a node. Moves `Unvisited → Open → Closed`.
///
/// A closed node only returns to `Open` under
/// [`crate::policy::ClosePolicyV1::ReopenOnImprovement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    Unvisited,
    Open,
    Closed,
}

/// Per-state search bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Arena index of this node.
    pub node_id: NodeId,
    /// The interned state.
    pub state: S,
    /// Predecessor on the best known path (`None` for the start and for
    /// unvisited nodes).
    pub parent: Option<NodeId>,
    /// Cost of the best known path from the start; `None` means unreached.
    pub g_cost: Option<u64>,
    /// Heuristic estimate recorded when the node was last opened.
    pub h_cost: u64,
    /// `g_cost + h_cost`, the frontier rank. Meaningful once opened.
    pub f_cost: u64,
    pub status: NodeStatus,
    pub(crate) heap_slot: Option<usize>,
    pub(crate) push_order: u64,
}

impl<S> SearchNode<S> {
    pub(crate) fn unvisited(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            parent: None,
            g_cost: None,
            h_cost: 0,
            f_cost: 0,
            status: NodeStatus::Unvisited,
            heap_slot: None,
            push_order: 0,
        }
    }

    /// Current slot in the frontier heap; `None` unless the node is open.
    #[must_use]
    pub const fn heap_slot(&self) -> Option<usize> {
        self.heap_slot
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == NodeStatus::Open
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == NodeStatus::Closed
    }

    /// The key this node is ordered by in the frontier.
    #[must_use]
    pub const fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            f_cost: self.f_cost,
            push_order: self.push_order,
        }
    }
}

/// The frontier ordering key: `(f_cost, push_order)`.
///
/// Lower `f_cost` first; among equal ranks the node pushed earlier wins
/// (FIFO). A decrease-key re-push takes a fresh `push_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub push_order: u64,
}
