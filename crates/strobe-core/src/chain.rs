//! Singly linked chain snapshot.
//!
//! The node map is the sole owner of every node; `next` is a
//! non-owning reference by id. Insertion order doubles as presentation
//! order, which is why the map is an [`IndexMap`]: chain steps carry
//! the node's list position for the presentation layer.

use crate::id::NodeId;
use indexmap::IndexMap;

/// One chain node: a value and a non-owning successor reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainNode {
    /// The value stored at this node.
    pub value: i64,
    /// Id of the successor node, or `None` at the tail.
    pub next: Option<NodeId>,
}

/// A singly linked chain keyed by opaque node id.
///
/// # Examples
///
/// ```
/// use strobe_core::ChainSnapshot;
///
/// let chain = ChainSnapshot::from_values(&[10, 20, 30]);
/// assert_eq!(chain.len(), 3);
/// assert_eq!(chain.values_in_order(), vec![10, 20, 30]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainSnapshot {
    nodes: IndexMap<NodeId, ChainNode>,
    next_id: u64,
}

impl ChainSnapshot {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain holding `values` in order, head first.
    pub fn from_values(values: &[i64]) -> Self {
        let mut chain = Self::new();
        let mut prev: Option<NodeId> = None;
        for &value in values {
            let id = chain.allocate_id();
            chain.insert(id, value);
            if let Some(prev_id) = prev {
                chain.set_next(prev_id, Some(id));
            }
            prev = Some(id);
        }
        chain
    }

    /// Allocate a fresh node id from the monotonic counter.
    pub fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a node with no successor. Bumps the id counter past `id`
    /// so later allocations on this snapshot cannot collide with a
    /// replayed `Create`.
    pub fn insert(&mut self, id: NodeId, value: i64) {
        self.next_id = self.next_id.max(id.0 + 1);
        self.nodes.insert(id, ChainNode { value, next: None });
    }

    /// Remove a node, preserving the order of the remaining nodes.
    /// Dangling `next` references to the removed node are left to the
    /// steps that own them. Unknown ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        self.nodes.shift_remove(&id);
    }

    /// Point `id`'s successor reference at `next`. Unknown ids are
    /// ignored.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.next = next;
        }
    }

    /// The node with this id.
    pub fn get(&self, id: NodeId) -> Option<&ChainNode> {
        self.nodes.get(&id)
    }

    /// The head node's id: the first node in presentation order.
    pub fn head(&self) -> Option<NodeId> {
        self.nodes.keys().next().copied()
    }

    /// A node's position in presentation order.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` for an empty chain.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ChainNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Values collected by walking `next` references from the head.
    pub fn values_in_order(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head();
        while let Some(id) = cursor {
            match self.nodes.get(&id) {
                Some(node) => {
                    values.push(node.value);
                    cursor = node.next;
                }
                None => break,
            }
        }
        values
    }
}
