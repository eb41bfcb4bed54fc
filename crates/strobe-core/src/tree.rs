//! Binary-search-tree snapshot.
//!
//! The node map owns every node; `left`/`right` are non-owning
//! references by id. The root id is held outside any node: the owning
//! structure references its root, no node knows it is the root. Nodes
//! carry an `(x, y)` layout position in percent, used purely for
//! presentation.

use crate::id::NodeId;
use indexmap::IndexMap;

/// Horizontal root position, percent.
pub const ROOT_X: f32 = 50.0;
/// Vertical root position, percent.
pub const ROOT_Y: f32 = 10.0;
/// Vertical space per tree level, percent.
pub const LEVEL_HEIGHT: f32 = 15.0;
/// Initial horizontal span from the root, percent; halves per depth.
pub const INITIAL_SPAN: f32 = 25.0;

/// One tree node: a value, two non-owning child references, and a
/// layout position.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// The value stored at this node.
    pub value: i64,
    /// Left child id (`value < self.value`), or `None`.
    pub left: Option<NodeId>,
    /// Right child id (`value >= self.value`), or `None`.
    pub right: Option<NodeId>,
    /// Horizontal layout position, percent.
    pub x: f32,
    /// Vertical layout position, percent.
    pub y: f32,
}

impl TreeNode {
    /// A leaf node at the given layout position.
    pub fn leaf(value: i64, x: f32, y: f32) -> Self {
        Self {
            value,
            left: None,
            right: None,
            x,
            y,
        }
    }
}

/// A binary search tree keyed by opaque node id.
///
/// # Examples
///
/// ```
/// use strobe_core::tree::{TreeNode, TreeSnapshot, ROOT_X, ROOT_Y};
///
/// let mut tree = TreeSnapshot::new();
/// let id = tree.allocate_id();
/// tree.insert(id, TreeNode::leaf(5, ROOT_X, ROOT_Y));
/// assert_eq!(tree.root(), Some(id));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeSnapshot {
    nodes: IndexMap<NodeId, TreeNode>,
    root: Option<NodeId>,
    next_id: u64,
}

impl TreeSnapshot {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh node id from the monotonic counter.
    pub fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a node. The first node inserted into an empty tree
    /// becomes the root. Bumps the id counter past `id` so later
    /// allocations cannot collide with a replayed `Create`.
    pub fn insert(&mut self, id: NodeId, node: TreeNode) {
        self.next_id = self.next_id.max(id.0 + 1);
        self.nodes.insert(id, node);
        if self.root.is_none() {
            self.root = Some(id);
        }
    }

    /// The node with this id.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Mutable access to the node with this id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(&id)
    }

    /// The root node's id, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` for an empty tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Id of the node holding `value`, found by BST descent from the
    /// root (`<` left, else right).
    pub fn find_value(&self, value: i64) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.nodes.get(&id)?;
            if node.value == value {
                return Some(id);
            }
            cursor = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        None
    }
}
