//! The four domain snapshot shapes and the [`Snapshot`] sum type.
//!
//! A snapshot's *baseline* instance is created once per visualization
//! action and never mutated in place: the replay engine always derives
//! a fresh working clone before applying steps, so the baseline stays
//! available for repeated jumps.

use crate::chain::ChainSnapshot;
use crate::grid::GridSnapshot;
use crate::tree::TreeSnapshot;
use std::fmt;

/// Discriminant naming a snapshot's domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapshotKind {
    /// Ordered numeric values of fixed length.
    Array,
    /// Fixed-size 2D cell grid with start/end cells.
    Grid,
    /// Singly linked chain keyed by node id.
    Chain,
    /// Binary search tree keyed by node id.
    Tree,
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Array => "array",
            Self::Grid => "grid",
            Self::Chain => "chain",
            Self::Tree => "tree",
        };
        f.write_str(name)
    }
}

/// An ordered sequence of numeric values.
///
/// Length is fixed for the lifetime of one trace; only element values
/// change under replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArraySnapshot {
    values: Vec<i64>,
}

impl ArraySnapshot {
    /// Wrap the given values.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// The values in order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` for a zero-length array.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Exchange the values at `i` and `j`. Out-of-range positions are
    /// ignored (defensive no-op policy).
    pub fn swap(&mut self, i: usize, j: usize) {
        if i < self.values.len() && j < self.values.len() {
            self.values.swap(i, j);
        }
    }

    /// Overwrite the value at `index`. Out-of-range positions are ignored.
    pub fn set(&mut self, index: usize, value: i64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }
}

/// One of the four domain data shapes steps are applied to.
///
/// # Examples
///
/// ```
/// use strobe_core::{ArraySnapshot, Snapshot, SnapshotKind};
///
/// let snapshot = Snapshot::from(ArraySnapshot::new(vec![3, 1, 2]));
/// assert_eq!(snapshot.kind(), SnapshotKind::Array);
/// assert_eq!(snapshot.as_array().unwrap().values(), &[3, 1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Snapshot {
    /// Array-sort domain.
    Array(ArraySnapshot),
    /// Grid-pathfinding domain.
    Grid(GridSnapshot),
    /// Linked-chain domain.
    Chain(ChainSnapshot),
    /// Binary-search-tree domain.
    Tree(TreeSnapshot),
}

impl Snapshot {
    /// This snapshot's domain.
    pub fn kind(&self) -> SnapshotKind {
        match self {
            Self::Array(_) => SnapshotKind::Array,
            Self::Grid(_) => SnapshotKind::Grid,
            Self::Chain(_) => SnapshotKind::Chain,
            Self::Tree(_) => SnapshotKind::Tree,
        }
    }

    /// Borrow as an array snapshot.
    pub fn as_array(&self) -> Option<&ArraySnapshot> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutably borrow as an array snapshot.
    pub fn as_array_mut(&mut self) -> Option<&mut ArraySnapshot> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Borrow as a grid snapshot.
    pub fn as_grid(&self) -> Option<&GridSnapshot> {
        match self {
            Self::Grid(g) => Some(g),
            _ => None,
        }
    }

    /// Mutably borrow as a grid snapshot.
    pub fn as_grid_mut(&mut self) -> Option<&mut GridSnapshot> {
        match self {
            Self::Grid(g) => Some(g),
            _ => None,
        }
    }

    /// Borrow as a chain snapshot.
    pub fn as_chain(&self) -> Option<&ChainSnapshot> {
        match self {
            Self::Chain(c) => Some(c),
            _ => None,
        }
    }

    /// Mutably borrow as a chain snapshot.
    pub fn as_chain_mut(&mut self) -> Option<&mut ChainSnapshot> {
        match self {
            Self::Chain(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow as a tree snapshot.
    pub fn as_tree(&self) -> Option<&TreeSnapshot> {
        match self {
            Self::Tree(t) => Some(t),
            _ => None,
        }
    }

    /// Mutably borrow as a tree snapshot.
    pub fn as_tree_mut(&mut self) -> Option<&mut TreeSnapshot> {
        match self {
            Self::Tree(t) => Some(t),
            _ => None,
        }
    }
}

impl From<ArraySnapshot> for Snapshot {
    fn from(a: ArraySnapshot) -> Self {
        Self::Array(a)
    }
}

impl From<GridSnapshot> for Snapshot {
    fn from(g: GridSnapshot) -> Self {
        Self::Grid(g)
    }
}

impl From<ChainSnapshot> for Snapshot {
    fn from(c: ChainSnapshot) -> Self {
        Self::Chain(c)
    }
}

impl From<TreeSnapshot> for Snapshot {
    fn from(t: TreeSnapshot) -> Self {
        Self::Tree(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_swap_and_set() {
        let mut arr = ArraySnapshot::new(vec![1, 2, 3]);
        arr.swap(0, 2);
        assert_eq!(arr.values(), &[3, 2, 1]);
        arr.set(1, 9);
        assert_eq!(arr.values(), &[3, 9, 1]);
    }

    #[test]
    fn array_out_of_range_mutations_ignored() {
        let mut arr = ArraySnapshot::new(vec![1, 2]);
        arr.swap(0, 5);
        arr.set(9, 7);
        assert_eq!(arr.values(), &[1, 2]);
    }

    #[test]
    fn kind_matches_variant() {
        let snapshot: Snapshot = ArraySnapshot::new(vec![]).into();
        assert_eq!(snapshot.kind(), SnapshotKind::Array);
        assert!(snapshot.as_grid().is_none());
    }
}
