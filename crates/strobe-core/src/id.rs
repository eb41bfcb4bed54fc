//! Stable node identifiers for structural snapshots.

use std::fmt;

/// Opaque, stable identifier for a node in a chain or tree snapshot.
///
/// Ids are allocated from a per-snapshot monotonic counter
/// ([`ChainSnapshot::allocate_id`](crate::chain::ChainSnapshot::allocate_id),
/// [`TreeSnapshot::allocate_id`](crate::tree::TreeSnapshot::allocate_id)),
/// so a producer run over identical input allocates identical ids.
/// Within one trace every id is created by exactly one `Create` step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
