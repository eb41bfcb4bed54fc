//! Step producers for the Strobe replay engine.
//!
//! One producer per algorithm: five array sorts, three grid
//! pathfinders, and the two structural mutators (linked chain, binary
//! search tree). Each producer is a pure function from an initial
//! snapshot (plus a construction-time operation for the structural
//! producers) to a complete [`StepTrace`](strobe_core::StepTrace),
//! recorded eagerly through a
//! [`TraceRecorder`](strobe_core::TraceRecorder).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;
pub mod bubble_sort;
pub mod chain;
pub mod dfs;
pub mod dijkstra;
mod grid_helpers;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;
pub mod tree;

pub use bfs::BreadthFirst;
pub use bubble_sort::BubbleSort;
pub use chain::{ChainOp, ChainProducer};
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use insertion_sort::InsertionSort;
pub use merge_sort::MergeSort;
pub use quick_sort::QuickSort;
pub use selection_sort::SelectionSort;
pub use tree::{TreeOp, TreeProducer};

use strobe_core::{
    ArraySnapshot, ChainSnapshot, GridSnapshot, ProduceError, Snapshot, SnapshotKind,
    TreeSnapshot,
};

fn kind_mismatch(producer: &str, expected: SnapshotKind, snapshot: &Snapshot) -> ProduceError {
    ProduceError::SnapshotKind {
        producer: producer.to_string(),
        expected,
        found: snapshot.kind(),
    }
}

pub(crate) fn expect_array<'a>(
    name: &str,
    snapshot: &'a mut Snapshot,
) -> Result<&'a mut ArraySnapshot, ProduceError> {
    let err = kind_mismatch(name, SnapshotKind::Array, snapshot);
    snapshot.as_array_mut().ok_or(err)
}

pub(crate) fn expect_grid<'a>(
    name: &str,
    snapshot: &'a mut Snapshot,
) -> Result<&'a mut GridSnapshot, ProduceError> {
    let err = kind_mismatch(name, SnapshotKind::Grid, snapshot);
    snapshot.as_grid_mut().ok_or(err)
}

pub(crate) fn expect_chain<'a>(
    name: &str,
    snapshot: &'a mut Snapshot,
) -> Result<&'a mut ChainSnapshot, ProduceError> {
    let err = kind_mismatch(name, SnapshotKind::Chain, snapshot);
    snapshot.as_chain_mut().ok_or(err)
}

pub(crate) fn expect_tree<'a>(
    name: &str,
    snapshot: &'a mut Snapshot,
) -> Result<&'a mut TreeSnapshot, ProduceError> {
    let err = kind_mismatch(name, SnapshotKind::Tree, snapshot);
    snapshot.as_tree_mut().ok_or(err)
}
