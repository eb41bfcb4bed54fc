//! Core types for the Strobe step-trace replay engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Strobe workspace:
//! node identifiers, the atomic [`Step`] record, the immutable
//! [`StepTrace`] and its [`TraceRecorder`] builder, the four domain
//! [`Snapshot`] shapes, error types, and the [`StepProducer`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod error;
pub mod grid;
pub mod id;
pub mod snapshot;
pub mod step;
pub mod trace;
pub mod traits;
pub mod tree;

pub use chain::{ChainNode, ChainSnapshot};
pub use error::{GridError, ProduceError};
pub use grid::{GridCell, GridSnapshot};
pub use id::NodeId;
pub use snapshot::{ArraySnapshot, Snapshot, SnapshotKind};
pub use step::{Step, StepKind};
pub use trace::{StepTrace, TraceRecorder};
pub use traits::StepProducer;
pub use tree::{TreeNode, TreeSnapshot};
