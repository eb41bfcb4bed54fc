//! Strobe: step-trace generation and replay for algorithm visualization.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Strobe sub-crates. For most users, adding `strobe` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strobe::prelude::*;
//!
//! // Sort an array, one observable step at a time.
//! let baseline = Snapshot::from(ArraySnapshot::new(vec![5, 3, 4, 1, 2]));
//! let mut session = Session::generate(&BubbleSort, baseline).unwrap();
//!
//! // Scrub anywhere in the trace; state is rebuilt from the baseline.
//! session.jump_to(session.trace_len() as isize - 1);
//! assert_eq!(
//!     session.snapshot().as_array().unwrap().values(),
//!     &[1, 2, 3, 4, 5]
//! );
//!
//! // And back again.
//! session.jump_to(-1);
//! assert_eq!(
//!     session.snapshot().as_array().unwrap().values(),
//!     &[5, 3, 4, 1, 2]
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strobe-core` | Steps, traces, snapshots, the producer trait |
//! | [`producers`] | `strobe-producers` | Sorting, pathfinding, chain, and tree producers |
//! | [`engine`] | `strobe-engine` | Step application, replay engine, sessions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Steps, traces, domain snapshots, and the producer trait
/// (`strobe-core`).
///
/// The data model everything else is built on: [`types::Step`],
/// [`types::StepTrace`], the four snapshot shapes behind
/// [`types::Snapshot`], and the [`types::StepProducer`] extension point.
pub use strobe_core as types;

/// The built-in step producers (`strobe-producers`).
///
/// Five sorting producers, three pathfinding producers, and the
/// [`producers::ChainProducer`]/[`producers::TreeProducer`] mutation
/// producers.
pub use strobe_producers as producers;

/// Step application, replay, and sessions (`strobe-engine`).
///
/// [`engine::ReplayEngine`] navigates a materialized trace;
/// [`engine::Session`] pairs trace generation with navigation.
pub use strobe_engine as engine;

/// Common imports for typical Strobe usage.
///
/// ```rust
/// use strobe::prelude::*;
/// ```
///
/// This imports the most frequently used types: the snapshot shapes,
/// steps and traces, every built-in producer, and the session and
/// replay types.
pub mod prelude {
    // Data model
    pub use strobe_core::{
        ArraySnapshot, ChainNode, ChainSnapshot, GridCell, GridSnapshot, NodeId, Snapshot,
        SnapshotKind, Step, StepKind, StepProducer, StepTrace, TraceRecorder, TreeSnapshot,
    };

    // Errors
    pub use strobe_core::{GridError, ProduceError};
    pub use strobe_engine::SessionError;

    // Producers
    pub use strobe_producers::{
        BreadthFirst, BubbleSort, ChainOp, ChainProducer, DepthFirst, Dijkstra, InsertionSort,
        MergeSort, QuickSort, SelectionSort, TreeOp, TreeProducer,
    };

    // Engine
    pub use strobe_engine::{apply_step, ReplayEngine, Session};
}
