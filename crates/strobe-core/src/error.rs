//! Error types for the Strobe workspace.
//!
//! The taxonomy is deliberately narrow: step application is total
//! (malformed steps degrade to no-ops so navigation survives producer
//! bugs), so errors only arise where a caller hands the wrong shape of
//! input to a constructor or producer.

use crate::snapshot::SnapshotKind;
use std::error::Error;
use std::fmt;

/// Errors from invoking a [`StepProducer`](crate::traits::StepProducer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProduceError {
    /// The snapshot's domain does not match the producer's family
    /// (e.g. a grid snapshot handed to a sorting producer).
    SnapshotKind {
        /// Name of the producer that rejected the snapshot.
        producer: String,
        /// Domain the producer operates on.
        expected: SnapshotKind,
        /// Domain it was handed.
        found: SnapshotKind,
    },
}

impl fmt::Display for ProduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SnapshotKind {
                producer,
                expected,
                found,
            } => write!(
                f,
                "producer '{producer}' expects a {expected} snapshot, got {found}"
            ),
        }
    }
}

impl Error for ProduceError {}

/// Errors from grid snapshot construction and cell addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension was zero.
    ZeroSized {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A coordinate fell outside the grid.
    OutOfBounds {
        /// Offending row.
        row: u32,
        /// Offending column.
        col: u32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// The start and end cells coincide.
    StartEqualsEnd {
        /// The shared row.
        row: u32,
        /// The shared column.
        col: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSized { rows, cols } => {
                write!(f, "grid dimensions must be non-zero, got {rows}x{cols}")
            }
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row}, {col}) outside {rows}x{cols} grid"),
            Self::StartEqualsEnd { row, col } => {
                write!(f, "start and end both at ({row}, {col})")
            }
        }
    }
}

impl Error for GridError {}
