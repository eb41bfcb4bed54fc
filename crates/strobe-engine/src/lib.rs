//! Replay engine and navigation session for Strobe step traces.
//!
//! The [`ReplayEngine`] holds a baseline snapshot, a materialized
//! trace, and a cursor; it reconstructs the domain snapshot at any
//! step index by forward replay from the baseline. The [`Session`] is
//! the per-visualization context that generates a trace from a
//! producer and forwards navigation commands.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod apply;
pub mod replay;
pub mod session;

pub use apply::apply_step;
pub use replay::ReplayEngine;
pub use session::{Session, SessionError};
