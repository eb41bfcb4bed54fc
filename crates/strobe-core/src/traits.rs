//! The producer seam between algorithms and the replay engine.

use crate::error::ProduceError;
use crate::snapshot::Snapshot;
use crate::trace::TraceRecorder;

/// A pure algorithm implementation that turns an initial snapshot into
/// a step trace.
///
/// `run` receives a private working copy of the baseline snapshot and
/// may mutate it freely as scratch state while recording one step per
/// observable event; the engine discards the scratch copy and keeps
/// only the trace. A producer runs exactly once per trace and never
/// exposes partial execution — callers always see a complete,
/// materialized [`StepTrace`](crate::trace::StepTrace).
///
/// Producers must be deterministic: identical input snapshots (and
/// construction-time operation, for the structural producers) must
/// record traces of identical length with identical step shapes.
pub trait StepProducer {
    /// Name for diagnostics and error messages.
    fn name(&self) -> &str;

    /// Execute the algorithm against `snapshot`, recording steps.
    ///
    /// # Errors
    ///
    /// [`ProduceError::SnapshotKind`] when the snapshot's domain does
    /// not match this producer's family.
    fn run(&self, snapshot: &mut Snapshot, recorder: &mut TraceRecorder)
        -> Result<(), ProduceError>;
}
