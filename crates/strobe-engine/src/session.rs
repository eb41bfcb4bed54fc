//! The per-visualization session: generate a trace, then navigate it.

use crate::replay::ReplayEngine;
use std::error::Error;
use std::fmt;
use strobe_core::{ProduceError, Snapshot, StepProducer, StepTrace, TraceRecorder};

/// Errors raised while generating a session.
#[derive(Debug)]
#[non_exhaustive]
pub enum SessionError {
    /// The producer rejected the baseline snapshot.
    Produce(ProduceError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Produce(err) => write!(f, "trace generation failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Produce(err) => Some(err),
        }
    }
}

impl From<ProduceError> for SessionError {
    fn from(err: ProduceError) -> Self {
        Self::Produce(err)
    }
}

/// One visualization action, from trace generation through navigation.
///
/// `generate` runs the producer against a private working clone of the
/// baseline, so the caller's snapshot is never mutated and the
/// resulting engine can always rebuild any intermediate state from the
/// untouched baseline.
///
/// # Examples
///
/// ```
/// use strobe_core::{ArraySnapshot, Snapshot};
/// use strobe_engine::Session;
/// use strobe_producers::BubbleSort;
///
/// let baseline = Snapshot::from(ArraySnapshot::new(vec![3, 1, 2]));
/// let mut session = Session::generate(&BubbleSort, baseline).unwrap();
/// session.jump_to(session.trace_len() as isize - 1);
/// assert_eq!(session.snapshot().as_array().unwrap().values(), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    producer: String,
    engine: ReplayEngine,
}

impl Session {
    /// Run `producer` against a clone of `baseline` and wrap the
    /// resulting trace in a replay engine positioned before the first
    /// step.
    pub fn generate(
        producer: &dyn StepProducer,
        baseline: Snapshot,
    ) -> Result<Self, SessionError> {
        let mut scratch = baseline.clone();
        let mut recorder = TraceRecorder::new();
        producer.run(&mut scratch, &mut recorder)?;
        Ok(Self {
            producer: producer.name().to_owned(),
            engine: ReplayEngine::new(baseline, recorder.finish()),
        })
    }

    /// Name of the producer that generated this session's trace.
    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// Advance one step; `false` at the end of the trace.
    pub fn next(&mut self) -> bool {
        self.engine.step_forward()
    }

    /// Retreat one step; `false` before the first step.
    pub fn prev(&mut self) -> bool {
        self.engine.step_back()
    }

    /// Jump to a step index, clamped to the valid range.
    pub fn jump_to(&mut self, index: isize) {
        self.engine.jump_to(index);
    }

    /// Rewind to the pre-trace state; see [`ReplayEngine::reset`].
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// `true` once every step has been applied.
    pub fn finished(&self) -> bool {
        self.engine.at_end()
    }

    /// The snapshot at the current cursor.
    pub fn snapshot(&self) -> &Snapshot {
        self.engine.snapshot()
    }

    /// Index of the last applied step, `-1` before the first.
    pub fn current_index(&self) -> isize {
        self.engine.current_index()
    }

    /// The generated trace.
    pub fn trace(&self) -> &StepTrace {
        self.engine.trace()
    }

    /// Number of steps in the generated trace.
    pub fn trace_len(&self) -> usize {
        self.engine.trace_len()
    }

    /// The underlying replay engine.
    pub fn engine(&self) -> &ReplayEngine {
        &self.engine
    }

    /// Consume the session, yielding the snapshot at the current
    /// cursor. Commits a finished mutation (chain or tree edit) as the
    /// next baseline.
    pub fn into_snapshot(self) -> Snapshot {
        self.engine.snapshot().clone()
    }
}
