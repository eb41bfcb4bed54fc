//! Cursor-based navigation over a materialized step trace.

use crate::apply::apply_step;
use strobe_core::{Snapshot, StepTrace};

/// Replays a [`StepTrace`] against a baseline snapshot.
///
/// The engine owns three things: the untouched baseline, the trace,
/// and a working snapshot that always equals the baseline with the
/// first `applied` steps folded in. The public cursor is the index of
/// the last applied step, so `-1` means "before the first step" and
/// `len - 1` means "after the last".
///
/// Steps are not invertible (a `Write` destroys the overwritten
/// value, a `Delete` destroys the node), so any backward movement is
/// a fresh clone of the baseline plus forward replay. Traces are
/// short enough that this stays comfortably interactive.
///
/// # Examples
///
/// ```
/// use strobe_core::{ArraySnapshot, Snapshot, Step, StepTrace};
/// use strobe_engine::ReplayEngine;
///
/// let baseline = Snapshot::from(ArraySnapshot::new(vec![2, 1]));
/// let trace = StepTrace::new(vec![Step::compare(&[0, 1]), Step::swap(0, 1)]);
/// let mut engine = ReplayEngine::new(baseline, trace);
///
/// assert_eq!(engine.current_index(), -1);
/// while engine.step_forward() {}
/// assert_eq!(engine.snapshot().as_array().unwrap().values(), &[1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct ReplayEngine {
    baseline: Snapshot,
    trace: StepTrace,
    working: Snapshot,
    /// Count of applied steps; `applied - 1` is the public cursor.
    applied: usize,
}

impl ReplayEngine {
    /// An engine positioned before the first step of `trace`.
    pub fn new(baseline: Snapshot, trace: StepTrace) -> Self {
        let working = baseline.clone();
        Self {
            baseline,
            trace,
            working,
            applied: 0,
        }
    }

    /// Apply the next step in place. Returns `false` at the end of the
    /// trace, leaving the state untouched.
    pub fn step_forward(&mut self) -> bool {
        match self.trace.get(self.applied) {
            Some(step) => {
                apply_step(&mut self.working, step);
                self.applied += 1;
                true
            }
            None => false,
        }
    }

    /// Move one step backward by replaying from the baseline. Returns
    /// `false` when already before the first step.
    pub fn step_back(&mut self) -> bool {
        if self.applied == 0 {
            return false;
        }
        self.jump_to(self.applied as isize - 2);
        true
    }

    /// Jump to an arbitrary step index, clamped to
    /// `-1..=trace_len - 1`. Always rebuilds from the baseline, so a
    /// jump to the current index is a (wasteful but) safe identity.
    pub fn jump_to(&mut self, index: isize) {
        let max = self.trace.len() as isize - 1;
        let target = index.clamp(-1, max);
        let count = (target + 1) as usize;

        self.working = self.baseline.clone();
        for step in self.trace.iter().take(count) {
            apply_step(&mut self.working, step);
        }
        self.applied = count;
    }

    /// Rewind to before the first step. For grid snapshots this also
    /// clears search state (visited, path, distances) while keeping
    /// walls, matching what a fresh run over the same board expects.
    pub fn reset(&mut self) {
        self.jump_to(-1);
        if let Some(grid) = self.working.as_grid_mut() {
            grid.clear_search_state();
        }
    }

    /// The working snapshot at the current cursor.
    pub fn snapshot(&self) -> &Snapshot {
        &self.working
    }

    /// Index of the last applied step, `-1` before the first.
    pub fn current_index(&self) -> isize {
        self.applied as isize - 1
    }

    /// The trace being replayed.
    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    /// Number of steps in the trace.
    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    /// The baseline snapshot the replay starts from.
    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// `true` when no step has been applied.
    pub fn at_start(&self) -> bool {
        self.applied == 0
    }

    /// `true` when every step has been applied. An empty trace is both
    /// at the start and at the end.
    pub fn at_end(&self) -> bool {
        self.applied == self.trace.len()
    }
}
