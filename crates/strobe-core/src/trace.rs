//! The materialized step trace and its eager builder.

use crate::step::Step;
use std::ops::Index;

/// The complete, ordered, immutable sequence of steps produced by one
/// producer invocation.
///
/// A trace is finite and fully materialized before any navigation is
/// possible; no component appends to it after
/// [`TraceRecorder::finish`]. Identical inputs to a deterministic
/// producer yield an identical trace.
///
/// # Examples
///
/// ```
/// use strobe_core::{Step, TraceRecorder};
///
/// let mut rec = TraceRecorder::new();
/// rec.record(Step::compare(&[0, 1]));
/// rec.record(Step::swap(0, 1));
/// let trace = rec.finish();
/// assert_eq!(trace.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    /// A trace over the given steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when the producer found nothing to do (valid terminal
    /// state, not an error).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The steps as a slice.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Shape equality ignoring narration; see [`Step::same_shape`].
    pub fn same_shape(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.same_shape(b))
    }
}

impl Index<usize> for StepTrace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Eager trace builder, passed by `&mut` through producer logic.
///
/// Replaces suspendable-generator control flow: the recorder is
/// exclusively owned by the top-level producer invocation for the
/// duration of one call (threading through recursive helpers for the
/// divide-and-conquer sorts) and is consumed into the immutable
/// [`StepTrace`].
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step.
    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the recording into an immutable trace.
    pub fn finish(self) -> StepTrace {
        StepTrace { steps: self.steps }
    }
}
