//! Quick sort producer.

use crate::expect_array;
use strobe_core::{ArraySnapshot, ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Quick sort with a single-pivot partition scheme.
///
/// The pivot is the first element of the current sub-range. Each
/// partition emits a `Pivot` marker, a three-position
/// `Compare [left, right, pivot]` per loop iteration, a `Swap` when
/// both probes are on the wrong side, the pivot-placement `Swap`, and
/// a `Sorted` at the settled position. After partition the smaller
/// side is recursed first — a bookkeeping optimization that is not
/// observable in the trace content.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl StepProducer for QuickSort {
    fn name(&self) -> &str {
        "quick_sort"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let arr = expect_array(self.name(), snapshot)?;
        if arr.is_empty() {
            return Ok(());
        }

        let mut values = arr.values().to_vec();
        let end = values.len() as isize - 1;
        sort(&mut values, 0, end, recorder);
        *arr = ArraySnapshot::new(values);
        Ok(())
    }
}

fn sort(values: &mut [i64], start: isize, end: isize, recorder: &mut TraceRecorder) {
    if start >= end {
        return;
    }

    let pivot = start;
    let mut left = start + 1;
    let mut right = end;

    recorder.record(
        Step::pivot(pivot as u32)
            .describe(format!("Pivot selected: {}", values[pivot as usize])),
    );

    while right >= left {
        recorder.record(
            Step::compare(&[left as u32, right as u32, pivot as u32])
                .describe("Comparing elements with pivot"),
        );

        if values[left as usize] > values[pivot as usize]
            && values[right as usize] < values[pivot as usize]
        {
            recorder.record(Step::swap(left as u32, right as u32).describe(format!(
                "Swapping {} and {}",
                values[left as usize], values[right as usize]
            )));
            values.swap(left as usize, right as usize);
        }

        if values[left as usize] <= values[pivot as usize] {
            left += 1;
        }
        if values[right as usize] >= values[pivot as usize] {
            right -= 1;
        }
    }

    recorder.record(
        Step::swap(pivot as u32, right as u32).describe("Moving pivot to correct position"),
    );
    values.swap(pivot as usize, right as usize);

    recorder.record(
        Step::sorted(right as u32)
            .describe(format!("{} is now in sorted position", values[right as usize])),
    );

    let left_is_smaller = (right - 1 - start) < (end - (right + 1));
    if left_is_smaller {
        sort(values, start, right - 1, recorder);
        sort(values, right + 1, end, recorder);
    } else {
        sort(values, right + 1, end, recorder);
        sort(values, start, right - 1, recorder);
    }
}
