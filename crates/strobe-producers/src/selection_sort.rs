//! Selection sort producer.

use crate::expect_array;
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Selection sort: scan for the minimum of the unsorted suffix, swap
/// it into place.
///
/// Emits a single-position `Compare` marking the slot being filled, a
/// two-position `Compare` per scan step, another single-position
/// `Compare` whenever a new minimum is found, a `Swap` only when the
/// minimum is not already in place, and a `Sorted` per settled slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl StepProducer for SelectionSort {
    fn name(&self) -> &str {
        "selection_sort"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let arr = expect_array(self.name(), snapshot)?;
        let n = arr.len();
        if n == 0 {
            return Ok(());
        }

        for i in 0..n - 1 {
            let mut min_idx = i;

            recorder.record(
                Step::compare(&[i as u32])
                    .describe(format!("Looking for minimum value starting from index {i}")),
            );

            for j in i + 1..n {
                let min_val = arr.get(min_idx).unwrap_or_default();
                let candidate = arr.get(j).unwrap_or_default();
                recorder.record(
                    Step::compare(&[min_idx as u32, j as u32])
                        .describe(format!("Comparing minimum {min_val} with {candidate}")),
                );

                if candidate < min_val {
                    min_idx = j;
                    recorder.record(
                        Step::compare(&[min_idx as u32])
                            .describe(format!("New minimum found: {candidate}")),
                    );
                }
            }

            if min_idx != i {
                arr.swap(i, min_idx);
                let a = arr.get(i).unwrap_or_default();
                let b = arr.get(min_idx).unwrap_or_default();
                recorder.record(
                    Step::swap(i as u32, min_idx as u32)
                        .describe(format!("Swapping {a} with {b}")),
                );
            }

            let settled = arr.get(i).unwrap_or_default();
            recorder.record(Step::sorted(i as u32).describe(format!("{settled} is now sorted")));
        }

        recorder.record(Step::sorted((n - 1) as u32).describe("Last element is sorted"));
        Ok(())
    }
}
