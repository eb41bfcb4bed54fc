//! Insertion sort producer.

use crate::expect_array;
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Insertion sort: grow a sorted prefix by shifting each key left into
/// position.
///
/// Shifts are emitted as `Write` steps (the key is held out of the
/// array while elements slide right), so replay never needs a `Swap`.
/// The trace opens with a `Sorted` at position 0 and closes with a
/// full sweep of `Sorted` markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl StepProducer for InsertionSort {
    fn name(&self) -> &str {
        "insertion_sort"
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

        recorder.record(Step::sorted(0).describe("First element is considered sorted"));

        for i in 1..n {
            let key = arr.get(i).unwrap_or_default();
            let mut j = i as isize - 1;

            recorder.record(
                Step::compare(&[i as u32])
                    .describe(format!("Selected {key} to insert into sorted portion")),
            );

            while j >= 0 && arr.get(j as usize).unwrap_or_default() > key {
                let shifted = arr.get(j as usize).unwrap_or_default();
                recorder.record(
                    Step::compare(&[j as u32, (j + 1) as u32])
                        .describe(format!("Comparing {key} with {shifted}")),
                );

                arr.set((j + 1) as usize, shifted);
                recorder.record(
                    Step::write((j + 1) as u32, shifted)
                        .describe(format!("Moving {shifted} forward")),
                );

                j -= 1;
            }

            arr.set((j + 1) as usize, key);
            recorder.record(
                Step::write((j + 1) as u32, key)
                    .describe(format!("Inserted {key} at position {}", j + 1)),
            );

            recorder.record(
                Step::sorted(i as u32).describe(format!("Sorted portion extended to index {i}")),
            );
        }

        for k in 0..n {
            recorder.record(Step::sorted(k as u32).describe("Sorted"));
        }
        Ok(())
    }
}
