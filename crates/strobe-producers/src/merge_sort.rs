//! Merge sort producer.

use crate::expect_array;
use strobe_core::{ArraySnapshot, ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Top-down merge sort over a main buffer and an auxiliary buffer
/// whose roles alternate across recursion levels.
///
/// Every merge emits a `Compare` over the two candidate positions and
/// resolves with a `Write` carrying the installed value explicitly —
/// merge overwrites through the auxiliary buffer rather than
/// exchanging two live positions, so a `Swap` step would have nothing
/// truthful to say.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl StepProducer for MergeSort {
    fn name(&self) -> &str {
        "merge_sort"
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

        let mut main = arr.values().to_vec();
        let mut aux = main.clone();
        sort(&mut main, &mut aux, 0, n - 1, recorder);
        *arr = ArraySnapshot::new(main);
        Ok(())
    }
}

/// Sort `main[start..=end]`, using `aux` as the read buffer for the
/// merge at this level. Recursion swaps the buffer roles so each level
/// reads the values its children wrote.
fn sort(
    main: &mut Vec<i64>,
    aux: &mut Vec<i64>,
    start: usize,
    end: usize,
    recorder: &mut TraceRecorder,
) {
    if start == end {
        return;
    }

    let middle = (start + end) / 2;
    sort(aux, main, start, middle, recorder);
    sort(aux, main, middle + 1, end, recorder);
    merge(main, aux, start, middle, end, recorder);
}

fn merge(
    main: &mut [i64],
    aux: &[i64],
    start: usize,
    middle: usize,
    end: usize,
    recorder: &mut TraceRecorder,
) {
    let mut k = start;
    let mut i = start;
    let mut j = middle + 1;

    while i <= middle && j <= end {
        recorder.record(
            Step::compare(&[i as u32, j as u32])
                .describe(format!("Comparing {} and {}", aux[i], aux[j])),
        );

        if aux[i] <= aux[j] {
            recorder.record(
                Step::write(k as u32, aux[i])
                    .describe(format!("Overwriting index {k} with {}", aux[i])),
            );
            main[k] = aux[i];
            i += 1;
        } else {
            recorder.record(
                Step::write(k as u32, aux[j])
                    .describe(format!("Overwriting index {k} with {}", aux[j])),
            );
            main[k] = aux[j];
            j += 1;
        }
        k += 1;
    }

    while i <= middle {
        recorder.record(
            Step::write(k as u32, aux[i])
                .describe(format!("Overwriting index {k} with remaining value {}", aux[i])),
        );
        main[k] = aux[i];
        i += 1;
        k += 1;
    }

    while j <= end {
        recorder.record(
            Step::write(k as u32, aux[j])
                .describe(format!("Overwriting index {k} with remaining value {}", aux[j])),
        );
        main[k] = aux[j];
        j += 1;
        k += 1;
    }
}
