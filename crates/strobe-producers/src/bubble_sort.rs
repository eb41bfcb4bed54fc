//! Bubble sort producer.

use crate::expect_array;
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Bubble sort: adjacent compare-and-swap passes, each pass settling
/// the largest remaining element at the back.
///
/// Emits a `Compare` before every comparison, a `Swap` for every
/// inversion, one `Sorted` per pass at the settled position, and a
/// final `Sorted` at position 0. An n-element array therefore emits
/// `n(n-1)/2` compares.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl StepProducer for BubbleSort {
    fn name(&self) -> &str {
        "bubble_sort"
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

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - i {
                let a = arr.get(j).unwrap_or_default();
                let b = arr.get(j + 1).unwrap_or_default();
                recorder.record(
                    Step::compare(&[j as u32, (j + 1) as u32])
                        .describe(format!("Comparing {a} and {b}")),
                );

                if a > b {
                    arr.swap(j, j + 1);
                    recorder.record(
                        Step::swap(j as u32, (j + 1) as u32)
                            .describe(format!("Swapping {a} and {b}")),
                    );
                }
            }

            let settled = arr.get(n - 1 - i).unwrap_or_default();
            recorder.record(
                Step::sorted((n - 1 - i) as u32)
                    .describe(format!("{settled} is now in its sorted position")),
            );
        }

        recorder.record(Step::sorted(0).describe("First element is sorted"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::{ArraySnapshot, StepKind};

    fn trace_for(values: &[i64]) -> strobe_core::StepTrace {
        let mut snapshot = Snapshot::from(ArraySnapshot::new(values.to_vec()));
        let mut rec = TraceRecorder::new();
        BubbleSort.run(&mut snapshot, &mut rec).unwrap();
        rec.finish()
    }

    #[test]
    fn scratch_copy_ends_sorted() {
        let mut snapshot = Snapshot::from(ArraySnapshot::new(vec![4, 2, 1, 3]));
        let mut rec = TraceRecorder::new();
        BubbleSort.run(&mut snapshot, &mut rec).unwrap();
        assert_eq!(snapshot.as_array().unwrap().values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn quadratic_compare_count() {
        // 4+3+2+1 compares for five elements.
        let trace = trace_for(&[5, 3, 4, 1, 2]);
        let compares = trace
            .iter()
            .filter(|s| s.kind == StepKind::Compare)
            .count();
        assert_eq!(compares, 10);
    }

    #[test]
    fn one_sorted_marker_per_position() {
        let trace = trace_for(&[3, 1, 2]);
        let sorted: Vec<u32> = trace
            .iter()
            .filter(|s| s.kind == StepKind::Sorted)
            .map(|s| s.positions[0])
            .collect();
        assert_eq!(sorted, vec![2, 1, 0]);
    }

    #[test]
    fn empty_array_yields_empty_trace() {
        assert!(trace_for(&[]).is_empty());
    }

    #[test]
    fn wrong_domain_is_rejected() {
        let mut snapshot = Snapshot::from(strobe_core::ChainSnapshot::new());
        let mut rec = TraceRecorder::new();
        assert!(BubbleSort.run(&mut snapshot, &mut rec).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_values() -> impl Strategy<Value = Vec<i64>> {
            prop::collection::vec(-1000i64..1000, 0..32)
        }

        proptest! {
            #[test]
            fn always_sorts(values in arb_values()) {
                let mut expected = values.clone();
                expected.sort_unstable();

                let mut snapshot = Snapshot::from(ArraySnapshot::new(values));
                let mut rec = TraceRecorder::new();
                BubbleSort.run(&mut snapshot, &mut rec).unwrap();
                prop_assert_eq!(
                    snapshot.as_array().unwrap().values(),
                    expected.as_slice()
                );
            }

            #[test]
            fn compare_count_is_quadratic(values in arb_values()) {
                let n = values.len();
                let mut snapshot = Snapshot::from(ArraySnapshot::new(values));
                let mut rec = TraceRecorder::new();
                BubbleSort.run(&mut snapshot, &mut rec).unwrap();
                let compares = rec
                    .finish()
                    .iter()
                    .filter(|s| s.kind == StepKind::Compare)
                    .count();
                prop_assert_eq!(compares, n.saturating_sub(1) * n / 2);
            }
        }
    }
}
