//! Determinism and replay-equivalence properties.
//!
//! Each property: run a producer against a baseline, replay the trace
//! through the engine, and compare the replayed snapshot against an
//! independently computed expectation. Producers are pure functions of
//! the baseline, so a second run must also yield a shape-identical
//! trace.

use proptest::prelude::*;
use strobe_core::{ArraySnapshot, ChainSnapshot, Snapshot, StepProducer, TraceRecorder};
use strobe_engine::Session;
use strobe_producers::{
    BubbleSort, ChainOp, ChainProducer, InsertionSort, MergeSort, QuickSort, SelectionSort,
    TreeOp, TreeProducer,
};

fn arb_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 0..24)
}

fn arb_chain_ops() -> impl Strategy<Value = Vec<ChainOp>> {
    prop::collection::vec(
        prop_oneof![
            (-20i64..20).prop_map(ChainOp::Append),
            (-20i64..20).prop_map(ChainOp::Delete),
        ],
        0..12,
    )
}

fn sorters() -> Vec<Box<dyn StepProducer>> {
    vec![
        Box::new(BubbleSort),
        Box::new(SelectionSort),
        Box::new(InsertionSort),
        Box::new(MergeSort),
        Box::new(QuickSort),
    ]
}

/// The chain semantics restated over a plain vector.
fn model_chain(ops: &[ChainOp]) -> Vec<i64> {
    let mut model: Vec<i64> = Vec::new();
    for op in ops {
        match op {
            ChainOp::Append(v) => model.push(*v),
            ChainOp::Delete(v) => {
                if let Some(pos) = model.iter().position(|x| x == v) {
                    model.remove(pos);
                }
            }
        }
    }
    model
}

proptest! {
    #[test]
    fn sort_traces_are_reproducible(values in arb_values()) {
        for sorter in sorters() {
            let baseline = Snapshot::from(ArraySnapshot::new(values.clone()));
            let a = Session::generate(sorter.as_ref(), baseline.clone()).unwrap();
            let b = Session::generate(sorter.as_ref(), baseline).unwrap();
            prop_assert!(
                a.trace().same_shape(b.trace()),
                "{} produced divergent traces",
                sorter.name(),
            );
        }
    }

    #[test]
    fn replaying_a_sort_trace_sorts_the_array(values in arb_values()) {
        let mut expected = values.clone();
        expected.sort_unstable();

        for sorter in sorters() {
            let baseline = Snapshot::from(ArraySnapshot::new(values.clone()));
            let mut session = Session::generate(sorter.as_ref(), baseline).unwrap();
            session.jump_to(session.trace_len() as isize - 1);
            prop_assert_eq!(
                session.snapshot().as_array().unwrap().values(),
                expected.as_slice(),
                "{} replay did not sort",
                sorter.name(),
            );
        }
    }

    #[test]
    fn replay_matches_the_producer_scratch(values in arb_values()) {
        for sorter in sorters() {
            let mut scratch = Snapshot::from(ArraySnapshot::new(values.clone()));
            let mut rec = TraceRecorder::new();
            sorter.run(&mut scratch, &mut rec).unwrap();

            let baseline = Snapshot::from(ArraySnapshot::new(values.clone()));
            let mut session = Session::generate(sorter.as_ref(), baseline).unwrap();
            while session.next() {}
            prop_assert_eq!(session.snapshot(), &scratch);
        }
    }

    #[test]
    fn jump_lands_on_the_same_state_as_stepping(values in arb_values()) {
        let baseline = Snapshot::from(ArraySnapshot::new(values));
        let mut stepped = Session::generate(&QuickSort, baseline.clone()).unwrap();
        let mut jumped = Session::generate(&QuickSort, baseline).unwrap();

        for index in 0..stepped.trace_len() {
            stepped.next();
            jumped.jump_to(index as isize);
            prop_assert_eq!(stepped.snapshot(), jumped.snapshot());
        }
    }

    #[test]
    fn chain_op_sequences_replay_to_the_model(ops in arb_chain_ops()) {
        let mut snapshot = Snapshot::from(ChainSnapshot::new());
        for op in &ops {
            let mut session =
                Session::generate(&ChainProducer::new(*op), snapshot).unwrap();
            session.jump_to(session.trace_len() as isize - 1);
            snapshot = session.into_snapshot();
        }
        prop_assert_eq!(
            snapshot.as_chain().unwrap().values_in_order(),
            model_chain(&ops),
        );
    }

    #[test]
    fn tree_inserts_replay_to_a_search_tree(values in prop::collection::vec(-50i64..50, 1..16)) {
        let mut snapshot = Snapshot::from(strobe_core::TreeSnapshot::new());
        for &v in &values {
            let mut session =
                Session::generate(&TreeProducer::new(TreeOp::Insert(v)), snapshot).unwrap();
            while session.next() {}
            snapshot = session.into_snapshot();
        }

        let tree = snapshot.as_tree().unwrap();
        prop_assert_eq!(tree.len(), values.len());
        // Every inserted value is reachable by BST descent.
        for &v in &values {
            prop_assert!(tree.find_value(v).is_some(), "lost value {}", v);
        }
    }
}
