//! End-to-end navigation scenarios: generate a trace with a real
//! producer, then drive the session the way a presentation layer
//! would.

use strobe_core::{
    ArraySnapshot, ChainSnapshot, GridSnapshot, NodeId, Snapshot, Step, StepKind, StepTrace,
};
use strobe_engine::{ReplayEngine, Session};
use strobe_producers::{BreadthFirst, BubbleSort, ChainOp, ChainProducer, TreeOp, TreeProducer};

fn array_session(values: Vec<i64>) -> Session {
    let baseline = Snapshot::from(ArraySnapshot::new(values));
    Session::generate(&BubbleSort, baseline).unwrap()
}

#[test]
fn bubble_sort_trace_has_the_full_compare_schedule() {
    let session = array_session(vec![5, 3, 4, 1, 2]);
    let compares = session
        .trace()
        .iter()
        .filter(|s| s.kind == StepKind::Compare)
        .count();
    // Every adjacent pair is compared in every pass: n(n-1)/2.
    assert_eq!(compares, 10);
}

#[test]
fn stepping_to_the_end_sorts_the_working_array() {
    let mut session = array_session(vec![5, 3, 4, 1, 2]);
    while session.next() {}
    assert!(session.finished());
    assert_eq!(
        session.snapshot().as_array().unwrap().values(),
        &[1, 2, 3, 4, 5]
    );
    // The baseline is untouched throughout.
    assert_eq!(
        session.engine().baseline().as_array().unwrap().values(),
        &[5, 3, 4, 1, 2]
    );
}

#[test]
fn jump_to_last_index_equals_stepping_every_step() {
    let mut stepped = array_session(vec![5, 3, 4, 1, 2]);
    while stepped.next() {}

    let mut jumped = array_session(vec![5, 3, 4, 1, 2]);
    jumped.jump_to(jumped.trace_len() as isize - 1);

    assert_eq!(stepped.snapshot(), jumped.snapshot());
    assert_eq!(stepped.current_index(), jumped.current_index());
}

#[test]
fn jump_is_idempotent() {
    let mut session = array_session(vec![4, 2, 3, 1]);
    let mid = session.trace_len() as isize / 2;
    session.jump_to(mid);
    let once = session.snapshot().clone();
    session.jump_to(mid);
    assert_eq!(session.snapshot(), &once);
}

#[test]
fn prev_after_next_round_trips_every_position() {
    let mut session = array_session(vec![3, 1, 2]);
    let mut seen = vec![session.snapshot().clone()];
    while session.next() {
        seen.push(session.snapshot().clone());
    }
    for expected in seen.iter().rev().skip(1) {
        assert!(session.prev());
        assert_eq!(session.snapshot(), expected);
    }
    assert!(!session.prev());
    assert_eq!(session.current_index(), -1);
}

#[test]
fn bfs_on_an_open_grid_paints_a_minimal_path() {
    let baseline = Snapshot::from(GridSnapshot::new(15, 30, (5, 5), (5, 25)).unwrap());
    let mut session = Session::generate(&BreadthFirst, baseline).unwrap();
    session.jump_to(session.trace_len() as isize - 1);

    let grid = session.snapshot().as_grid().unwrap();
    let painted = grid.cells().iter().filter(|c| c.is_path).count();
    // Manhattan distance 20, inclusive of both endpoints.
    assert_eq!(painted, 21);
    assert!(grid.cell(5, 5).unwrap().is_path);
    assert!(grid.cell(5, 25).unwrap().is_path);
}

#[test]
fn reset_clears_search_state_but_keeps_walls() {
    let mut grid = GridSnapshot::new(6, 6, (0, 0), (5, 5)).unwrap();
    grid.toggle_wall(2, 2);
    grid.toggle_wall(3, 2);
    let mut session = Session::generate(&BreadthFirst, Snapshot::from(grid)).unwrap();
    session.jump_to(session.trace_len() as isize - 1);
    session.reset();

    let grid = session.snapshot().as_grid().unwrap();
    assert!(grid.cell(2, 2).unwrap().is_wall);
    assert!(grid.cell(3, 2).unwrap().is_wall);
    assert!(grid.cells().iter().all(|c| !c.is_visited && !c.is_path));
    assert_eq!(session.current_index(), -1);
}

#[test]
fn empty_trace_session_is_finished_from_the_start() {
    let baseline = Snapshot::from(ChainSnapshot::new());
    let mut session =
        Session::generate(&ChainProducer::new(ChainOp::Delete(7)), baseline).unwrap();
    assert_eq!(session.trace_len(), 0);
    assert!(session.finished());
    assert!(!session.next());
    assert!(!session.prev());
}

#[test]
fn chain_mutations_compose_across_sessions() {
    let mut snapshot = Snapshot::from(ChainSnapshot::new());
    for op in [
        ChainOp::Append(1),
        ChainOp::Append(2),
        ChainOp::Append(3),
        ChainOp::Delete(2),
    ] {
        let mut session = Session::generate(&ChainProducer::new(op), snapshot).unwrap();
        while session.next() {}
        snapshot = session.into_snapshot();
    }
    assert_eq!(snapshot.as_chain().unwrap().values_in_order(), vec![1, 3]);
}

#[test]
fn tree_replay_reconstructs_the_producer_scratch_shape() {
    let mut snapshot = Snapshot::from(strobe_core::TreeSnapshot::new());
    for value in [5, 3, 7, 1] {
        let mut session =
            Session::generate(&TreeProducer::new(TreeOp::Insert(value)), snapshot).unwrap();
        while session.next() {}
        snapshot = session.into_snapshot();
    }

    let tree = snapshot.as_tree().unwrap();
    let root = tree.get(tree.root().unwrap()).unwrap();
    assert_eq!(root.value, 5);
    let left = tree.get(root.left.unwrap()).unwrap();
    assert_eq!(left.value, 3);
    assert_eq!(tree.get(left.left.unwrap()).unwrap().value, 1);
    assert_eq!(tree.get(root.right.unwrap()).unwrap().value, 7);
}

#[test]
fn rogue_steps_do_not_derail_navigation() {
    // A trace with steps that reference nothing: navigation treats
    // them as no-ops and the cursor still moves.
    let trace = StepTrace::new(vec![
        Step::link(NodeId(40), NodeId(41)),
        Step::visit_cell(99, 99),
        Step::swap(0, 1),
    ]);
    let baseline = Snapshot::from(ArraySnapshot::new(vec![2, 1]));
    let mut engine = ReplayEngine::new(baseline, trace);
    while engine.step_forward() {}
    assert_eq!(engine.snapshot().as_array().unwrap().values(), &[1, 2]);
    assert_eq!(engine.current_index(), 2);
}
