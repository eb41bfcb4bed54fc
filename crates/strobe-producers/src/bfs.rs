//! Breadth-first search producer.

use crate::expect_grid;
use crate::grid_helpers::{backtrack, neighbour_indices, PROBE_UP_DOWN_LEFT_RIGHT};
use std::collections::VecDeque;
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Breadth-first search over the grid: a FIFO frontier guarantees the
/// first arrival at the end cell is a shortest path.
///
/// Emits a `Visit` for every dequeued cell except the start, an
/// `Explore` when a neighbour is enqueued (its back-reference set to
/// the discovering cell), and on reaching the end a run of `Path`
/// steps in start-to-end order. An exhausted frontier ends the trace
/// with no `Path` steps — absence of a path is signaled by trace
/// content, not by an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl StepProducer for BreadthFirst {
    fn name(&self) -> &str {
        "breadth_first"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let grid = expect_grid(self.name(), snapshot)?;
        let start = grid.start_index();
        let end = grid.end_index();

        if let Some(cell) = grid.cell_at_mut(start) {
            cell.is_visited = true;
        }
        let mut queue: VecDeque<usize> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current == end {
                record_path(grid, end, recorder);
                return Ok(());
            }

            if current != start {
                let (row, col) = cell_coords(grid, current);
                recorder.record(
                    Step::visit_cell(row, col)
                        .describe(format!("Visiting node at [{row}, {col}]")),
                );
            }

            for nb in neighbour_indices(grid, current, &PROBE_UP_DOWN_LEFT_RIGHT) {
                let passable = grid
                    .cell_at(nb)
                    .is_some_and(|c| !c.is_visited && !c.is_wall);
                if !passable {
                    continue;
                }

                if let Some(cell) = grid.cell_at_mut(nb) {
                    cell.is_visited = true;
                    cell.previous = Some(current);
                }
                queue.push_back(nb);

                let (row, col) = cell_coords(grid, nb);
                recorder.record(
                    Step::explore_cell(row, col)
                        .describe(format!("Adding neighbor [{row}, {col}] to queue")),
                );
            }
        }
        Ok(())
    }
}

pub(crate) fn cell_coords(grid: &strobe_core::GridSnapshot, index: usize) -> (u32, u32) {
    grid.cell_at(index)
        .map(|c| (c.row, c.col))
        .unwrap_or_default()
}

pub(crate) fn record_path(
    grid: &strobe_core::GridSnapshot,
    end_index: usize,
    recorder: &mut TraceRecorder,
) {
    for idx in backtrack(grid, end_index) {
        let (row, col) = cell_coords(grid, idx);
        recorder.record(Step::path_cell(row, col).describe(format!("Path [{row}, {col}]")));
    }
}
