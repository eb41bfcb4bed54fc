//! Depth-first search producer.

use crate::bfs::{cell_coords, record_path};
use crate::expect_grid;
use crate::grid_helpers::{neighbour_indices, PROBE_UP_RIGHT_DOWN_LEFT};
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Iterative depth-first search over the grid with a LIFO frontier.
///
/// Cells are marked visited when popped, not when pushed, so a cell
/// may sit on the stack more than once; its back-reference is
/// retargeted to the most recent discoverer. The found path is
/// whatever branch first reaches the end — no shortest-path guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl StepProducer for DepthFirst {
    fn name(&self) -> &str {
        "depth_first"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let grid = expect_grid(self.name(), snapshot)?;
        let start = grid.start_index();
        let end = grid.end_index();

        let mut stack: Vec<usize> = vec![start];

        while let Some(current) = stack.pop() {
            let already = grid.cell_at(current).is_none_or(|c| c.is_visited);
            if already {
                continue;
            }
            if let Some(cell) = grid.cell_at_mut(current) {
                cell.is_visited = true;
            }

            if current != start {
                let (row, col) = cell_coords(grid, current);
                recorder
                    .record(Step::visit_cell(row, col).describe(format!("Visiting [{row}, {col}]")));
            }

            if current == end {
                record_path(grid, end, recorder);
                return Ok(());
            }

            for nb in neighbour_indices(grid, current, &PROBE_UP_RIGHT_DOWN_LEFT) {
                let passable = grid
                    .cell_at(nb)
                    .is_some_and(|c| !c.is_visited && !c.is_wall);
                if !passable {
                    continue;
                }

                if let Some(cell) = grid.cell_at_mut(nb) {
                    cell.previous = Some(current);
                }
                stack.push(nb);

                let (row, col) = cell_coords(grid, nb);
                recorder.record(
                    Step::explore_cell(row, col)
                        .describe(format!("Adding neighbor [{row}, {col}] to stack")),
                );
            }
        }
        Ok(())
    }
}
