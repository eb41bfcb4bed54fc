//! Uniform-cost (Dijkstra) search producer.

use crate::bfs::{cell_coords, record_path};
use crate::expect_grid;
use crate::grid_helpers::{neighbour_indices, PROBE_UP_DOWN_LEFT_RIGHT};
use strobe_core::{ProduceError, Snapshot, Step, StepProducer, TraceRecorder};

/// Uniform-cost search over the unweighted grid (+1 per edge).
///
/// The start cell gets distance 0 and every other cell starts
/// unreached (`None`, the infinite distance). Each round selects the
/// unvisited cell with the smallest distance — ties broken by
/// encounter order via a stable sort over the flat cell order — and
/// relaxes its neighbours, emitting an `Explore` per improvement.
/// Walls are skipped at selection time; selecting a still-unreached
/// cell means no path exists and the trace ends without `Path` steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dijkstra;

impl StepProducer for Dijkstra {
    fn name(&self) -> &str {
        "dijkstra"
    }

    fn run(
        &self,
        snapshot: &mut Snapshot,
        recorder: &mut TraceRecorder,
    ) -> Result<(), ProduceError> {
        let grid = expect_grid(self.name(), snapshot)?;
        let start = grid.start_index();
        let end = grid.end_index();

        grid.clear_search_state();
        if let Some(cell) = grid.cell_at_mut(start) {
            cell.distance = Some(0);
        }

        let mut unvisited: Vec<usize> = (0..grid.cells().len()).collect();

        while !unvisited.is_empty() {
            // Stable sort keeps encounter order among equal distances.
            unvisited.sort_by_key(|&idx| {
                grid.cell_at(idx)
                    .and_then(|c| c.distance)
                    .map_or(u64::MAX, u64::from)
            });
            let closest = unvisited.remove(0);

            let Some(cell) = grid.cell_at(closest) else {
                continue;
            };
            if cell.is_wall {
                continue;
            }
            let Some(distance) = cell.distance else {
                // Smallest remaining distance is infinite: unreachable.
                return Ok(());
            };

            if let Some(cell) = grid.cell_at_mut(closest) {
                cell.is_visited = true;
            }

            if closest != start {
                let (row, col) = cell_coords(grid, closest);
                recorder.record(Step::visit_cell(row, col).describe(format!(
                    "Visiting [{row}, {col}] with distance {distance}"
                )));
            }

            if closest == end {
                record_path(grid, end, recorder);
                return Ok(());
            }

            for nb in neighbour_indices(grid, closest, &PROBE_UP_DOWN_LEFT_RIGHT) {
                let relax = grid.cell_at(nb).is_some_and(|c| {
                    !c.is_visited && c.distance.is_none_or(|d| distance + 1 < d)
                });
                if !relax {
                    continue;
                }

                let new_distance = distance + 1;
                if let Some(cell) = grid.cell_at_mut(nb) {
                    cell.distance = Some(new_distance);
                    cell.previous = Some(closest);
                }

                let (row, col) = cell_coords(grid, nb);
                recorder.record(Step::explore_cell(row, col).describe(format!(
                    "Updating distance of [{row}, {col}] to {new_distance}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::{GridSnapshot, StepKind};

    fn run(grid: GridSnapshot) -> strobe_core::StepTrace {
        let mut snapshot = Snapshot::from(grid);
        let mut rec = TraceRecorder::new();
        Dijkstra.run(&mut snapshot, &mut rec).unwrap();
        rec.finish()
    }

    #[test]
    fn open_grid_path_is_minimal() {
        let grid = GridSnapshot::new(5, 5, (0, 0), (0, 4)).unwrap();
        let trace = run(grid);
        let path_len = trace.iter().filter(|s| s.kind == StepKind::Path).count();
        assert_eq!(path_len, 5);
    }

    #[test]
    fn detour_around_a_wall() {
        let mut grid = GridSnapshot::new(3, 3, (1, 0), (1, 2)).unwrap();
        grid.toggle_wall(1, 1);
        let trace = run(grid);
        let path_len = trace.iter().filter(|s| s.kind == StepKind::Path).count();
        // Straight line of 3 is blocked; the detour costs two extra cells.
        assert_eq!(path_len, 5);
    }

    #[test]
    fn unreachable_end_terminates_without_path() {
        let mut grid = GridSnapshot::new(3, 3, (0, 0), (2, 2)).unwrap();
        grid.toggle_wall(1, 2);
        grid.toggle_wall(2, 1);
        let trace = run(grid);
        assert!(trace.iter().all(|s| s.kind != StepKind::Path));
    }

    #[test]
    fn visit_distances_never_decrease() {
        let grid = GridSnapshot::new(4, 6, (1, 1), (3, 5)).unwrap();
        let mut snapshot = Snapshot::from(grid);
        let mut rec = TraceRecorder::new();
        Dijkstra.run(&mut snapshot, &mut rec).unwrap();

        // Re-derive each visited cell's settled distance from the scratch grid.
        let grid = snapshot.as_grid().unwrap();
        let mut last = 0;
        for step in rec.finish().iter().filter(|s| s.kind == StepKind::Visit) {
            let cell = grid.cell(step.positions[0], step.positions[1]).unwrap();
            let d = cell.distance.unwrap();
            assert!(d >= last);
            last = d;
        }
    }
}
