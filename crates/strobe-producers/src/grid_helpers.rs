//! Shared grid-topology helpers for the pathfinding producers.
//!
//! The three producers probe the 4-connected neighbourhood in
//! different orders (faithfully preserved, since step order is the
//! trace contract), so the probe offsets are a parameter.

use smallvec::SmallVec;
use strobe_core::GridSnapshot;

/// BFS and uniform-cost probe order: up, down, left, right.
pub(crate) const PROBE_UP_DOWN_LEFT_RIGHT: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// DFS probe order: up, right, down, left.
pub(crate) const PROBE_UP_RIGHT_DOWN_LEFT: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Collect the flat indices of the in-bounds 4-connected neighbours of
/// the cell at `index`, probing in the given offset order. No
/// visited/wall filtering happens here; each producer applies its own.
pub(crate) fn neighbour_indices(
    grid: &GridSnapshot,
    index: usize,
    probe: &[(i32, i32); 4],
) -> SmallVec<[usize; 4]> {
    let mut result = SmallVec::new();
    let Some(cell) = grid.cell_at(index) else {
        return result;
    };
    let (row, col) = (cell.row as i32, cell.col as i32);

    for (dr, dc) in probe {
        let (nr, nc) = (row + dr, col + dc);
        if nr >= 0 && nr < grid.rows() as i32 && nc >= 0 && nc < grid.cols() as i32 {
            result.push(grid.index(nr as u32, nc as u32));
        }
    }
    result
}

/// Walk the back-reference chain from the end cell to the start,
/// returning flat indices in start-to-end order. Empty when the end
/// cell was never reached.
pub(crate) fn backtrack(grid: &GridSnapshot, end_index: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cursor = Some(end_index);
    while let Some(idx) = cursor {
        path.push(idx);
        cursor = grid.cell_at(idx).and_then(|c| c.previous);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSnapshot {
        GridSnapshot::new(3, 3, (0, 0), (2, 2)).unwrap()
    }

    #[test]
    fn centre_cell_has_four_neighbours() {
        let g = grid();
        let nbs = neighbour_indices(&g, g.index(1, 1), &PROBE_UP_DOWN_LEFT_RIGHT);
        assert_eq!(nbs.as_slice(), &[1, 7, 3, 5]);
    }

    #[test]
    fn corner_cell_has_two_neighbours() {
        let g = grid();
        let nbs = neighbour_indices(&g, g.index(0, 0), &PROBE_UP_DOWN_LEFT_RIGHT);
        assert_eq!(nbs.as_slice(), &[3, 1]);
    }

    #[test]
    fn probe_order_is_respected() {
        let g = grid();
        let nbs = neighbour_indices(&g, g.index(1, 1), &PROBE_UP_RIGHT_DOWN_LEFT);
        assert_eq!(nbs.as_slice(), &[1, 5, 7, 3]);
    }

    #[test]
    fn backtrack_walks_to_the_root() {
        let mut g = grid();
        let a = g.index(0, 0);
        let b = g.index(0, 1);
        let c = g.index(0, 2);
        g.cell_at_mut(b).unwrap().previous = Some(a);
        g.cell_at_mut(c).unwrap().previous = Some(b);
        assert_eq!(backtrack(&g, c), vec![a, b, c]);
    }
}
