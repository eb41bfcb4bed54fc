//! Fixed-size 2D grid snapshot for the pathfinding producers.
//!
//! Cells live in a flat `rows × cols` vector indexed by
//! `row * cols + col`. The back-reference to a cell's discovering
//! predecessor is a flat cell index, not an owning pointer: the grid
//! remains the sole owner of every cell and path reconstruction walks
//! the index chain until `None`.

use crate::error::GridError;

/// One grid cell.
///
/// Coordinates and the start/end flags are fixed when the grid is
/// created and never altered by any step; the search flags
/// (`is_visited`, `is_path`), `distance`, and `previous` are derived
/// state owned by the trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Row coordinate.
    pub row: u32,
    /// Column coordinate.
    pub col: u32,
    /// `true` for the fixed start cell.
    pub is_start: bool,
    /// `true` for the fixed end cell.
    pub is_end: bool,
    /// Impassable cell. Not trace-controlled; preserved by `reset`.
    pub is_wall: bool,
    /// Visited during the search.
    pub is_visited: bool,
    /// On the reconstructed start-to-end path.
    pub is_path: bool,
    /// Best known distance from the start; `None` means unreached
    /// (the infinite distance of the uniform-cost producer).
    pub distance: Option<u32>,
    /// Flat index of the discovering predecessor, if any.
    pub previous: Option<usize>,
}

impl GridCell {
    fn new(row: u32, col: u32, is_start: bool, is_end: bool) -> Self {
        Self {
            row,
            col,
            is_start,
            is_end,
            is_wall: false,
            is_visited: false,
            is_path: false,
            distance: None,
            previous: None,
        }
    }
}

/// A fixed-size 2D grid of cells with designated start and end.
///
/// # Examples
///
/// ```
/// use strobe_core::GridSnapshot;
///
/// let mut grid = GridSnapshot::new(15, 30, (5, 5), (5, 25)).unwrap();
/// grid.toggle_wall(3, 4);
/// assert!(grid.cell(3, 4).unwrap().is_wall);
/// // Start and end cells refuse walls.
/// assert!(!grid.toggle_wall(5, 5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: u32,
    cols: u32,
    start: (u32, u32),
    end: (u32, u32),
    cells: Vec<GridCell>,
}

impl GridSnapshot {
    /// Build a wall-free grid with the given dimensions and fixed
    /// start/end coordinates.
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroSized`] for a zero dimension,
    /// [`GridError::OutOfBounds`] when start or end falls outside the
    /// grid, [`GridError::StartEqualsEnd`] when they coincide.
    pub fn new(
        rows: u32,
        cols: u32,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroSized { rows, cols });
        }
        for (row, col) in [start, end] {
            if row >= rows || col >= cols {
                return Err(GridError::OutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
        }
        if start == end {
            return Err(GridError::StartEqualsEnd {
                row: start.0,
                col: start.1,
            });
        }

        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(GridCell::new(
                    row,
                    col,
                    (row, col) == start,
                    (row, col) == end,
                ));
            }
        }
        Ok(Self {
            rows,
            cols,
            start,
            end,
            cells,
        })
    }

    /// Row count.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Start coordinates `(row, col)`.
    pub fn start(&self) -> (u32, u32) {
        self.start
    }

    /// End coordinates `(row, col)`.
    pub fn end(&self) -> (u32, u32) {
        self.end
    }

    /// Flat index of `(row, col)`. Callers must stay in bounds.
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Flat index of the start cell.
    pub fn start_index(&self) -> usize {
        self.index(self.start.0, self.start.1)
    }

    /// Flat index of the end cell.
    pub fn end_index(&self) -> usize {
        self.index(self.end.0, self.end.1)
    }

    /// Cell at `(row, col)`, if in bounds.
    pub fn cell(&self, row: u32, col: u32) -> Option<&GridCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Mutable cell at `(row, col)`, if in bounds.
    pub fn cell_mut(&mut self, row: u32, col: u32) -> Option<&mut GridCell> {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    /// Cell at a flat index.
    pub fn cell_at(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Mutable cell at a flat index.
    pub fn cell_at_mut(&mut self, index: usize) -> Option<&mut GridCell> {
        self.cells.get_mut(index)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Flip a cell's wall flag. Start and end cells are refused.
    /// Returns `true` if the flag changed.
    pub fn toggle_wall(&mut self, row: u32, col: u32) -> bool {
        match self.cell_mut(row, col) {
            Some(cell) if !cell.is_start && !cell.is_end => {
                cell.is_wall = !cell.is_wall;
                true
            }
            _ => false,
        }
    }

    /// Clear derived search state (visited/path flags, distances,
    /// back-references) while preserving walls.
    pub fn clear_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.is_visited = false;
            cell.is_path = false;
            cell.distance = None;
            cell.previous = None;
        }
    }
}
