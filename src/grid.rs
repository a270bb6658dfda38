use std::fmt;

use crate::cells::{Cell, Direction};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::matrix::BoolMatrix;

/// The mutable grid a maze is carved into.
///
/// Holds the visited flags plus the two wall-openness matrices. `true` in an openings matrix
/// means the wall between the two adjacent cells has been removed.
pub struct MazeGrid {
    dimensions: GridDimensions,
    visited: BoolMatrix,
    verticals: BoolMatrix,
    horizontals: BoolMatrix,
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "MazeGrid :: rows: {:?}, columns: {:?}, visited: {}, openings: {}",
               self.dimensions.rows().0,
               self.dimensions.columns().0,
               self.visited.count_true(),
               self.openings_count())
    }
}

impl MazeGrid {
    pub fn new(dimensions: GridDimensions) -> MazeGrid {
        let (v_rows, v_cols) = dimensions.vertical_edges_shape();
        let (h_rows, h_cols) = dimensions.horizontal_edges_shape();
        MazeGrid {
            dimensions,
            visited: BoolMatrix::new(dimensions.rows().0, dimensions.columns().0),
            verticals: BoolMatrix::new(v_rows, v_cols),
            horizontals: BoolMatrix::new(h_rows, h_cols),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// Bounds check for carving. Out of range is a normal "no such neighbour", not an error.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.dimensions.contains(row, col)
    }

    pub fn is_visited(&self, cell: Cell) -> Result<bool> {
        self.visited.get(cell.row, cell.col)
    }

    pub fn mark_visited(&mut self, cell: Cell) -> Result<()> {
        self.visited.set(cell.row, cell.col)
    }

    /// Open the wall between `(row, col)` and `(row, col + 1)`.
    pub fn open_vertical(&mut self, row: usize, col: usize) -> Result<()> {
        self.verticals.set(row, col)
    }

    /// Open the wall between `(row, col)` and `(row + 1, col)`.
    pub fn open_horizontal(&mut self, row: usize, col: usize) -> Result<()> {
        self.horizontals.set(row, col)
    }

    /// Open the wall crossed when moving from `from` in `direction`.
    pub fn open_passage(&mut self, from: Cell, direction: Direction) -> Result<()> {
        let (row, col) = (from.row, from.col);
        match direction {
            Direction::Left => match col.checked_sub(1) {
                Some(c) => self.open_vertical(row, c),
                None => Err(ErrorKind::IndexOutOfBounds(row, col, self.verticals.rows(),
                                                        self.verticals.cols()).into()),
            },
            Direction::Right => self.open_vertical(row, col),
            Direction::Up => match row.checked_sub(1) {
                Some(r) => self.open_horizontal(r, col),
                None => Err(ErrorKind::IndexOutOfBounds(row, col, self.horizontals.rows(),
                                                        self.horizontals.cols()).into()),
            },
            Direction::Down => self.open_horizontal(row, col),
        }
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.count_true()
    }

    #[inline]
    pub fn openings_count(&self) -> usize {
        self.verticals.count_true() + self.horizontals.count_true()
    }

    /// Freeze the grid. The matrices are read-only from here on.
    pub fn into_maze(self) -> Maze {
        Maze::new(self.dimensions, self.visited, self.verticals, self.horizontals)
    }
}
