use std::fmt;

use rand::Rng;

use crate::cells::Cell;
use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// The validated size of a rectangular maze grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    /// Fails with a `Configuration` error if either dimension is zero.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        if rows.0 == 0 || columns.0 == 0 {
            return configuration_error(format!("maze needs at least one row and one column, \
                                                got {} rows and {} columns",
                                               rows.0,
                                               columns.0));
        }
        if rows.0.checked_mul(columns.0).is_none() {
            return configuration_error(format!("{} x {} cells overflows the grid size",
                                               rows.0,
                                               columns.0));
        }

        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// `(rows, cols)` shape of the vertical edges matrix: the walls between horizontally adjacent cells.
    pub fn vertical_edges_shape(&self) -> (usize, usize) {
        (self.rows.0, self.columns.0 - 1)
    }

    /// `(rows, cols)` shape of the horizontal edges matrix: the walls between vertically adjacent cells.
    pub fn horizontal_edges_shape(&self) -> (usize, usize) {
        (self.rows.0 - 1, self.columns.0)
    }

    /// Cell count and the number of interior edges, as capacity hints for a graph of the grid.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (v_rows, v_cols) = self.vertical_edges_shape();
        let (h_rows, h_cols) = self.horizontal_edges_shape();
        (self.size(), EdgesCount(v_rows * v_cols + h_rows * h_cols))
    }

    /// Is the coordinate within the grid's dimensions.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows.0 && col < self.columns.0
    }

    /// A uniformly random cell: row and column drawn independently.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.rows.0), rng.gen_range(0..self.columns.0))
    }

    /// Row major iteration over every cell.
    pub fn iter(&self) -> CellIter {
        CellIter {
            row_length: self.columns.0,
            current_cell_number: 0,
            cells_count: self.size().0,
        }
    }
}

#[derive(Clone)]
pub struct CellIter {
    row_length: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let cell = Cell::from_row_major_index(self.current_cell_number, self.row_length);
            self.current_cell_number += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
