use bit_set::BitSet;
use itertools::iproduct;

use crate::errors::*;

/// Fixed size, bounds checked matrix of booleans. Every entry starts false.
///
/// Either dimension may be zero, in which case the matrix is empty and every access fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoolMatrix {
    bits: BitSet,
    rows: usize,
    cols: usize,
}

impl BoolMatrix {
    pub fn new(rows: usize, cols: usize) -> BoolMatrix {
        BoolMatrix {
            bits: BitSet::with_capacity(rows * cols),
            rows,
            cols,
        }
    }

    /// Build from row vectors. All rows must have `cols` entries.
    pub fn from_rows(rows: &[Vec<bool>], cols: usize) -> Result<BoolMatrix> {
        let mut matrix = BoolMatrix::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return configuration_error(format!("matrix row {} has {} entries, expected {}",
                                                   r,
                                                   row.len(),
                                                   cols));
            }
            for (c, &value) in row.iter().enumerate() {
                if value {
                    matrix.set(r, c)?;
                }
            }
        }
        Ok(matrix)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        Ok(self.bits.contains(index))
    }

    /// Set an entry true. Entries are never reset.
    pub fn set(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.index(row, col)?;
        self.bits.insert(index);
        Ok(())
    }

    /// Number of true entries.
    #[inline]
    pub fn count_true(&self) -> usize {
        self.bits.len()
    }

    /// Row major `(row, col, value)` over every entry.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let cols = self.cols;
        iproduct!(0..self.rows, 0..cols).map(move |(r, c)| (r, c, self.bits.contains(r * cols + c)))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.bits.contains(r * self.cols + c))
                    .collect()
            })
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(ErrorKind::IndexOutOfBounds(row, col, self.rows, self.cols).into())
        }
    }
}
