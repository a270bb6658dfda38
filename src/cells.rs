use smallvec::SmallVec;

/// A grid cell addressed by `(row, col)`, row 0 at the top.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: usize) -> Cell {
        Cell::new(index / row_length, index % row_length)
    }

    /// Creates a new `Cell` offset 1 cell away in the given direction.
    /// Returns None if the coordinate would go below zero.
    ///
    /// The result is not checked against any grid's upper bounds.
    pub fn offset(&self, direction: Direction) -> Option<Cell> {
        let (row, col) = (self.row, self.col);
        match direction {
            Direction::Up => row.checked_sub(1).map(|r| Cell::new(r, col)),
            Direction::Down => Some(Cell::new(row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| Cell::new(row, c)),
            Direction::Right => Some(Cell::new(row, col + 1)),
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

/// A candidate move out of a cell. `cell` is None when the move would leave the grid
/// through row or column zero.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Neighbour {
    pub cell: Option<Cell>,
    pub direction: Direction,
}

pub type NeighbourSmallVec = SmallVec<[Neighbour; 4]>;

/// The four candidate neighbours of `coord` in up, down, left, right order.
///
/// Candidates beyond the far edges of a grid are included; bounds filtering is left to the caller.
pub fn neighbour_candidates(coord: Cell) -> NeighbourSmallVec {
    ALL_DIRECTIONS
        .iter()
        .map(|&direction| Neighbour {
            cell: coord.offset(direction),
            direction,
        })
        .collect()
}
