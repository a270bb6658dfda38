use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::cells::{Cell, Direction};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::matrix::BoolMatrix;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// Undirected graph of a maze's passages: one node per cell (weighted with its coordinate),
/// one edge per opening.
pub type PassageGraph = Graph<Cell, (), Undirected, u32>;

/// A finished maze. Read only.
///
/// `verticals()` is `rows x (cols - 1)`: entry `[r][c]` is true when the wall between `(r, c)` and
/// `(r, c + 1)` is open. `horizontals()` is `(rows - 1) x cols`: entry `[r][c]` is true when the wall
/// between `(r, c)` and `(r + 1, c)` is open. A false entry is a wall.
#[derive(Clone, Debug)]
pub struct Maze {
    dimensions: GridDimensions,
    visited: BoolMatrix,
    verticals: BoolMatrix,
    horizontals: BoolMatrix,
}

impl Maze {
    pub(crate) fn new(dimensions: GridDimensions,
                      visited: BoolMatrix,
                      verticals: BoolMatrix,
                      horizontals: BoolMatrix)
                      -> Maze {
        Maze {
            dimensions,
            visited,
            verticals,
            horizontals,
        }
    }

    /// Build a maze from explicit openings, e.g. one produced elsewhere.
    ///
    /// The grid size is taken from the matrices: `verticals` has one row per maze row, each one
    /// entry shorter than the maze is wide. Every cell is flagged visited.
    pub fn from_openings(verticals: &[Vec<bool>], horizontals: &[Vec<bool>]) -> Result<Maze> {
        let rows = verticals.len();
        let cols = verticals.first().map_or(0, |row| row.len() + 1);
        let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(cols))?;

        let (h_rows, h_cols) = dimensions.horizontal_edges_shape();
        if horizontals.len() != h_rows {
            return configuration_error(format!("{} rows of horizontal openings for a {} row maze",
                                               horizontals.len(),
                                               rows));
        }
        let verticals = BoolMatrix::from_rows(verticals, cols - 1)?;
        let horizontals = BoolMatrix::from_rows(horizontals, h_cols)?;

        let mut visited = BoolMatrix::new(rows, cols);
        for cell in dimensions.iter() {
            visited.set(cell.row, cell.col)?;
        }

        Ok(Maze::new(dimensions, visited, verticals, horizontals))
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    pub fn is_visited(&self, cell: Cell) -> Result<bool> {
        self.visited.get(cell.row, cell.col)
    }

    pub fn is_vertical_open(&self, row: usize, col: usize) -> Result<bool> {
        self.verticals.get(row, col)
    }

    pub fn is_horizontal_open(&self, row: usize, col: usize) -> Result<bool> {
        self.horizontals.get(row, col)
    }

    /// Can the ball pass from `cell` in `direction`. False for the outer boundary and for
    /// cells off the grid.
    pub fn is_passage_open(&self, cell: Cell, direction: Direction) -> bool {
        if !self.dimensions.contains(cell.row, cell.col) {
            return false;
        }
        let (row, col) = (cell.row, cell.col);
        let open = match direction {
            Direction::Left => col.checked_sub(1).map(|c| self.verticals.get(row, c)),
            Direction::Right => Some(self.verticals.get(row, col)),
            Direction::Up => row.checked_sub(1).map(|r| self.horizontals.get(r, col)),
            Direction::Down => Some(self.horizontals.get(row, col)),
        };
        match open {
            Some(Ok(is_open)) => is_open,
            _ => false,
        }
    }

    #[inline]
    pub fn visited(&self) -> &BoolMatrix {
        &self.visited
    }

    #[inline]
    pub fn verticals(&self) -> &BoolMatrix {
        &self.verticals
    }

    #[inline]
    pub fn horizontals(&self) -> &BoolMatrix {
        &self.horizontals
    }

    /// Total open walls across both openings matrices.
    pub fn openings_count(&self) -> usize {
        self.verticals.count_true() + self.horizontals.count_true()
    }

    pub fn passage_graph(&self) -> PassageGraph {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = PassageGraph::with_capacity(nodes, edges);
        for cell in self.dimensions.iter() {
            let _ = graph.add_node(cell);
        }

        let node = |row: usize, col: usize| -> NodeIndex<u32> {
            NodeIndex::new(row * self.dimensions.columns().0 + col)
        };
        for (row, col, open) in self.verticals.iter() {
            if open {
                let _ = graph.add_edge(node(row, col), node(row, col + 1), ());
            }
        }
        for (row, col, open) in self.horizontals.iter() {
            if open {
                let _ = graph.add_edge(node(row, col), node(row + 1, col), ());
            }
        }

        graph
    }

    /// A perfect maze: every cell carved and reachable from every other by exactly one route.
    pub fn is_perfect(&self) -> bool {
        if self.visited().count_true() != self.size() {
            return false;
        }
        let graph = self.passage_graph();
        graph.edge_count() == self.size() - 1 &&
        connected_components(&graph) == 1 &&
        !is_cyclic_undirected(&graph)
    }
}
