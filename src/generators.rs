use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{neighbour_candidates, Cell, NeighbourSmallVec};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::grid::MazeGrid;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::shuffle::ShuffleKind;
use crate::units::{ColumnsCount, RowsCount};

/// Generate a perfect maze of `rows` by `cols` cells.
///
/// With a seed the same maze comes back on every call; without one the generator is seeded
/// from the operating system. The carving starts from a uniformly random cell.
pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Maze> {
    let mut rng = seeded_rng(seed);
    generate_with_rng(rows, cols, &mut rng, ShuffleKind::default())
}

/// Generate a maze from a full configuration, seed and shuffle variant included.
pub fn generate_from_config(config: &MazeConfig) -> Result<Maze> {
    config.validate()?;
    let mut rng = seeded_rng(config.seed);
    generate_with_rng(config.rows, config.columns, &mut rng, config.shuffle)
}

pub fn generate_with_rng<R: Rng + ?Sized>(rows: usize,
                                          cols: usize,
                                          rng: &mut R,
                                          shuffle_kind: ShuffleKind)
                                          -> Result<Maze> {
    let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(cols))?;
    let mut grid = MazeGrid::new(dimensions);
    let start = dimensions.random_cell(rng);

    recursive_backtracker(&mut grid, start, rng, shuffle_kind)?;

    debug!("carved {}x{} maze from {:?}: {} passages",
           rows,
           cols,
           start,
           grid.openings_count());
    Ok(grid.into_maze())
}

pub fn seeded_rng(seed: Option<u64>) -> XorShiftRng {
    match seed {
        Some(s) => XorShiftRng::seed_from_u64(s),
        None => XorShiftRng::from_entropy(),
    }
}

/// One level of the depth first walk: the cell, its shuffled candidate moves and how many of
/// them have been tried so far.
struct Frame {
    cell: Cell,
    candidates: NeighbourSmallVec,
    next: usize,
}

/// Apply the recursive backtracker maze generation algorithm to the grid.
///
/// A randomised depth first walk: enter a cell, mark it visited, shuffle its four neighbours
/// and carve a passage into each neighbour that is on the grid and still unvisited, walking
/// into it before trying the next one. Every cell is entered once, so the passages form a
/// spanning tree of the grid: a perfect maze.
///
/// The walk keeps its own stack of frames rather than using the call stack, which keeps large
/// grids safe while drawing random numbers and carving in exactly the order a recursive walk
/// would.
///
/// Starting from an already visited cell does nothing. A start outside the grid is an error.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut MazeGrid,
                                              start: Cell,
                                              rng: &mut R,
                                              shuffle_kind: ShuffleKind)
                                              -> Result<()> {
    let mut stack: Vec<Frame> = Vec::new();
    if let Some(frame) = enter_cell(grid, start, rng, shuffle_kind)? {
        stack.push(frame);
    }

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.candidates.len() {
            // exhausted, backtrack
            stack.pop();
            continue;
        }
        let neighbour = frame.candidates[frame.next];
        frame.next += 1;
        let current = frame.cell;

        let next_cell = match neighbour.cell {
            Some(c) if grid.contains(c.row, c.col) => c,
            _ => continue,
        };
        if grid.is_visited(next_cell)? {
            continue;
        }

        grid.open_passage(current, neighbour.direction)?;
        trace!("{:?} -> {:?} ({:?})", current, next_cell, neighbour.direction);

        if let Some(child) = enter_cell(grid, next_cell, rng, shuffle_kind)? {
            stack.push(child);
        }
    }

    Ok(())
}

fn enter_cell<R: Rng + ?Sized>(grid: &mut MazeGrid,
                               cell: Cell,
                               rng: &mut R,
                               shuffle_kind: ShuffleKind)
                               -> Result<Option<Frame>> {
    if grid.is_visited(cell)? {
        return Ok(None);
    }
    grid.mark_visited(cell)?;

    let mut candidates = neighbour_candidates(cell);
    shuffle_kind.apply(&mut candidates, rng);

    Ok(Some(Frame {
        cell,
        candidates,
        next: 0,
    }))
}
