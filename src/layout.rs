//! Turns a maze into static shapes in continuous space for a physics or rendering engine.
//!
//! Coordinates grow right and down, `(0, 0)` is the top left corner of the maze and every shape
//! is positioned by its centre, which is how physics engines usually take rectangles.

use log::debug;

use crate::config::{MazeConfig, Viewport, BOUNDARY_THICKNESS, DEFAULT_WALL_THICKNESS};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Axis aligned rectangle positioned by its centre.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Rect {
    pub centre: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(centre: Point, width: f64, height: f64) -> Rect {
        Rect {
            centre,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.centre.x - self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.centre.y - self.height / 2.0
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Circle {
    pub centre: Point,
    pub radius: f64,
}

/// The size of one maze cell in layout units.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub fn new(width: f64, height: f64) -> Result<CellSize> {
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return configuration_error(format!("cell size {} x {} must be positive", width, height));
        }
        Ok(CellSize { width, height })
    }

    /// Stretch the cells so the whole grid fills the viewport.
    pub fn fit(viewport: Viewport, dimensions: &GridDimensions) -> Result<CellSize> {
        viewport.validate()?;
        CellSize::new(viewport.width / dimensions.columns().0 as f64,
                      viewport.height / dimensions.rows().0 as f64)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Orientation {
    /// Runs left to right, separating a cell from the one below it.
    Horizontal,
    /// Runs top to bottom, separating a cell from the one to its right.
    Vertical,
}

/// One closed wall of the maze, with the openings matrix entry it came from.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallSegment {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

/// Static wall segments for every closed wall between two cells.
///
/// `horizontals[r][c] == false` gives a horizontal bar centred at `((c + 0.5) * w, (r + 1) * h)`,
/// one cell wide. `verticals[r][c] == false` gives a vertical bar centred at
/// `((c + 1) * w, (r + 0.5) * h)`, one cell tall. Open entries produce nothing.
pub fn maze_walls(maze: &Maze, cell_size: CellSize, thickness: f64) -> Vec<WallSegment> {
    let CellSize { width: w, height: h } = cell_size;

    let horizontal = maze.horizontals()
        .iter()
        .filter(|&(_, _, open)| !open)
        .map(|(row, col, _)| WallSegment {
            orientation: Orientation::Horizontal,
            row,
            col,
            rect: Rect::new(Point::new((col as f64 + 0.5) * w, (row as f64 + 1.0) * h),
                            w,
                            thickness),
        });
    let vertical = maze.verticals()
        .iter()
        .filter(|&(_, _, open)| !open)
        .map(|(row, col, _)| WallSegment {
            orientation: Orientation::Vertical,
            row,
            col,
            rect: Rect::new(Point::new((col as f64 + 1.0) * w, (row as f64 + 0.5) * h),
                            thickness,
                            h),
        });

    horizontal.chain(vertical).collect()
}

/// Total size of the laid out maze.
pub fn extent(maze: &Maze, cell_size: CellSize) -> Viewport {
    Viewport::new(maze.columns().0 as f64 * cell_size.width,
                  maze.rows().0 as f64 * cell_size.height)
}

/// Thin frame around the maze: top, bottom, left and right.
pub fn boundary_walls(extent: Viewport, thickness: f64) -> [Rect; 4] {
    let Viewport { width, height } = extent;
    [Rect::new(Point::new(width / 2.0, 0.0), width, thickness),
     Rect::new(Point::new(width / 2.0, height), width, thickness),
     Rect::new(Point::new(0.0, height / 2.0), thickness, height),
     Rect::new(Point::new(width, height / 2.0), thickness, height)]
}

/// Half-cell square in the middle of the bottom right cell.
pub fn goal(maze: &Maze, cell_size: CellSize) -> Rect {
    let Viewport { width, height } = extent(maze, cell_size);
    Rect::new(Point::new(width - cell_size.width / 2.0, height - cell_size.height / 2.0),
              cell_size.width * 0.5,
              cell_size.height * 0.5)
}

/// The ball starts in the middle of the top left cell, a quarter of the smaller cell side wide.
pub fn ball(cell_size: CellSize) -> Circle {
    Circle {
        centre: Point::new(cell_size.width / 2.0, cell_size.height / 2.0),
        radius: cell_size.width.min(cell_size.height) / 4.0,
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct LayoutOptions {
    pub wall_thickness: f64,
    pub boundary_thickness: f64,
}

impl Default for LayoutOptions {
    fn default() -> LayoutOptions {
        LayoutOptions {
            wall_thickness: DEFAULT_WALL_THICKNESS,
            boundary_thickness: BOUNDARY_THICKNESS,
        }
    }
}

/// Every shape of a playable maze.
#[derive(PartialEq, Clone, Debug)]
pub struct SceneLayout {
    pub cell_size: CellSize,
    pub extent: Viewport,
    pub boundary: [Rect; 4],
    pub walls: Vec<WallSegment>,
    pub goal: Rect,
    pub ball: Circle,
}

impl SceneLayout {
    pub fn build(maze: &Maze, cell_size: CellSize, options: &LayoutOptions) -> SceneLayout {
        let extent = extent(maze, cell_size);
        let walls = maze_walls(maze, cell_size, options.wall_thickness);
        debug!("laid out {} walls over {} x {}", walls.len(), extent.width, extent.height);

        SceneLayout {
            cell_size,
            extent,
            boundary: boundary_walls(extent, options.boundary_thickness),
            walls,
            goal: goal(maze, cell_size),
            ball: ball(cell_size),
        }
    }

    /// Fit the maze to the configured viewport and lay it out.
    pub fn from_config(maze: &Maze, config: &MazeConfig) -> Result<SceneLayout> {
        config.validate()?;
        let cell_size = CellSize::fit(config.viewport, maze.dimensions())?;
        let options = LayoutOptions {
            wall_thickness: config.wall_thickness,
            ..LayoutOptions::default()
        };
        Ok(SceneLayout::build(maze, cell_size, &options))
    }
}
