use crate::errors::*;
use crate::shuffle::ShuffleKind;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 14;
pub const DEFAULT_WALL_THICKNESS: f64 = 10.0;
pub const BOUNDARY_THICKNESS: f64 = 2.0;

/// Size of the area the maze is laid out in. Cell sizes are derived from it.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.width.is_finite()) ||
           !(self.height > 0.0 && self.height.is_finite()) {
            return configuration_error(format!("viewport {} x {} must be positive",
                                               self.width,
                                               self.height));
        }
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport::new(840.0, 600.0)
    }
}

/// Everything needed to generate and lay out one maze.
#[derive(PartialEq, Clone, Debug)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    /// None seeds the generator from the operating system.
    pub seed: Option<u64>,
    pub shuffle: ShuffleKind,
    pub viewport: Viewport,
    pub wall_thickness: f64,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,
            shuffle: ShuffleKind::Uniform,
            viewport: Viewport::default(),
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return configuration_error(format!("maze needs at least one row and one column, \
                                                got {} rows and {} columns",
                                               self.rows,
                                               self.columns));
        }
        self.viewport.validate()?;
        if !(self.wall_thickness > 0.0 && self.wall_thickness.is_finite()) {
            return configuration_error(format!("wall thickness {} must be positive",
                                               self.wall_thickness));
        }
        Ok(())
    }
}
