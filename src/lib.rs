//! **mazeball** carves perfect mazes and lays them out as static shapes for a ball-rolling game.
//!
//! ```no_run
//! let maze = mazeball::generators::generate(10, 14, Some(42)).unwrap();
//! println!("{}", maze);
//! ```

#![recursion_limit = "1024"] // error_chain

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod layout;
pub mod matrix;
pub mod maze;
mod maze_displays;
pub mod renderers;
pub mod scene;
pub mod shuffle;
pub mod units;

pub use crate::generators::generate;
pub use crate::maze::Maze;
