use docopt::Docopt;
use log::{info, LevelFilter};
use serde_derive::Deserialize;
use mazeball::config::{MazeConfig, Viewport};
use mazeball::generators;
use mazeball::layout::SceneLayout;
use mazeball::renderers;
use mazeball::shuffle::ShuffleKind;
use std::fs;
use std::path::Path;
use std::process;

const USAGE: &str = "Mazeball

Usage:
    mazeball_driver -h | --help
    mazeball_driver [--rows=<n>] [--columns=<n>] [--seed=<n>] [--legacy-shuffle] [--viewport-width=<w>] [--viewport-height=<h>] [--wall-thickness=<t>] [--text-out=<path>] [--no-text] [--image-out=<path>] [--pixels-per-unit=<n>] [--quiet]

Options:
    -h --help                Show this screen.
    --rows=<n>               Number of cell rows in the maze [default: 10].
    --columns=<n>            Number of cell columns in the maze [default: 14].
    --seed=<n>               Seed for the random generator. The same seed always carves the same maze.
    --legacy-shuffle         Shuffle neighbours with the biased full-range swap instead of Fisher-Yates.
    --viewport-width=<w>     Width of the area the maze is laid out in [default: 840].
    --viewport-height=<h>    Height of the area the maze is laid out in [default: 600].
    --wall-thickness=<t>     Thickness of the walls between cells [default: 10].
    --text-out=<path>        Write the text rendering of the maze to a file instead of stdout.
    --no-text                Skip the text rendering.
    --image-out=<path>       Output file path for an image rendering of the maze. Always PNG format.
    --pixels-per-unit=<n>    Image pixels per layout unit [default: 1].
    --quiet                  Only log warnings and errors.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_legacy_shuffle: bool,
    flag_viewport_width: f64,
    flag_viewport_height: f64,
    flag_wall_thickness: f64,
    flag_text_out: String,
    flag_no_text: bool,
    flag_image_out: String,
    flag_pixels_per_unit: f64,
    flag_quiet: bool,
}

impl MazeArgs {
    fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.flag_rows,
            columns: self.flag_columns,
            seed: self.flag_seed,
            shuffle: if self.flag_legacy_shuffle {
                ShuffleKind::Legacy
            } else {
                ShuffleKind::Uniform
            },
            viewport: Viewport::new(self.flag_viewport_width, self.flag_viewport_height),
            wall_thickness: self.flag_wall_thickness,
        }
    }
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazeball::errors::Error, ::mazeball::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn parse_args<I, S>(argv: I) -> ::std::result::Result<MazeArgs, docopt::Error>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())
}

fn main() {

    let args = parse_args(std::env::args()).unwrap_or_else(|e| e.exit());

    let level = if args.flag_quiet { LevelFilter::Warn } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(ref e) = run(&args) {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(args: &MazeArgs) -> Result<()> {
    let config = args.maze_config();
    let maze = generators::generate_from_config(&config)?;
    info!("generated a {}x{} maze with {} openings",
          config.rows,
          config.columns,
          maze.openings_count());

    if !args.flag_no_text {
        if args.flag_text_out.is_empty() {
            println!("{}", maze);
        } else {
            fs::write(&args.flag_text_out, format!("{}", maze))
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        }
    }

    if !args.flag_image_out.is_empty() {
        let layout = SceneLayout::from_config(&maze, &config)?;
        let render_options = renderers::RenderOptionsBuilder::new()
            .output_file(Some(Path::new(&args.flag_image_out)))
            .pixels_per_unit(args.flag_pixels_per_unit)
            .build();
        renderers::render_png(&layout, &render_options)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_parses() {
        let args = parse_args(&["mazeball_driver",
                                "--rows=3",
                                "--columns=4",
                                "--seed=9",
                                "--legacy-shuffle",
                                "--viewport-width=300",
                                "--viewport-height=200",
                                "--wall-thickness=4",
                                "--text-out=maze.txt",
                                "--no-text",
                                "--image-out=maze.png",
                                "--pixels-per-unit=2",
                                "--quiet"])
            .unwrap();
        assert_eq!(args.flag_text_out, "maze.txt");
        assert!(args.flag_no_text);
        assert_eq!(args.flag_image_out, "maze.png");
        assert_eq!(args.flag_pixels_per_unit, 2.0);
        assert!(args.flag_quiet);

        let config = args.maze_config();
        assert_eq!(config,
                   MazeConfig {
                       rows: 3,
                       columns: 4,
                       seed: Some(9),
                       shuffle: ShuffleKind::Legacy,
                       viewport: Viewport::new(300.0, 200.0),
                       wall_thickness: 4.0,
                   });
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse_args(&["mazeball_driver"]).unwrap();
        assert_eq!(args.maze_config(), MazeConfig::default());
        assert!(args.flag_text_out.is_empty());
        assert!(args.flag_image_out.is_empty());
        assert!(!args.flag_no_text);
        assert!(!args.flag_quiet);
        assert_eq!(args.flag_pixels_per_unit, 1.0);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(parse_args(&["mazeball_driver", "--colour=red"]).is_err());
        assert!(parse_args(&["mazeball_driver", "--rows=many"]).is_err());
    }

    #[test]
    fn user_errors_are_returned_not_raised() {
        let args = parse_args(&["mazeball_driver", "--rows=0", "--no-text"]).unwrap();
        match run(&args) {
            Err(Error(ErrorKind::Maze(mazeball::errors::ErrorKind::Configuration(_)), _)) => {}
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }
}
