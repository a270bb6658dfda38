use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use crate::errors::*;
use crate::layout::{Circle, Rect, SceneLayout};

const BACKGROUND: Rgb<u8> = Rgb([0x0f, 0x17, 0x2a]);
const WALL: Rgb<u8> = Rgb([0x38, 0xbd, 0xf8]);
const BOUNDARY: Rgb<u8> = Rgb([0x94, 0xa3, 0xb8]);
const GOAL: Rgb<u8> = Rgb([0xfc, 0xd3, 0x4d]);
const BALL: Rgb<u8> = Rgb([0xef, 0x44, 0x44]);

/// Largest image `render_layout` will allocate, in pixels.
pub const MAX_IMAGE_PIXELS: u64 = 1 << 26;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'path> {
    output_file: Option<&'path Path>,
    pixels_per_unit: f64,
    show_goal: bool,
    show_ball: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                output_file: None,
                pixels_per_unit: 1.0,
                show_goal: true,
                show_ball: true,
            },
        }
    }

    pub fn output_file(mut self, output_file: Option<&'path Path>) -> Self {
        self.options.output_file = output_file;
        self
    }

    pub fn pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.options.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn show_goal(mut self, show_goal: bool) -> Self {
        self.options.show_goal = show_goal;
        self
    }

    pub fn show_ball(mut self, show_ball: bool) -> Self {
        self.options.show_ball = show_ball;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

impl<'path> Default for RenderOptionsBuilder<'path> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Rasterize a layout: frame, walls, then goal and ball on top.
pub fn render_layout(layout: &SceneLayout, options: &RenderOptions) -> Result<RgbImage> {
    let scale = options.pixels_per_unit;
    if !(scale > 0.0 && scale.is_finite()) {
        return configuration_error(format!("pixels per unit {} must be positive", scale));
    }

    let (image_width, image_height) = image_size(layout, scale)?;
    let mut image = RgbImage::from_pixel(image_width, image_height, BACKGROUND);

    for rect in layout.boundary.iter() {
        fill_rect(&mut image, rect, scale, BOUNDARY);
    }
    for wall in &layout.walls {
        fill_rect(&mut image, &wall.rect, scale, WALL);
    }
    if options.show_goal {
        fill_rect(&mut image, &layout.goal, scale, GOAL);
    }
    if options.show_ball {
        fill_circle(&mut image, &layout.ball, scale, BALL);
    }

    Ok(image)
}

/// Pixel dimensions of the rendered layout, refused when over `MAX_IMAGE_PIXELS`.
fn image_size(layout: &SceneLayout, scale: f64) -> Result<(u32, u32)> {
    let width = (layout.extent.width * scale).ceil().max(1.0);
    let height = (layout.extent.height * scale).ceil().max(1.0);
    if !(width * height <= MAX_IMAGE_PIXELS as f64) {
        return configuration_error(format!("a {} x {} pixel image is over the {} pixel limit",
                                           width,
                                           height,
                                           MAX_IMAGE_PIXELS));
    }
    Ok((width as u32, height as u32))
}

/// Rasterize and save as a PNG to the configured output file.
pub fn render_png(layout: &SceneLayout, options: &RenderOptions) -> Result<()> {
    let path = match options.output_file {
        Some(p) => p,
        None => return configuration_error("no output file to render the maze image to"),
    };
    let image = render_layout(layout, options)?;
    image.save(path)
         .chain_err(|| format!("Failed to write maze image {}", path.display()))?;
    info!("wrote {}x{} maze image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Pixel span `[start, end)` covering `[from, to)` in layout units, clipped to `limit`.
fn pixel_span(from: f64, to: f64, scale: f64, limit: u32) -> (u32, u32) {
    let clip = |v: f64| v.max(0.0).min(limit as f64) as u32;
    (clip((from * scale).floor()), clip((to * scale).ceil()))
}

fn fill_rect(image: &mut RgbImage, rect: &Rect, scale: f64, colour: Rgb<u8>) {
    let (x0, x1) = pixel_span(rect.left(), rect.left() + rect.width, scale, image.width());
    let (y0, y1) = pixel_span(rect.top(), rect.top() + rect.height, scale, image.height());
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, colour);
        }
    }
}

fn fill_circle(image: &mut RgbImage, circle: &Circle, scale: f64, colour: Rgb<u8>) {
    let (cx, cy, r) = (circle.centre.x, circle.centre.y, circle.radius);
    let (x0, x1) = pixel_span(cx - r, cx + r, scale, image.width());
    let (y0, y1) = pixel_span(cy - r, cy + r, scale, image.height());
    let radius_squared = (r * scale) * (r * scale);
    for y in y0..y1 {
        for x in x0..x1 {
            // distance from the pixel centre
            let dx = x as f64 + 0.5 - cx * scale;
            let dy = y as f64 + 0.5 - cy * scale;
            if dx * dx + dy * dy <= radius_squared {
                image.put_pixel(x, y, colour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CellSize, LayoutOptions};
    use crate::maze::Maze;

    fn layout() -> SceneLayout {
        // one closed vertical wall between the two cells of the top row
        let maze = Maze::from_openings(&[vec![false], vec![true]], &[vec![true, true]]).unwrap();
        SceneLayout::build(&maze, CellSize::new(20.0, 20.0).unwrap(), &LayoutOptions {
            wall_thickness: 2.0,
            boundary_thickness: 2.0,
        })
    }

    #[test]
    fn image_covers_the_extent() {
        let options = RenderOptionsBuilder::new().pixels_per_unit(2.0).build();
        let image = render_layout(&layout(), &options).unwrap();
        assert_eq!(image.dimensions(), (80, 80));
    }

    #[test]
    fn shapes_are_painted() {
        let options = RenderOptionsBuilder::new().build();
        let image = render_layout(&layout(), &options).unwrap();
        // closed wall centred at (20, 10), 2 wide
        assert_eq!(*image.get_pixel(20, 5), WALL);
        // opened wall between the bottom cells
        assert_eq!(*image.get_pixel(20, 30), BACKGROUND);
        // ball centre and goal centre
        assert_eq!(*image.get_pixel(10, 10), BALL);
        assert_eq!(*image.get_pixel(30, 30), GOAL);
        // frame
        assert_eq!(*image.get_pixel(0, 20), BOUNDARY);
    }

    #[test]
    fn goal_and_ball_can_be_hidden() {
        let options = RenderOptionsBuilder::new().show_goal(false).show_ball(false).build();
        let image = render_layout(&layout(), &options).unwrap();
        assert_eq!(*image.get_pixel(10, 10), BACKGROUND);
        assert_eq!(*image.get_pixel(30, 30), BACKGROUND);
    }

    #[test]
    fn oversized_images_are_refused() {
        let options = RenderOptionsBuilder::new().pixels_per_unit(1.0e7).build();
        match render_layout(&layout(), &options) {
            Err(Error(ErrorKind::Configuration(_), _)) => {}
            other => panic!("expected a configuration error, got {:?}", other.map(|i| i.dimensions())),
        }

        // 8200 x 8200 is just over the limit
        let options = RenderOptionsBuilder::new().pixels_per_unit(205.0).build();
        assert!(render_layout(&layout(), &options).is_err());

        let options = RenderOptionsBuilder::new().pixels_per_unit(10.0).build();
        assert_eq!(render_layout(&layout(), &options).unwrap().dimensions(), (400, 400));
    }

    #[test]
    fn bad_scale_and_missing_output() {
        let options = RenderOptionsBuilder::new().pixels_per_unit(0.0).build();
        assert!(render_layout(&layout(), &options).is_err());
        let options = RenderOptionsBuilder::new().build();
        assert!(render_png(&layout(), &options).is_err());
    }
}
