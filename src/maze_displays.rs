use std::fmt;

use crate::maze::Maze;

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";
const CELL_BODY: &str = "   "; // 3 spaces

impl Maze {
    /// Is there a wall along the horizontal boundary line `boundary_row` (0 = top of the maze)
    /// under column `col`.
    fn horizontal_wall_at(&self, boundary_row: usize, col: usize) -> bool {
        let rows = self.rows().0;
        if boundary_row == 0 || boundary_row == rows {
            return true;
        }
        !self.horizontals().get(boundary_row - 1, col).unwrap_or(false)
    }

    /// Is there a wall along the vertical boundary line `boundary_col` (0 = left of the maze)
    /// beside row `row`.
    fn vertical_wall_at(&self, row: usize, boundary_col: usize) -> bool {
        let cols = self.columns().0;
        if boundary_col == 0 || boundary_col == cols {
            return true;
        }
        !self.verticals().get(row, boundary_col - 1).unwrap_or(false)
    }

    /// The glyph where boundary lines meet, picked from which of the four arms have a wall.
    fn corner_glyph(&self, point_row: usize, point_col: usize) -> &'static str {
        let (rows, cols) = (self.rows().0, self.columns().0);

        let left = point_col > 0 && self.horizontal_wall_at(point_row, point_col - 1);
        let right = point_col < cols && self.horizontal_wall_at(point_row, point_col);
        let up = point_row > 0 && self.vertical_wall_at(point_row - 1, point_col);
        let down = point_row < rows && self.vertical_wall_at(point_row, point_col);

        match (left, right, up, down) {
            (true, true, true, true) => WALL_LRUD,
            (true, true, true, false) => WALL_LRU,
            (true, true, false, true) => WALL_LRD,
            (true, false, true, true) => WALL_LUD,
            (false, true, true, true) => WALL_RUD,
            (true, true, false, false) => WALL_LR,
            (false, false, true, true) => WALL_UD,
            (false, true, true, false) => WALL_RU,
            (true, false, true, false) => WALL_LU,
            (false, true, false, true) => WALL_RD,
            (true, false, false, true) => WALL_LD,
            (true, false, false, false) => WALL_L,
            (false, true, false, false) => WALL_R,
            (false, false, true, false) => WALL_U,
            (false, false, false, true) => WALL_D,
            (false, false, false, false) => " ",
        }
    }
}

/// Box drawing text view of the maze, row 0 at the top.
///
/// Every cell is 3 glyphs wide and one line tall. Each grid row is drawn as the boundary line
/// above it followed by the cell bodies; the bottom boundary comes last.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (rows, cols) = (self.rows().0, self.columns().0);

        let mut output = String::new();
        for point_row in 0..(rows + 1) {
            for point_col in 0..(cols + 1) {
                output.push_str(self.corner_glyph(point_row, point_col));
                if point_col < cols {
                    if self.horizontal_wall_at(point_row, point_col) {
                        output.push_str(WALL_LR_3);
                    } else {
                        output.push_str(CELL_BODY);
                    }
                }
            }
            output.push('\n');

            if point_row < rows {
                let row = point_row;
                for boundary_col in 0..(cols + 1) {
                    if self.vertical_wall_at(row, boundary_col) {
                        output.push_str(WALL_UD);
                    } else {
                        output.push(' ');
                    }
                    if boundary_col < cols {
                        output.push_str(CELL_BODY);
                    }
                }
                output.push('\n');
            }
        }

        write!(f, "{}", output)
    }
}
