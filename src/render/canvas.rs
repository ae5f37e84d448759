use crate::game::{Grid, Rgb, Surface};

/// In-memory surface with one color slot per grid cell. Rectangles are
/// snapped to the cells they overlap; anything off the board is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    step: i32,
    columns: i32,
    rows: i32,
    cells: Vec<Option<Rgb>>,
}

impl Canvas {
    pub fn new(grid: &Grid) -> Self {
        let columns = grid.columns().max(0);
        let rows = grid.rows().max(0);
        Self {
            step: grid.step,
            columns,
            rows,
            cells: vec![None; (columns * rows) as usize],
        }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Color at a column/row, `None` when blank or off the board
    pub fn get(&self, column: i32, row: i32) -> Option<Rgb> {
        if column < 0 || row < 0 || column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[(row * self.columns + column) as usize]
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn paint(&mut self, x: i32, y: i32, width: i32, height: i32, value: Option<Rgb>) {
        if width <= 0 || height <= 0 {
            return;
        }

        let first_col = x.div_euclid(self.step).max(0);
        let last_col = (x + width - 1).div_euclid(self.step).min(self.columns - 1);
        let first_row = y.div_euclid(self.step).max(0);
        let last_row = (y + height - 1).div_euclid(self.step).min(self.rows - 1);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                self.cells[(row * self.columns + col) as usize] = value;
            }
        }
    }
}

impl Surface for Canvas {
    fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.paint(x, y, width, height, None);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.paint(x, y, width, height, Some(color));
    }
}
