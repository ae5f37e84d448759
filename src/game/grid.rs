use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A grid-aligned position. Coordinates are in surface units and are
/// multiples of the grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one grid step in a direction
    pub fn stepped(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }
}

/// The playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    /// Edge length of one cell, also the distance moved per tick
    pub step: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, step: i32) -> Self {
        Self {
            width,
            height,
            step,
        }
    }

    pub fn is_out_of_bounds(&self, cell: Cell) -> bool {
        cell.x < 0
            || cell.x > self.width - self.step
            || cell.y < 0
            || cell.y > self.height - self.step
    }

    pub fn columns(&self) -> i32 {
        self.width / self.step
    }

    pub fn rows(&self) -> i32 {
        self.height / self.step
    }

    /// Drawn edge of a cell; one unit short of the step so grid lines show
    pub fn block_size(&self) -> i32 {
        (self.step - 1).max(1)
    }

    /// Uniformly random cell, quantized to the step
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let x = rng.gen_range(0..self.columns()) * self.step;
        let y = rng.gen_range(0..self.rows()) * self.step;
        Cell::new(x, y)
    }

    /// Every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).map(move |col| Cell::new(col * self.step, row * self.step))
        })
    }
}
