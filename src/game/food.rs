//! Food placement and consumption

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Random samples tried before falling back to scanning the free cells
const PLACEMENT_ATTEMPTS: usize = 64;

/// Display color of a food cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0, 128, 0);

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb(rng.gen(), rng.gen(), rng.gen())
    }
}

/// A food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub color: Rgb,
}

impl Food {
    pub fn new(cell: Cell, color: Rgb) -> Self {
        Self { cell, color }
    }

    pub fn is_at(&self, cell: Cell) -> bool {
        self.cell == cell
    }
}

/// Owns the single food item
#[derive(Debug, Clone, Default)]
pub struct FoodManager {
    current: Option<Food>,
    avoid_snake: bool,
}

impl FoodManager {
    /// `avoid_snake` turns on rejection sampling against the snake body.
    /// Without it a new food may land on an occupied cell.
    pub fn new(avoid_snake: bool) -> Self {
        Self {
            current: None,
            avoid_snake,
        }
    }

    pub fn current(&self) -> Option<Food> {
        self.current
    }

    /// Replace the current food with one at a known cell
    pub fn set(&mut self, food: Food) {
        self.current = Some(food);
    }

    /// Draw a new random food and make it current
    pub fn place<R: Rng + ?Sized>(&mut self, grid: &Grid, excluding: &Snake, rng: &mut R) -> Food {
        let cell = if self.avoid_snake {
            Self::free_cell(grid, excluding, rng)
        } else {
            grid.random_cell(rng)
        };

        let food = Food::new(cell, Rgb::random(rng));
        self.current = Some(food);
        food
    }

    /// Swap the eaten food for a fresh one. Returns the stale food (whose
    /// cell the renderer should clear) and its replacement.
    pub fn consume<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        excluding: &Snake,
        rng: &mut R,
    ) -> (Option<Food>, Food) {
        let stale = self.current.take();
        let fresh = self.place(grid, excluding, rng);
        (stale, fresh)
    }

    /// Drop the current food, handing back the cell that is now stale
    pub fn clear(&mut self) -> Option<Food> {
        self.current.take()
    }

    fn free_cell<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Cell {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let cell = grid.random_cell(rng);
            if !snake.contains(&cell) {
                return cell;
            }
        }

        // Crowded board: pick among what is left
        let free: Vec<Cell> = grid.cells().filter(|c| !snake.contains(c)).collect();
        if free.is_empty() {
            warn!("no free cell left for food, placing it on the snake");
            return grid.random_cell(rng);
        }
        free[rng.gen_range(0..free.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_place_sets_current() {
        let grid = Grid::new(1000, 1000, 40);
        let mut rng = StdRng::seed_from_u64(1);
        let mut manager = FoodManager::new(true);

        assert_eq!(manager.current(), None);
        let food = manager.place(&grid, &Snake::initial(40), &mut rng);
        assert_eq!(manager.current(), Some(food));
        assert!(!grid.is_out_of_bounds(food.cell));
    }

    #[test]
    fn test_place_avoids_snake_on_crowded_board() {
        // 3x1 board with two cells taken leaves exactly one choice
        let grid = Grid::new(120, 40, 40);
        let snake = Snake::new(vec![Cell::new(0, 0), Cell::new(40, 0)]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut manager = FoodManager::new(true);

        for _ in 0..50 {
            let food = manager.place(&grid, &snake, &mut rng);
            assert_eq!(food.cell, Cell::new(80, 0));
        }
    }

    #[test]
    fn test_unchecked_placement_stays_on_grid() {
        let grid = Grid::new(200, 120, 40);
        let snake = Snake::new(vec![Cell::new(0, 0), Cell::new(40, 0), Cell::new(80, 0)]);
        let mut rng = StdRng::seed_from_u64(13);
        let mut manager = FoodManager::new(false);

        let mut landed_on_snake = false;
        for _ in 0..200 {
            let food = manager.place(&grid, &snake, &mut rng);
            assert_eq!(food.cell.x % 40, 0);
            assert_eq!(food.cell.y % 40, 0);
            assert!(!grid.is_out_of_bounds(food.cell));
            assert_eq!(manager.current(), Some(food));
            landed_on_snake |= snake.contains(&food.cell);
        }
        // 3 of 15 cells are taken; 200 draws all missing them is not credible
        assert!(landed_on_snake);
    }

    #[test]
    fn test_full_board_still_places_food() {
        let grid = Grid::new(80, 40, 40);
        let snake = Snake::new(vec![Cell::new(0, 0), Cell::new(40, 0)]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut manager = FoodManager::new(true);

        let food = manager.place(&grid, &snake, &mut rng);
        assert!(snake.contains(&food.cell));
    }

    #[test]
    fn test_consume_replaces_food() {
        let grid = Grid::new(1000, 1000, 40);
        let mut rng = StdRng::seed_from_u64(9);
        let mut manager = FoodManager::new(true);
        let eaten = Food::new(Cell::new(40, 0), Rgb(255, 0, 0));
        manager.set(eaten);

        let snake = Snake::new(vec![Cell::new(40, 0), Cell::new(0, 0), Cell::new(0, 40)]);
        let (stale, fresh) = manager.consume(&grid, &snake, &mut rng);

        assert_eq!(stale, Some(eaten));
        assert_eq!(manager.current(), Some(fresh));
        assert!(!snake.contains(&fresh.cell));
    }

    #[test]
    fn test_clear() {
        let mut manager = FoodManager::new(false);
        let food = Food::new(Cell::new(0, 0), Rgb::GREEN);
        manager.set(food);
        assert_eq!(manager.clear(), Some(food));
        assert_eq!(manager.current(), None);
        assert_eq!(manager.clear(), None);
    }
}
