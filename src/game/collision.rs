use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;

/// What the head ran into after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResult {
    None,
    /// Head left the grid
    Boundary,
    /// Head entered one of its own segments
    SelfCollision,
    /// Head landed on the food
    FoodHit,
}

impl CollisionResult {
    /// Fatal results end the game
    pub fn is_fatal(&self) -> bool {
        matches!(self, CollisionResult::Boundary | CollisionResult::SelfCollision)
    }
}

/// Classify the snake's head. Boundary is checked first, then the body,
/// then the food; a fatal result short-circuits the rest.
pub fn evaluate(snake: &Snake, grid: &Grid, food: Option<&Food>) -> CollisionResult {
    let head = snake.head();

    if grid.is_out_of_bounds(head) {
        return CollisionResult::Boundary;
    }

    if snake.body_segments().contains(&head) {
        return CollisionResult::SelfCollision;
    }

    match food {
        Some(food) if food.is_at(head) => CollisionResult::FoodHit,
        _ => CollisionResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::food::Rgb;
    use crate::game::grid::Cell;

    fn grid() -> Grid {
        Grid::new(1000, 1000, 40)
    }

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::new(cells.iter().map(|&(x, y)| Cell::new(x, y)).collect())
    }

    #[test]
    fn test_no_collision() {
        let s = snake(&[(40, 0), (0, 0)]);
        assert_eq!(evaluate(&s, &grid(), None), CollisionResult::None);
    }

    #[test]
    fn test_boundary() {
        let left = snake(&[(-40, 0), (0, 0)]);
        assert_eq!(evaluate(&left, &grid(), None), CollisionResult::Boundary);

        let right = snake(&[(1000, 0), (960, 0)]);
        assert_eq!(evaluate(&right, &grid(), None), CollisionResult::Boundary);
    }

    #[test]
    fn test_self_collision() {
        let s = snake(&[(0, 0), (40, 0), (40, 40), (0, 40), (0, 0)]);
        assert_eq!(evaluate(&s, &grid(), None), CollisionResult::SelfCollision);
    }

    #[test]
    fn test_food_hit() {
        let s = snake(&[(80, 0), (40, 0)]);
        let food = Food::new(Cell::new(80, 0), Rgb(1, 2, 3));
        let result = evaluate(&s, &grid(), Some(&food));
        assert_eq!(result, CollisionResult::FoodHit);
        assert!(!result.is_fatal());
    }

    #[test]
    fn test_fatal_takes_precedence_over_food() {
        // Food sitting on a body cell the head re-enters
        let s = snake(&[(0, 0), (40, 0), (40, 40), (0, 40), (0, 0)]);
        let food = Food::new(Cell::new(0, 0), Rgb(1, 2, 3));
        let result = evaluate(&s, &grid(), Some(&food));
        assert_eq!(result, CollisionResult::SelfCollision);
        assert!(result.is_fatal());
    }
}
