use super::direction::Direction;
use super::grid::Cell;

/// The snake, head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub body: Vec<Cell>,
}

impl Snake {
    pub fn new(body: Vec<Cell>) -> Self {
        Self { body }
    }

    /// Starting layout: head in the top-left corner with one segment below it
    pub fn initial(step: i32) -> Self {
        Self::new(vec![Cell::new(0, 0), Cell::new(0, step)])
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    /// Shift one step: new head in front, last segment dropped.
    /// Collisions are not checked here.
    pub fn advance(&self, direction: Direction, step: i32) -> Snake {
        let mut body = Vec::with_capacity(self.body.len());
        body.push(self.head().stepped(direction, step));
        body.extend_from_slice(&self.body[..self.body.len() - 1]);
        Snake { body }
    }

    /// Add one segment behind the tail, continuing the line from the
    /// second-to-last segment through the tail. Snakes shorter than two
    /// segments have no tail direction and are returned unchanged.
    pub fn grow(&self) -> Snake {
        let mut body = self.body.clone();
        if let [.., before_tail, tail] = self.body.as_slice() {
            body.push(tail.moved_by(tail.x - before_tail.x, tail.y - before_tail.y));
        }
        Snake { body }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let snake = Snake::initial(40);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(0, 0));
        assert_eq!(snake.tail(), Cell::new(0, 40));
    }

    #[test]
    fn test_advance_preserves_length() {
        let snake = Snake::initial(40);
        let moved = snake.advance(Direction::Right, 40);

        assert_eq!(moved.len(), 2);
        assert_eq!(moved.head(), Cell::new(40, 0));
        assert_eq!(moved.tail(), Cell::new(0, 0));
        // Original is untouched
        assert_eq!(snake.head(), Cell::new(0, 0));
    }

    #[test]
    fn test_grow_extends_tail_line() {
        let snake = Snake::initial(40);
        let grown = snake.grow();
        assert_eq!(grown.len(), 3);
        assert_eq!(grown.tail(), Cell::new(0, 80));

        let horizontal = Snake::new(vec![Cell::new(80, 0), Cell::new(40, 0), Cell::new(0, 0)]);
        assert_eq!(horizontal.grow().tail(), Cell::new(-40, 0));
    }

    #[test]
    fn test_grow_needs_two_segments() {
        let single = Snake::new(vec![Cell::new(0, 0)]);
        assert_eq!(single.grow(), single);
    }

    #[test]
    fn test_body_segments() {
        let snake = Snake::new(vec![Cell::new(0, 0), Cell::new(40, 0), Cell::new(80, 0)]);
        assert_eq!(snake.body_segments(), &[Cell::new(40, 0), Cell::new(80, 0)]);
        assert!(snake.contains(&Cell::new(80, 0)));
        assert!(!snake.contains(&Cell::new(120, 0)));
    }
}
