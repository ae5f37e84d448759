use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the unit delta (dx, dy) for moving in this direction.
    /// Screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a key name to a direction. Arrow key names and WASD letters are
    /// recognised, everything else is ignored.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Why a direction change was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRejected {
    /// The key does not map to a direction
    UnknownKey,
    /// The game is not running
    NotRunning,
    /// A change was already accepted since the last tick
    AlreadyChanged,
    /// The candidate is the exact opposite of the current direction
    Reversal,
}

/// Latches at most one direction change between two consecutive ticks.
///
/// Without the latch a quick `Up` then `Left` while moving right would be
/// applied as a single reversal by the next tick and run the head straight
/// into the neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionController {
    current: Direction,
    changed: bool,
}

impl DirectionController {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            changed: false,
        }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    /// Whether a change has been latched in the current tick window
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Try to switch to `candidate`
    pub fn accept(&mut self, candidate: Direction) -> Result<(), TurnRejected> {
        if self.changed {
            return Err(TurnRejected::AlreadyChanged);
        }
        if self.current.is_opposite(candidate) {
            return Err(TurnRejected::Reversal);
        }

        self.current = candidate;
        self.changed = true;
        Ok(())
    }

    /// Open the next input window. Called by the loop once movement for the
    /// tick has been computed.
    pub fn reset_latch(&mut self) {
        self.changed = false;
    }

    /// Force a direction and clear the latch
    pub fn reset(&mut self, direction: Direction) {
        self.current = direction;
        self.changed = false;
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}
