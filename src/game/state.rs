use std::time::Duration;

use super::config::GameConfig;
use super::direction::{Direction, DirectionController};
use super::food::FoodManager;
use super::snake::Snake;

/// Whether ticks are being fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Stopped,
    Running,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: FoodManager,
    pub direction: DirectionController,
    pub status: GameStatus,
    pub score: u32,
    /// Current tick interval
    pub speed: Duration,
}

impl GameState {
    /// The configuration every game starts from and returns to on stop
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            snake: Snake::initial(config.step),
            food: FoodManager::new(config.food_avoids_snake),
            direction: DirectionController::new(Direction::Right),
            status: GameStatus::Stopped,
            score: 0,
            speed: config.base_interval(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
