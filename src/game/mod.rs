//! Core game logic module for Snake
//!
//! Everything here is free of terminal I/O. The loop paints through the
//! [`Surface`] trait and takes input as key names, so any front end can
//! drive it.

pub mod clock;
pub mod collision;
pub mod config;
pub mod direction;
pub mod driver;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use clock::Clock;
pub use collision::CollisionResult;
pub use config::GameConfig;
pub use direction::{Direction, DirectionController, TurnRejected};
pub use driver::Status;
pub use engine::{Command, Game, GameEvent, TickOutcome};
pub use food::{Food, FoodManager, Rgb};
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GameState, GameStatus};
pub use surface::Surface;
