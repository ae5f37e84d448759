//! Grid Snake - the simulation core of a grid-based snake game
//!
//! This library provides:
//! - Core game logic: grid, snake body, food, collisions, direction latch
//!   and the tick-driven game loop (game module)
//! - Terminal input mapping (input module)
//! - A cell canvas and TUI rendering (render module)
//! - Per-session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
