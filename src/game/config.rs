use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::Grid;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playable surface
    pub width: i32,
    /// Height of the playable surface
    pub height: i32,
    /// Edge length of one cell, also the distance moved per tick
    pub step: i32,
    /// Tick interval at the start of a game, in milliseconds
    pub base_interval_ms: u64,
    /// Factor applied to the tick interval each time food is eaten
    pub speed_decay: f64,
    /// The tick interval never drops below this, in milliseconds
    pub min_interval_ms: u64,
    /// Resample food that would land on the snake
    pub food_avoids_snake: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            step: 40,
            base_interval_ms: 500,
            speed_decay: 0.9,
            min_interval_ms: 40,
            food_avoids_snake: true,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom surface size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(400, 400)
    }

    /// Read a JSON config file. Missing fields take their default value.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height, self.step)
    }

    pub fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.step <= 0 {
            return Err(format!("step must be positive, got {}", self.step));
        }

        // The starting snake is one column wide and two rows tall
        let min_height = self
            .step
            .checked_mul(2)
            .ok_or_else(|| format!("step {} is too large", self.step))?;
        if self.width < self.step || self.height < min_height {
            return Err(format!(
                "surface {}x{} is too small for a two-cell snake with step {}",
                self.width, self.height, self.step
            ));
        }

        if self.base_interval_ms == 0 {
            return Err("base_interval_ms must be at least 1".to_string());
        }

        if !(self.speed_decay > 0.0 && self.speed_decay < 1.0) {
            return Err(format!(
                "speed_decay must be in (0, 1), got {}",
                self.speed_decay
            ));
        }

        if self.min_interval_ms == 0 {
            return Err("min_interval_ms must be at least 1".to_string());
        }

        if self.min_interval_ms > self.base_interval_ms {
            return Err(format!(
                "min_interval_ms ({}) cannot exceed base_interval_ms ({})",
                self.min_interval_ms, self.base_interval_ms
            ));
        }

        Ok(())
    }
}
