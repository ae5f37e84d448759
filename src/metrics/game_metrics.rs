use std::time::{Duration, Instant};

use crate::game::{CollisionResult, GameEvent};

/// How the previous game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub cause: CollisionResult,
    pub score: u32,
}

/// Stats for the current process only; nothing is written to disk.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub last_game_over: Option<GameOverSummary>,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            last_game_over: None,
            running: false,
        }
    }

    /// Refresh the elapsed time; frozen while no game is running
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => self.on_game_start(),
            GameEvent::GameOver { cause, score } => self.on_game_over(cause, score),
            GameEvent::Stopped => self.running = false,
            GameEvent::FoodEaten { score } => self.high_score = self.high_score.max(score),
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.last_game_over = None;
        self.running = true;
    }

    pub fn on_game_over(&mut self, cause: CollisionResult, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        self.last_game_over = Some(GameOverSummary {
            cause,
            score: final_score,
        });
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
