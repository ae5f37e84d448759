use log::{debug, info, trace};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use tokio::time::Instant;

use super::{
    clock::Clock,
    collision::{self, CollisionResult},
    config::GameConfig,
    direction::{Direction, TurnRejected},
    food::Rgb,
    grid::{Cell, Grid},
    state::{GameState, GameStatus},
    surface::Surface,
};

/// Color the snake is painted with
pub const SNAKE_COLOR: Rgb = Rgb::GREEN;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running
    Idle,
    /// The snake shifted one cell
    Moved,
    /// The snake ate and grew
    Ate,
    /// A fatal collision stopped the game
    GameOver(CollisionResult),
}

/// Notifications for whoever presents the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    FoodEaten { score: u32 },
    GameOver { cause: CollisionResult, score: u32 },
    Stopped,
}

/// Inbound commands from the input side
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Key(String),
}

/// The game loop: owns the state and the tick clock, paints onto an
/// optional surface.
pub struct Game<S> {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    clock: Clock,
    surface: Option<S>,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl<S: Surface> Game<S> {
    /// Create a stopped game with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game with a caller-supplied random source
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = GameState::initial(&config);
        Self {
            grid: config.grid(),
            clock: Clock::new(state.speed),
            state,
            config,
            surface: None,
            rng,
            events: Vec::new(),
        }
    }

    /// Bind (or unbind with `None`) the drawing target. Returns the
    /// previously attached one.
    pub fn attach_surface(&mut self, surface: Option<S>) -> Option<S> {
        std::mem::replace(&mut self.surface, surface)
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Reset everything and begin ticking. Does nothing while running.
    pub fn start(&mut self) {
        if self.state.is_running() {
            return;
        }

        self.state = GameState::initial(&self.config);
        self.state
            .food
            .place(&self.grid, &self.state.snake, &mut self.rng);
        self.state.status = GameStatus::Running;
        self.render();
        self.clock.arm(self.state.speed);

        info!(
            "game started on {}x{} grid, tick {:?}",
            self.grid.columns(),
            self.grid.rows(),
            self.state.speed
        );
        self.events.push(GameEvent::Started);
    }

    /// Cancel the clock, wipe the surface and return to the initial
    /// configuration. Does nothing when already stopped.
    pub fn stop(&mut self) {
        if !self.state.is_running() && !self.clock.is_armed() {
            return;
        }

        self.halt();
        info!("game stopped");
        self.events.push(GameEvent::Stopped);
    }

    /// Advance the game by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }

        let direction = self.state.direction.current();
        let moved = self.state.snake.advance(direction, self.grid.step);
        let result = collision::evaluate(&moved, &self.grid, self.state.food.current().as_ref());

        let outcome = match result {
            CollisionResult::Boundary | CollisionResult::SelfCollision => {
                let score = self.state.score;
                info!("game over: {:?} at {:?}, score {}", result, moved.head(), score);
                self.events.push(GameEvent::GameOver {
                    cause: result,
                    score,
                });
                self.halt();
                return TickOutcome::GameOver(result);
            }
            CollisionResult::FoodHit => {
                let grown = moved.grow();
                let (stale, _) = self.state.food.consume(&self.grid, &grown, &mut self.rng);
                if let Some(stale) = stale {
                    self.clear_cell(stale.cell);
                }

                self.state.snake = grown;
                self.state.score += 1;
                self.state.speed = self.next_speed();
                self.clock.set_interval(self.state.speed);

                debug!(
                    "food eaten, score {}, length {}, tick {:?}",
                    self.state.score,
                    self.state.snake.len(),
                    self.state.speed
                );
                self.events.push(GameEvent::FoodEaten {
                    score: self.state.score,
                });
                TickOutcome::Ate
            }
            CollisionResult::None => {
                self.state.snake = moved;
                TickOutcome::Moved
            }
        };

        self.render();
        self.state.direction.reset_latch();
        self.clock.rearm_after_fire(Instant::now());

        outcome
    }

    /// Feed one key press. Unrecognised keys are ignored.
    pub fn on_key_event(&mut self, key: &str) -> Result<Direction, TurnRejected> {
        let candidate = Direction::from_key(key).ok_or(TurnRejected::UnknownKey)?;

        if !self.state.is_running() {
            return Err(TurnRejected::NotRunning);
        }

        match self.state.direction.accept(candidate) {
            Ok(()) => Ok(candidate),
            Err(rejected) => {
                trace!("turn to {:?} rejected: {:?}", candidate, rejected);
                Err(rejected)
            }
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Key(key) => {
                let _ = self.on_key_event(&key);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Current tick interval
    pub fn speed(&self) -> Duration {
        self.state.speed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// When the next tick is due, `None` while stopped
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clock.deadline()
    }

    /// Take the notifications accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn next_speed(&self) -> Duration {
        let nanos = (self.state.speed.as_nanos() as f64 * self.config.speed_decay).round();
        Duration::from_nanos(nanos as u64).max(self.config.min_interval())
    }

    fn halt(&mut self) {
        self.clock.cancel();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear_rect(0, 0, self.grid.width, self.grid.height);
        }
        self.state = GameState::initial(&self.config);
    }

    fn clear_cell(&mut self, cell: Cell) {
        let size = self.grid.block_size();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear_rect(cell.x, cell.y, size, size);
        }
    }

    fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let size = self.grid.block_size();

        surface.clear_rect(0, 0, self.grid.width, self.grid.height);

        if let Some(food) = self.state.food.current() {
            surface.fill_rect(food.cell.x, food.cell.y, size, size, food.color);
        }

        for cell in &self.state.snake.body {
            surface.fill_rect(cell.x, cell.y, size, size, SNAKE_COLOR);
        }
    }
}
