//! Headless event loop: commands in through a channel, status out through a
//! watch channel. Everything runs on one task, so a tick or a command always
//! completes before the next one is looked at.

use std::time::Duration;
use tokio::sync::{mpsc, watch};

use super::clock;
use super::engine::{Command, Game, GameEvent};
use super::surface::Surface;

/// Observable state for UI binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status {
    pub running: bool,
    pub score: u32,
    /// Current tick interval
    pub speed: Duration,
    /// Most recent notification from the game
    pub last_event: Option<GameEvent>,
}

/// Drive `game` until the command channel closes, then hand it back
pub async fn run<S: Surface>(
    mut game: Game<S>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    status: watch::Sender<Status>,
) -> Game<S> {
    publish(&mut game, &status);

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => game.apply(command),
                None => break,
            },
            _ = clock::wait_for(game.next_deadline()) => {
                game.tick();
            }
        }

        publish(&mut game, &status);
    }

    game
}

fn publish<S: Surface>(game: &mut Game<S>, status: &watch::Sender<Status>) {
    let last_event = game
        .drain_events()
        .pop()
        .or_else(|| status.borrow().last_event);

    status.send_replace(Status {
        running: game.is_running(),
        score: game.score(),
        speed: game.speed(),
        last_event,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::collision::CollisionResult;
    use crate::game::food::Rgb;
    use crate::game::grid::Cell;
    use crate::game::GameConfig;
    use rand::{rngs::StdRng, SeedableRng};
    use tokio::time::sleep;

    struct Blank;

    impl Surface for Blank {
        fn clear_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32) {}

        fn fill_rect(&mut self, _x: i32, _y: i32, _width: i32, _height: i32, _color: Rgb) {}
    }

    fn spawn() -> (
        mpsc::UnboundedSender<Command>,
        watch::Receiver<Status>,
        tokio::task::JoinHandle<Game<Blank>>,
    ) {
        let game = Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(11));
        let (tx, rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(Status::default());
        let handle = tokio::spawn(run(game, rx, status_tx));
        (tx, status_rx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_clock() {
        let (tx, status, handle) = spawn();
        tx.send(Command::Start).unwrap();

        // Ticks due at 500ms and at most 1000ms
        sleep(Duration::from_millis(1250)).await;
        assert!(status.borrow().running);

        drop(tx);
        let game = handle.await.unwrap();
        assert_eq!(game.state().snake.head(), Cell::new(80, 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_tick() {
        let (tx, status, handle) = spawn();
        tx.send(Command::Start).unwrap();
        sleep(Duration::from_millis(600)).await;

        tx.send(Command::Stop).unwrap();
        sleep(Duration::from_millis(5000)).await;
        {
            let status = status.borrow();
            assert!(!status.running);
            assert_eq!(status.score, 0);
            assert_eq!(status.last_event, Some(GameEvent::Stopped));
        }

        drop(tx);
        let game = handle.await.unwrap();
        assert_eq!(game.state().snake.head(), Cell::new(0, 0));
        assert!(game.next_deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fatal_collision_stops_loop() {
        let (tx, status, handle) = spawn();
        tx.send(Command::Start).unwrap();
        tx.send(Command::Key("ArrowUp".to_string())).unwrap();

        sleep(Duration::from_millis(700)).await;
        {
            let status = status.borrow();
            assert!(!status.running);
            assert_eq!(
                status.last_event,
                Some(GameEvent::GameOver {
                    cause: CollisionResult::Boundary,
                    score: 0
                })
            );
        }

        drop(tx);
        handle.await.unwrap();
    }
}
