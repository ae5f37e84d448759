//! Cancellable repeating timer driving the game.
//!
//! The clock only holds the next deadline; whoever runs the event loop waits
//! on it with [`wait_for`] next to its other event sources. Cancelling drops
//! the deadline, so no tick can fire after `cancel` returns.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start firing every `interval`, first tick one interval from now
    pub fn arm(&mut self, interval: Duration) {
        self.interval = interval;
        self.deadline = Some(Instant::now() + interval);
    }

    /// Stop firing. Safe to call when not armed.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Change the cadence; takes effect from the next rearm
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Schedule the tick after the one that just fired. Keeps a steady
    /// cadence, but never schedules into the past if the loop fell behind.
    pub fn rearm_after_fire(&mut self, now: Instant) {
        if let Some(fired) = self.deadline {
            let next = fired + self.interval;
            self.deadline = Some(if next > now { next } else { now + self.interval });
        }
    }
}

/// Resolves at `deadline`, or never when there is none
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
