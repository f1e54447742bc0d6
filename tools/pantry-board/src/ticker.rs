//! One-second refresh loop for a mounted product screen.
//!
//! The ticker owns the timer. Each tick takes the latest snapshot from a
//! `watch` channel, builds a fresh [`DisplayBoard`] and hands both to the
//! caller, so the board is always drawn against the products it was
//! computed from. Cancelling or dropping the [`TickerHandle`] stops the timer.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use pantry_common::display::DisplayBoard;
use pantry_common::product::Product;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub type Snapshot = Arc<Vec<Product>>;

/// Source of the evaluation instant for each tick.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    /// Starts at a fixed instant and advances with the runtime's clock.
    Pinned { base: DateTime<Utc>, started: Instant },
}

impl Clock {
    pub fn pinned(base: DateTime<Utc>) -> Self {
        Clock::Pinned {
            base,
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Pinned { base, started } => {
                let elapsed = chrono::Duration::from_std(started.elapsed())
                    .unwrap_or_else(|_| chrono::Duration::zero());
                *base + elapsed
            }
        }
    }
}

/// Cancels the ticker when cancelled or dropped.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start ticking every `period`. The first tick fires immediately; missed
/// ticks are skipped rather than replayed.
pub fn spawn_ticker<F>(
    period: Duration,
    mut snapshot: watch::Receiver<Snapshot>,
    clock: Clock,
    mut on_tick: F,
) -> TickerHandle
where
    F: FnMut(Snapshot, DisplayBoard) + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let products = snapshot.borrow_and_update().clone();
            let board = DisplayBoard::compute(&products, clock.now());
            tracing::trace!(products = board.len(), "tick");
            on_tick(products, board);
        }
    });
    TickerHandle { task }
}
