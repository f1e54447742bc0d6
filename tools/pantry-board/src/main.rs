//! Pantry discount board.
//!
//! Loads a product-list snapshot, then refreshes every product's price,
//! discount badge and countdown once per interval, the way a mounted
//! product screen does. Stops after `--ticks` refreshes or on Ctrl-C, and
//! cancels its timer on the way out.

mod render;
mod ticker;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pantry_common::parse_timestamp;
use pantry_common::product::read_snapshot;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::EnvFilter;

use ticker::{spawn_ticker, Clock, Snapshot};

#[derive(Parser)]
#[command(name = "pantry-board", about = "Live discount countdowns for a product snapshot")]
struct Cli {
    /// Product-list JSON as returned by the backend.
    #[arg(long)]
    snapshot: PathBuf,

    /// Refresh interval in milliseconds.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Stop after this many refreshes (runs until Ctrl-C when omitted).
    #[arg(long)]
    ticks: Option<u64>,

    /// Re-read the snapshot file every N seconds.
    #[arg(long)]
    reload_secs: Option<u64>,

    /// Evaluate from this instant (RFC 3339) instead of the wall clock.
    #[arg(long)]
    now: Option<String>,

    /// Print each board as a JSON object instead of text lines.
    #[arg(long)]
    json: bool,
}

fn load(path: &Path) -> Result<Snapshot> {
    let products = read_snapshot(path)
        .with_context(|| format!("loading snapshot {}", path.display()))?;
    Ok(Arc::new(products))
}

/// Periodically re-read the snapshot file. A bad read keeps the previous
/// snapshot on screen.
async fn reload_loop(path: PathBuf, every: Duration, tx: watch::Sender<Snapshot>) {
    let mut interval = tokio::time::interval(every);
    interval.tick().await;
    loop {
        interval.tick().await;
        match load(&path) {
            Ok(snapshot) => {
                tracing::debug!(products = snapshot.len(), "snapshot reloaded");
                if tx.send(snapshot).is_err() {
                    return;
                }
            }
            Err(e) => tracing::warn!("snapshot reload failed: {e:#}"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.interval_ms > 0, "--interval-ms must be positive");

    let clock = match cli.now.as_deref() {
        Some(raw) => {
            let base = parse_timestamp(raw).with_context(|| format!("invalid --now: {raw}"))?;
            Clock::pinned(base)
        }
        None => Clock::System,
    };

    let snapshot = load(&cli.snapshot)?;
    tracing::info!(
        products = snapshot.len(),
        path = %cli.snapshot.display(),
        "snapshot loaded"
    );

    let (snapshot_tx, snapshot_rx) = watch::channel(snapshot);
    let (boards_tx, mut boards) = mpsc::unbounded_channel();

    let handle = spawn_ticker(
        Duration::from_millis(cli.interval_ms),
        snapshot_rx,
        clock,
        move |products, board| {
            let _ = boards_tx.send((products, board));
        },
    );

    let reload = cli.reload_secs.filter(|s| *s > 0).map(|secs| {
        tokio::spawn(reload_loop(
            cli.snapshot.clone(),
            Duration::from_secs(secs),
            snapshot_tx,
        ))
    });

    let mut seen = 0u64;
    loop {
        tokio::select! {
            board = boards.recv() => {
                let Some((products, board)) = board else { break };
                if cli.json {
                    println!("{}", serde_json::to_string(&board)?);
                } else {
                    for line in render::render_lines(&products, &board) {
                        println!("{line}");
                    }
                    println!();
                }
                seen += 1;
                if cli.ticks.is_some_and(|n| seen >= n) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }
    }

    handle.cancel();
    if let Some(task) = reload {
        task.abort();
    }
    tracing::info!(ticks = seen, "board stopped");
    Ok(())
}
