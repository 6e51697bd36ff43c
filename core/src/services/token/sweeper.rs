//! Background sweeper purging expired token records
//!
//! The sweeper owns no correctness: validation already deletes dead
//! records it encounters, so a missed sweep only delays cleanup. Failures
//! are therefore logged and swallowed, and the next tick retries.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::errors::StoreError;
use crate::repositories::TokenRepository;

/// Configuration for the expiry sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether the background task runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

/// Periodic task deleting token records past their expiry
pub struct TokenSweeper<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: SweeperConfig,
}

/// Handle to a running sweeper task
///
/// The task lifecycle is tied to this handle: `shutdown` stops it
/// explicitly, and dropping the handle aborts it. There is no ambient
/// global timer.
pub struct SweeperHandle {
    task: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl SweeperHandle {
    /// Signals the sweeper loop to stop
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl<R: TokenRepository> TokenSweeper<R> {
    /// Create a new sweeper over the given repository
    pub fn new(repository: Arc<R>, config: SweeperConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    ///
    /// Idempotent: a second consecutive run with no newly expired records
    /// deletes nothing.
    pub async fn run_sweep(&self) -> Result<usize, StoreError> {
        let deleted = self.repository.delete_expired().await?;
        if deleted > 0 {
            info!(deleted, "swept expired token records");
        }
        Ok(deleted)
    }

    /// Start the sweeper as a background task
    ///
    /// Spawns a tokio task running a sweep every `interval_seconds` until
    /// the returned handle shuts it down. The first tick fires after one
    /// full interval, not immediately.
    pub fn start(self: Arc<Self>) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            if !self.config.enabled {
                warn!("token sweeper is disabled");
                return;
            }

            let period = std::time::Duration::from_secs(self.config.interval_seconds);
            let mut interval = tokio::time::interval(period);
            // Consume the immediate first tick so sweeps start one period in
            interval.tick().await;

            info!(
                interval_seconds = self.config.interval_seconds,
                "token sweeper started"
            );

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if let Err(err) = self.run_sweep().await {
                            // Swallowed: the next tick retries, and
                            // validation deletes dead records it meets
                            error!(error = %err, "sweep cycle failed");
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        info!("token sweeper stopped");
                        break;
                    }
                }
            }
        });

        SweeperHandle {
            task,
            shutdown: shutdown_tx,
        }
    }
}
