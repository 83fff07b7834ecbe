//! TTL Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! TTL, plus the handle used to stop it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Controls the lifetime of one reaper task.
///
/// The stop signal is idempotent: calling [`stop`](Self::stop) any number
/// of times, before or after the task has exited, never panics or blocks.
/// Once stopped the reaper is gone for good; a new cache must be built if
/// reaping is needed again.
#[derive(Debug)]
pub struct ReaperHandle {
    /// Stop signal; the reaper also exits if this sender is dropped
    stop_tx: watch::Sender<bool>,
    /// Join handle for the spawned task
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop without waiting for it to exit.
    ///
    /// Safe to call more than once; a send after the task has exited is
    /// simply ignored.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Signals the reaper and waits for the task to finish.
    ///
    /// After this returns, no further reap pass will run, so teardown of
    /// the owning application can proceed safely.
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.task.await;
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

// == Spawn Reaper ==
/// Spawns the background task that sweeps expired entries.
///
/// On every tick the task takes the write lock on the store and removes
/// each entry whose age exceeds `ttl`. The first sweep happens one full
/// `tick` after spawning, never immediately. The sweep and any concurrent
/// add/get serialize through the store's lock, so neither side observes a
/// half-applied change.
///
/// # Arguments
/// * `store` - shared entry map, also written by `TimedCache::add`
/// * `ttl` - maximum entry age before removal
/// * `tick` - interval between sweeps, typically much shorter than `ttl`
pub fn spawn_reaper_task(
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
    tick: Duration,
) -> ReaperHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!(ttl_ms = ttl.as_millis() as u64, tick_ms = tick.as_millis() as u64, "reaper started");

        let mut ticker = tokio::time::interval(tick);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // interval() yields its first tick immediately; consume it so the
        // first sweep lands one full tick after construction.
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = stop_rx.changed() => {
                    // A dropped sender counts as a stop too.
                    let _ = changed;
                    info!("reaper stopped");
                    return;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut store = store.write().await;
                        store.reap_expired(ttl)
                    };

                    if removed > 0 {
                        info!(removed, "reaped expired cache entries");
                    } else {
                        debug!("reap pass found no expired entries");
                    }
                }
            }
        }
    });

    ReaperHandle { stop_tx, task }
}
