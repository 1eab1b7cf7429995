use super::MissionController;
use crate::{error, info, log};
use std::{sync::Arc, time::Duration};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::{CancellationToken, DropGuard};

/// Background worker advancing a mission by one tick per interval.
///
/// Pausing and stopping are cooperative: a tick already running completes,
/// afterwards the worker blocks on the pause flag or exits. A paused worker
/// is released by both [`SimRunner::resume`] and [`SimRunner::stop`]. Once
/// the mission ends the worker exits on its own. Dropping the runner stops it.
pub struct SimRunner {
    paused: watch::Sender<bool>,
    c_tok: CancellationToken,
    handle: JoinHandle<()>,
    _stop_on_drop: DropGuard,
}

impl SimRunner {
    /// Wall-clock pacing of one simulated second.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Spawns the worker on the current tokio runtime.
    pub fn start(controller: Arc<MissionController>, interval: Duration) -> Self {
        let (paused, paused_rx) = watch::channel(false);
        let c_tok = CancellationToken::new();
        let handle = tokio::spawn(Self::run(controller, paused_rx, c_tok.clone(), interval));
        info!("Simulation runner started with {}ms per tick.", interval.as_millis());
        Self { paused, _stop_on_drop: c_tok.clone().drop_guard(), c_tok, handle }
    }

    /// Holds the worker before its next tick.
    pub fn pause(&self) { Self::set_paused(&self.paused, true); }

    /// Wakes a paused worker immediately.
    pub fn resume(&self) { Self::set_paused(&self.paused, false); }

    /// Asks the worker to exit, idempotent.
    pub fn stop(&self) { self.c_tok.cancel(); }

    pub fn is_paused(&self) -> bool { *self.paused.borrow() }

    /// Waits for the worker to exit, either after [`SimRunner::stop`] or
    /// once the mission ended.
    pub async fn join(self) {
        let Self { handle, .. } = self;
        if let Err(e) = handle.await {
            error!("Simulation runner terminated abnormally: {e}");
        }
    }

    fn set_paused(paused: &watch::Sender<bool>, value: bool) {
        paused.send_if_modified(|p| {
            let changed = *p != value;
            *p = value;
            changed
        });
    }

    async fn run(
        controller: Arc<MissionController>,
        mut paused: watch::Receiver<bool>,
        c_tok: CancellationToken,
        interval: Duration,
    ) {
        loop {
            if !controller.is_mission_active().await {
                log!("Mission ended, simulation runner exiting.");
                return;
            }
            let resumed = tokio::select! {
                biased;
                () = c_tok.cancelled() => false,
                res = async { paused.wait_for(|p| !*p).await.is_ok() } => res,
            };
            if !resumed {
                break;
            }
            tokio::select! {
                biased;
                () = c_tok.cancelled() => break,
                res = paused.changed() => {
                    if res.is_err() {
                        break;
                    }
                    // paused mid-interval, wait for resume and start a fresh one
                    continue;
                }
                () = tokio::time::sleep(interval) => {}
            }
            controller.advance(1).await;
        }
        log!("Simulation runner stopped.");
    }
}
