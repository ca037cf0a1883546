//! Metrics publisher: periodic registry -> gauge refresh.
//!
//! Runs as a command-driven task so the cadence can be cancelled (or driven
//! deterministically in tests) without touching the publish logic:
//!
//! ```text
//! Timer tick -> snapshot registry -> set device gauges
//!     ^
//!     +--- Commands (PublishNow, Shutdown)
//! ```
//!
//! Each tick is independent: `MissedTickBehavior::Skip` means a cycle that
//! overruns the cadence drops ticks instead of queueing a burst. A cycle over
//! an empty registry is a no-op, not an error; publishing cannot fail.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::obs::metrics::GatewayMetrics;
use crate::registry::DeviceRegistry;

/// Control messages for the publisher task.
#[derive(Debug)]
pub enum PublisherCommand {
    /// Run one cycle immediately and ack when it has completed.
    PublishNow { respond_to: oneshot::Sender<()> },
    /// Stop the task.
    Shutdown,
}

/// Handle to a spawned publisher. Dropping the handle closes the command
/// channel and stops the task.
pub struct PublisherHandle {
    command_tx: mpsc::Sender<PublisherCommand>,
}

impl PublisherHandle {
    /// Spawn the publisher loop on a new task.
    pub fn spawn(
        registry: Arc<DeviceRegistry>,
        metrics: Arc<GatewayMetrics>,
        cadence: Duration,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::channel(8);
        let actor = MetricsPublisher {
            registry,
            metrics,
            cadence,
            command_rx,
        };
        tokio::spawn(actor.run());
        Self { command_tx }
    }

    /// Run one publish cycle now and wait for it to complete.
    ///
    /// Used by tests to observe a completed cycle without waiting out the
    /// cadence. Returns once the cycle has finished (or the task is gone).
    pub async fn publish_now(&self) {
        let (respond_to, done) = oneshot::channel();
        if self
            .command_tx
            .send(PublisherCommand::PublishNow { respond_to })
            .await
            .is_ok()
        {
            let _ = done.await;
        }
    }

    /// Ask the task to stop. Idempotent; dropping the handle has the same
    /// effect.
    pub async fn shutdown(&self) {
        let _ = self.command_tx.send(PublisherCommand::Shutdown).await;
    }
}

struct MetricsPublisher {
    registry: Arc<DeviceRegistry>,
    metrics: Arc<GatewayMetrics>,
    cadence: Duration,
    command_rx: mpsc::Receiver<PublisherCommand>,
}

impl MetricsPublisher {
    async fn run(mut self) {
        tracing::debug!(cadence_ms = self.cadence.as_millis() as u64, "publisher starting");

        // First cycle lands one cadence after start, matching the fixed
        // five-second rhythm rather than publishing immediately on boot.
        let mut ticker = interval_at(Instant::now() + self.cadence, self.cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.publish_cycle();
                }

                cmd = self.command_rx.recv() => match cmd {
                    Some(PublisherCommand::PublishNow { respond_to }) => {
                        self.publish_cycle();
                        let _ = respond_to.send(());
                    }
                    Some(PublisherCommand::Shutdown) | None => break,
                },
            }
        }

        tracing::debug!("publisher stopped");
    }

    /// One cycle: set both gauges for every device currently registered.
    fn publish_cycle(&self) {
        for d in self.registry.snapshot() {
            let labels = [("device", d.id.as_str())];
            self.metrics.device_temperature.set(&labels, d.temperature);
            self.metrics.device_humidity.set(&labels, d.humidity);
        }
        self.metrics.publish_cycles.inc(&[]);
    }
}
