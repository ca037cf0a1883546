//! Shared application state for the sensorgrid gateway.
//!
//! Owns the device registry and the metrics store; both are handed out as
//! `Arc`s so the publisher task and every connection task read the same
//! instances for the process lifetime.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;
use crate::registry::DeviceRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Arc<DeviceRegistry>,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Build application state. The registry is seeded from the (already
    /// validated) config, keyed by device id.
    pub fn new(cfg: GatewayConfig) -> Self {
        let registry = Arc::new(DeviceRegistry::from_seed(cfg.devices.clone()));
        let metrics = Arc::new(GatewayMetrics::default());
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                metrics,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<DeviceRegistry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
