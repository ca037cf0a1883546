//! Publisher cadence behavior, driven deterministically via `publish_now`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use sensorgrid_gateway::config::GatewayConfig;
use sensorgrid_gateway::obs::metrics::GatewayMetrics;
use sensorgrid_gateway::publisher::PublisherHandle;
use sensorgrid_gateway::registry::DeviceRegistry;

fn seeded() -> (Arc<DeviceRegistry>, Arc<GatewayMetrics>) {
    let cfg = GatewayConfig::default();
    (
        Arc::new(DeviceRegistry::from_seed(cfg.devices)),
        Arc::new(GatewayMetrics::default()),
    )
}

#[tokio::test]
async fn cycle_sets_both_gauges_per_device() {
    let (registry, metrics) = seeded();
    let publisher =
        PublisherHandle::spawn(registry, Arc::clone(&metrics), Duration::from_secs(3600));

    publisher.publish_now().await;

    let d1 = [("device", "device1")];
    let d2 = [("device", "device2")];
    assert_eq!(metrics.device_temperature.get(&d1), Some(22.5));
    assert_eq!(metrics.device_humidity.get(&d1), Some(60.0));
    assert_eq!(metrics.device_temperature.get(&d2), Some(20.0));
    assert_eq!(metrics.device_humidity.get(&d2), Some(50.0));
}

#[tokio::test]
async fn empty_registry_cycle_is_a_noop() {
    let registry = Arc::new(DeviceRegistry::from_seed(vec![]));
    let metrics = Arc::new(GatewayMetrics::default());
    let publisher = PublisherHandle::spawn(
        Arc::clone(&registry),
        Arc::clone(&metrics),
        Duration::from_secs(3600),
    );

    publisher.publish_now().await;

    assert!(registry.is_empty());
    let body = metrics.render();
    assert!(!body.contains("device_temperature_celsius{device="));
    // The cycle still counts; it just had nothing to set.
    assert!(metrics.publish_cycles.get(&[]) >= 1);
}

#[tokio::test]
async fn repeated_cycles_republish_same_seed_values() {
    let (registry, metrics) = seeded();
    let publisher =
        PublisherHandle::spawn(registry, Arc::clone(&metrics), Duration::from_secs(3600));

    publisher.publish_now().await;
    publisher.publish_now().await;

    assert_eq!(metrics.device_temperature.get(&[("device", "device1")]), Some(22.5));
    assert!(metrics.publish_cycles.get(&[]) >= 2);
}

#[tokio::test]
async fn shutdown_stops_the_cadence() {
    let (registry, metrics) = seeded();
    let publisher =
        PublisherHandle::spawn(registry, Arc::clone(&metrics), Duration::from_secs(3600));

    publisher.shutdown().await;

    // Commands are processed in order, so this one is dropped unanswered and
    // must not hang or run another cycle.
    let before = metrics.publish_cycles.get(&[]);
    publisher.publish_now().await;
    assert_eq!(metrics.publish_cycles.get(&[]), before);
}
