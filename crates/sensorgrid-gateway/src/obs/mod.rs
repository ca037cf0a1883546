//! Lightweight in-process metrics (dependency-free).
//!
//! Metrics are stored as atomics behind `DashMap` label keys and rendered in
//! Prometheus text format by the `/metrics` handler. The device gauge series
//! are written only by the publisher task; scrapes read whatever the last
//! completed cycle stored.

pub mod metrics;
