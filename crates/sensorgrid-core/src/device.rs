//! Device value entity.

use serde::{Deserialize, Serialize};

/// One simulated telemetry device.
///
/// Seeded once at process start and never mutated afterwards; the registry
/// stores it under its `id`, and readers always receive a copy. Serde is
/// derived so the config file can declare the seed set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Device {
    /// Unique device id; equals the registry key it is stored under.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Current temperature reading, °C.
    pub temperature: f64,
    /// Current relative humidity reading, percent.
    pub humidity: f64,
}
