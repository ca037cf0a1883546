//! In-memory device registry: the single source of truth for readings.
//!
//! Seed-only: entries are inserted once at boot and never mutated afterwards,
//! so every access is a lock-free read. Callers always receive a copy of the
//! stored `Device`; should a write path ever be added, the whole-value
//! insert/clone contract keeps partially-written devices unobservable.

use dashmap::DashMap;

use sensorgrid_core::Device;

/// Registry: `device_id -> Device`.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: DashMap<String, Device>,
}

impl DeviceRegistry {
    /// Build the registry from the seed set, keyed by each device's id.
    pub fn from_seed(seed: Vec<Device>) -> Self {
        let devices = DashMap::new();
        for d in seed {
            devices.insert(d.id.clone(), d);
        }
        Self { devices }
    }

    /// Look up a device by id, copying the value out.
    pub fn get(&self, id: &str) -> Option<Device> {
        self.devices.get(id).map(|r| r.value().clone())
    }

    /// Copy out all devices. Iteration order is unspecified; the publisher
    /// keys each gauge sample by device id, so order never matters.
    pub fn snapshot(&self) -> Vec<Device> {
        self.devices.iter().map(|r| r.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
