use serde::Deserialize;
use sensorgrid_core::error::{Result, SensorGridError};
use sensorgrid_core::Device;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    /// Seed set loaded into the registry at boot. Defaults to the canonical
    /// two-device fixture; devices cannot be added or removed at runtime.
    #[serde(default = "default_devices")]
    pub devices: Vec<Device>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            devices: default_devices(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SensorGridError::Config("version must be 1".into()));
        }

        self.gateway.validate()?;

        let mut seen = std::collections::HashSet::new();
        for d in &self.devices {
            if d.id.is_empty() {
                return Err(SensorGridError::Config("device id must not be empty".into()));
            }
            if d.name.is_empty() {
                return Err(SensorGridError::Config(format!(
                    "device {} must have a name",
                    d.id
                )));
            }
            if !seen.insert(d.id.as_str()) {
                return Err(SensorGridError::Config(format!(
                    "duplicate device id: {}",
                    d.id
                )));
            }
            if !d.temperature.is_finite() {
                return Err(SensorGridError::Config(format!(
                    "device {} temperature must be finite",
                    d.id
                )));
            }
            if !(0.0..=100.0).contains(&d.humidity) {
                return Err(SensorGridError::Config(format!(
                    "device {} humidity must be between 0 and 100",
                    d.id
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_publish_interval_ms")]
    pub publish_interval_ms: u64,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            publish_interval_ms: default_publish_interval_ms(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(500..=300_000).contains(&self.publish_interval_ms) {
            return Err(SensorGridError::Config(
                "gateway.publish_interval_ms must be between 500 and 300000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "127.0.0.1:8080".into()
}

fn default_publish_interval_ms() -> u64 {
    5000
}

fn default_devices() -> Vec<Device> {
    vec![
        Device {
            id: "device1".into(),
            name: "Living Room".into(),
            temperature: 22.5,
            humidity: 60.0,
        },
        Device {
            id: "device2".into(),
            name: "Kitchen".into(),
            temperature: 20.0,
            humidity: 50.0,
        },
    ]
}
