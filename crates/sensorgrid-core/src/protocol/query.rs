//! Query reply (JSON, Text frame).

use serde::{Deserialize, Serialize};

use crate::device::Device;

/// Reply to a device-id query.
///
/// Wire field names are part of the contract: readings travel as `temp` and
/// `hum`. Unknown ids produce no reply at all, so this is the only outbound
/// message the channel ever carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReply {
    /// Device id, echoed from the request.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Temperature reading, °C.
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Humidity reading, percent.
    #[serde(rename = "hum")]
    pub humidity: f64,
}

impl From<&Device> for QueryReply {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            temperature: d.temperature,
            humidity: d.humidity,
        }
    }
}
