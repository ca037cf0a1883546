//! Shared error type across sensorgrid crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SensorGridError>;

/// Unified error type used by core and gateway.
///
/// The query channel deliberately sends no error replies (unknown ids and
/// non-text frames are dropped), so every variant here is server-side only:
/// config rejection at boot, malformed input, or an internal fault.
#[derive(Debug, Error)]
pub enum SensorGridError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}
