//! sensorgrid core: domain types, query protocol, and the shared error surface.
//!
//! This crate defines the device model and the wire-level reply contract
//! shared by the gateway and by test tooling. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SensorGridError`/`Result` so the
//! gateway process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod device;
pub mod error;
pub mod protocol;

pub use device::Device;

/// Shared result type.
pub use error::{Result, SensorGridError};
