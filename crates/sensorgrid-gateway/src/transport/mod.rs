//! Transport layer (WebSocket).
//!
//! Exposes the WS upgrade handler and the per-connection query loop.

pub mod ws;
