//! Top-level facade crate for sensorgrid.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use sensorgrid_core::*;
}

pub mod gateway {
    pub use sensorgrid_gateway::*;
}
