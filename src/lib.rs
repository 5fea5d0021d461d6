//! parkmap-rs
//!
//! Workspace umbrella crate. Re-exports [`parkmap_core`] so the demos in
//! `demos/` can be run from the repository root:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! ```
pub use parkmap_core::*;
