//! arogya-cli library root.
//!
//! Exposes the profile store and command implementations so integration
//! tests can drive them without spawning the binary.

pub mod commands;
pub mod store;
