//! Shared building blocks for `sweepr`.
//!
//! Holds the domain models (interfaces, address spaces, discovered hosts), the
//! traits the scan engine is written against, and the runtime configuration.
//! Nothing in here touches the network or the terminal.

pub mod config;
pub mod error;
pub mod network;
pub mod scanning;
pub mod system;
pub mod vendors;
