//! Adapters from the host operating system to the ports in `sweepr_common`.

mod channel;
mod interface;

pub use channel::{ArpChannel, PnetChannelOpener, open_eth_channel};
pub use interface::SystemInterfaces;
