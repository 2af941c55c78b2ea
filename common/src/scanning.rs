//! The seams between the scan engine and the link layer.
//!
//! The engine only ever talks to a [`DiscoveryChannel`]; how ARP frames are
//! built, sent and captured is left to whoever implements it.

use std::net::Ipv4Addr;
use std::time::Duration;

use pnet::ipnetwork::Ipv4Network;

use crate::error::SessionError;
use crate::network::arp::ArpFrame;
use crate::network::interface::Interface;

pub trait DiscoveryChannel {
    /// Broadcasts one "who has `target`" request.
    fn send(&mut self, target: Ipv4Addr) -> anyhow::Result<()>;

    /// Waits at most `timeout` for the next ARP frame on the wire.
    ///
    /// `Ok(None)` means the deadline passed without one.
    fn try_recv(&mut self, timeout: Duration) -> anyhow::Result<Option<ArpFrame>>;
}

pub trait ChannelOpener {
    /// Opens a discovery channel on `interface`, sending from `source`.
    fn open(
        &self,
        interface: &Interface,
        source: Ipv4Network,
    ) -> Result<Box<dyn DiscoveryChannel>, SessionError>;
}
