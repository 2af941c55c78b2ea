//! # Address Space
//!
//! Expands an interface address into the list of IPv4 hosts that share its
//! broadcast domain, i.e. the addresses a sweep should send ARP requests to.

use std::net::Ipv4Addr;

use pnet::ipnetwork::{IpNetwork, Ipv4Network};

use crate::error::SessionError;

/// Every IPv4 address of a subnet, in ascending order.
///
/// Only the two trailing octets are walked. For a /16 or anything narrower that
/// is the whole subnet; for a wider mask the result is limited to the /16 block
/// holding the interface address. Sweeping more than 65536 hosts one ARP request
/// at a time is not something this tool sets out to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    network: Ipv4Network,
    addrs: Vec<Ipv4Addr>,
}

impl AddressSpace {
    pub fn enumerate(net: &IpNetwork) -> Result<Self, SessionError> {
        let IpNetwork::V4(network) = net else {
            return Err(SessionError::UnsupportedAddressFamily(net.ip()));
        };
        let [first, second, _, _] = network.ip().octets();

        let addrs: Vec<Ipv4Addr> = (0..=255u8)
            .flat_map(|third| (0..=255u8).map(move |fourth| Ipv4Addr::new(first, second, third, fourth)))
            .filter(|addr| network.contains(*addr))
            .collect();

        Ok(Self {
            network: *network,
            addrs,
        })
    }

    pub fn network(&self) -> Ipv4Network {
        self.network
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        self.addrs.iter().copied()
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.addrs
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
