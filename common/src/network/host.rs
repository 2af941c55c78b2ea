use std::net::Ipv4Addr;

use pnet::util::MacAddr;

/// A host that answered one of our ARP requests.
///
/// Built once per responding address and never touched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredHost {
    pub ip: Ipv4Addr,
    pub mac: MacAddr,
    pub vendor: Option<String>,
}

impl DiscoveredHost {
    pub fn new(ip: Ipv4Addr, mac: MacAddr) -> Self {
        Self {
            ip,
            mac,
            vendor: None,
        }
    }

    pub fn with_vendor(mut self, vendor: Option<String>) -> Self {
        self.vendor = vendor;
        self
    }

    pub fn vendor_or_empty(&self) -> &str {
        self.vendor.as_deref().unwrap_or("")
    }
}
