use std::collections::HashSet;
use std::net::Ipv4Addr;

use sweepr_common::network::host::DiscoveredHost;

/// Hosts found during one sweep, in the order their first reply arrived.
///
/// Entries are only ever appended. The companion `seen` set is keyed by sender
/// address and decides whether a reply is new.
#[derive(Debug, Default)]
pub struct ScanResultSet {
    hosts: Vec<DiscoveredHost>,
    seen: HashSet<Ipv4Addr>,
}

impl ScanResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.seen.contains(&ip)
    }

    /// Appends `host` unless its address is already present.
    pub fn insert(&mut self, host: DiscoveredHost) -> bool {
        if !self.seen.insert(host.ip) {
            return false;
        }
        self.hosts.push(host);
        true
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DiscoveredHost> {
        self.hosts.iter()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &DiscoveredHost> {
        self.hosts.iter().rev()
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
