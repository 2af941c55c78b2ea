use std::net::Ipv4Addr;
use std::time::Duration;

use sweepr_common::network::arp::ArpFrame;
use sweepr_common::network::host::DiscoveredHost;
use sweepr_common::scanning::DiscoveryChannel;
use sweepr_common::vendors::VendorRepository;
use tracing::{debug, trace};

use super::results::ScanResultSet;

/// What a single poll of the channel amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing arrived before the deadline, or the read failed.
    NoEvent,
    /// An ARP frame that is not a reply, e.g. our own request echoed back.
    Ignored,
    Duplicate(Ipv4Addr),
    Discovered(Ipv4Addr),
}

#[derive(Debug, Default)]
pub struct ReplyCollector {
    results: ScanResultSet,
}

impl ReplyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads at most one frame from `channel`, waiting no longer than `timeout`.
    pub fn poll(
        &mut self,
        channel: &mut dyn DiscoveryChannel,
        vendors: &dyn VendorRepository,
        timeout: Duration,
    ) -> PollOutcome {
        match channel.try_recv(timeout) {
            Ok(Some(frame)) => self.accept(frame, vendors),
            Ok(None) => PollOutcome::NoEvent,
            Err(e) => {
                trace!("read failed: {e:#}");
                PollOutcome::NoEvent
            }
        }
    }

    /// Records `frame` if it is a reply from an address not seen before.
    pub fn accept(&mut self, frame: ArpFrame, vendors: &dyn VendorRepository) -> PollOutcome {
        if !frame.is_reply() {
            return PollOutcome::Ignored;
        }
        if self.results.contains(frame.sender_ip) {
            return PollOutcome::Duplicate(frame.sender_ip);
        }

        let vendor = vendors.get_vendor(frame.sender_mac);
        debug!(
            ip = %frame.sender_ip,
            mac = %frame.sender_mac,
            vendor = vendor.as_deref().unwrap_or("-"),
            "host discovered"
        );
        let host = DiscoveredHost::new(frame.sender_ip, frame.sender_mac).with_vendor(vendor);
        self.results.insert(host);
        PollOutcome::Discovered(frame.sender_ip)
    }

    pub fn results(&self) -> &ScanResultSet {
        &self.results
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
