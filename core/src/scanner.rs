//! The sweep itself: fire one ARP request at every address of the subnet, then
//! pick replies off the channel one tick at a time.
//!
//! Nothing in here blocks for longer than the configured read timeout, so the
//! caller stays in charge of the loop and can redraw or react to input between
//! polls.

use std::time::Duration;

use sweepr_common::network::range::AddressSpace;
use sweepr_common::scanning::DiscoveryChannel;
use sweepr_common::vendors::VendorRepository;

mod collector;
mod dispatch;
mod results;

pub use collector::{PollOutcome, ReplyCollector};
pub use dispatch::{DispatchReport, dispatch};
pub use results::ScanResultSet;

/// State of the third stage: owns the discovery channel until the program exits.
pub struct ScanSession {
    channel: Box<dyn DiscoveryChannel>,
    space: AddressSpace,
    collector: ReplyCollector,
    report: DispatchReport,
    read_timeout: Duration,
}

impl ScanSession {
    /// Sends the probes for every address in `space` and returns the session
    /// that will collect the answers.
    pub fn start(mut channel: Box<dyn DiscoveryChannel>, space: AddressSpace, read_timeout: Duration) -> Self {
        let report = dispatch(channel.as_mut(), space.iter());
        Self {
            channel,
            space,
            collector: ReplyCollector::new(),
            report,
            read_timeout,
        }
    }

    pub fn poll(&mut self, vendors: &dyn VendorRepository) -> PollOutcome {
        self.collector.poll(self.channel.as_mut(), vendors, self.read_timeout)
    }

    pub fn results(&self) -> &ScanResultSet {
        self.collector.results()
    }

    pub fn address_space(&self) -> &AddressSpace {
        &self.space
    }

    pub fn report(&self) -> DispatchReport {
        self.report
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
