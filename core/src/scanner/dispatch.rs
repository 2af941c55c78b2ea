use std::net::Ipv4Addr;

use sweepr_common::scanning::DiscoveryChannel;
use tracing::{debug, trace};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
}

/// Sends one ARP request per target, in order, without waiting for anything.
///
/// A failed send is counted and otherwise ignored: a host that never hears
/// from us simply never shows up.
pub fn dispatch<I>(channel: &mut dyn DiscoveryChannel, targets: I) -> DispatchReport
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    let mut report = DispatchReport::default();
    for target in targets {
        match channel.send(target) {
            Ok(()) => report.sent += 1,
            Err(e) => {
                trace!("request for {target} not sent: {e:#}");
                report.failed += 1;
            }
        }
    }
    debug!(sent = report.sent, failed = report.failed, "ARP requests dispatched");
    report
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
