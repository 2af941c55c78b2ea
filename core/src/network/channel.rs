use std::io;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use pnet::datalink::{self, Channel, Config, DataLinkReceiver, DataLinkSender, NetworkInterface};
use pnet::ipnetwork::Ipv4Network;
use pnet::util::MacAddr;
use sweepr_common::error::SessionError;
use sweepr_common::network::arp::ArpFrame;
use sweepr_common::network::interface::Interface;
use sweepr_common::scanning::{ChannelOpener, DiscoveryChannel};
use sweepr_protocols::arp;
use tracing::{debug, trace};

/// Upper bound for a single blocking read, so `try_recv` can honour shorter deadlines.
const READ_SLICE: Duration = Duration::from_millis(50);
/// A zero read timeout would make pnet block indefinitely.
const MIN_READ_SLICE: Duration = Duration::from_millis(1);

/// ARP over a raw Ethernet channel.
pub struct ArpChannel {
    tx: Box<dyn DataLinkSender>,
    rx: Box<dyn DataLinkReceiver>,
    src_mac: MacAddr,
    src_addr: Ipv4Addr,
}

impl ArpChannel {
    pub fn new(
        tx: Box<dyn DataLinkSender>,
        rx: Box<dyn DataLinkReceiver>,
        src_mac: MacAddr,
        src_addr: Ipv4Addr,
    ) -> Self {
        Self { tx, rx, src_mac, src_addr }
    }
}

impl DiscoveryChannel for ArpChannel {
    fn send(&mut self, target: Ipv4Addr) -> anyhow::Result<()> {
        let frame = arp::create_request(self.src_mac, self.src_addr, target)?;
        match self.tx.send_to(&frame, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(e).with_context(|| format!("sending ARP request for {target}")),
            None => bail!("no room in the send buffer for {target}"),
        }
    }

    fn try_recv(&mut self, timeout: Duration) -> anyhow::Result<Option<ArpFrame>> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.rx.next() {
                Ok(bytes) => match arp::parse_frame(bytes) {
                    Ok(frame) => return Ok(Some(frame)),
                    Err(e) => trace!("skipping frame: {e:#}"),
                },
                Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {}
                Err(e) => return Err(e).context("reading from datalink channel"),
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
        }
    }
}

/// Opens channels with `pnet::datalink::channel`.
pub struct PnetChannelOpener {
    config: Config,
}

impl PnetChannelOpener {
    /// Single reads never block longer than `read_timeout`, the deadline of one poll.
    pub fn new(read_timeout: Duration) -> Self {
        Self {
            config: Config {
                read_timeout: Some(read_slice(read_timeout)),
                ..Default::default()
            },
        }
    }
}

fn read_slice(read_timeout: Duration) -> Duration {
    read_timeout.clamp(MIN_READ_SLICE, READ_SLICE)
}

impl ChannelOpener for PnetChannelOpener {
    fn open(
        &self,
        interface: &Interface,
        source: Ipv4Network,
    ) -> Result<Box<dyn DiscoveryChannel>, SessionError> {
        let to_error = |source: io::Error| SessionError::ChannelOpen {
            interface: interface.name.clone(),
            source,
        };

        let src_mac = interface.mac.ok_or_else(|| {
            to_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no hardware address", interface.name),
            ))
        })?;
        let intf = NetworkInterface::from(interface);
        let (tx, rx) = open_eth_channel(&intf, &self.config, datalink::channel).map_err(to_error)?;
        Ok(Box::new(ArpChannel::new(tx, rx, src_mac, source.ip())))
    }
}

pub fn open_eth_channel<F>(
    intf: &NetworkInterface,
    cfg: &Config,
    channel_opener: F,
) -> io::Result<(Box<dyn DataLinkSender>, Box<dyn DataLinkReceiver>)>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    match channel_opener(intf, *cfg)? {
        Channel::Ethernet(tx, rx) => {
            debug!("Channel opened on {}", intf.name);
            Ok((tx, rx))
        }
        _ => Err(io::Error::other(format!("non-ethernet channel for {}", intf.name))),
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
