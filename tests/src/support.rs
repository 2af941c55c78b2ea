//! A simulated LAN behind the session's ports.
//!
//! Requests go through the real frame builder and answers come back as raw
//! Ethernet frames through the real parser, so only the wire itself is fake.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::net::Ipv4Addr;
use std::rc::Rc;
use std::time::Duration;

use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use pnet::packet::arp::{ArpHardwareTypes, ArpOperations, MutableArpPacket};
use pnet::packet::ethernet::{EtherTypes, MutableEthernetPacket};
use pnet::util::MacAddr;
use sweepr_common::config::Config;
use sweepr_common::error::SessionError;
use sweepr_common::network::arp::ArpFrame;
use sweepr_common::network::interface::Interface;
use sweepr_common::scanning::{ChannelOpener, DiscoveryChannel};
use sweepr_common::system::InterfaceRepository;
use sweepr_common::vendors::VendorRepository;
use sweepr_core::session::Session;
use sweepr_protocols::arp;

pub const GATEWAY_MAC: MacAddr = MacAddr(0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22);

#[derive(Default)]
pub struct Wire {
    pub requests: Vec<Ipv4Addr>,
    pub frames: VecDeque<Vec<u8>>,
}

#[derive(Clone, Default)]
pub struct Lan {
    hosts: HashMap<Ipv4Addr, MacAddr>,
    answers_per_request: usize,
    wire: Rc<RefCell<Wire>>,
}

impl Lan {
    pub fn new() -> Self {
        Self {
            answers_per_request: 1,
            ..Default::default()
        }
    }

    pub fn with_host(mut self, ip: Ipv4Addr, mac: MacAddr) -> Self {
        self.hosts.insert(ip, mac);
        self
    }

    /// Every live host answers each request this many times.
    pub fn chatty(mut self, answers: usize) -> Self {
        self.answers_per_request = answers;
        self
    }

    pub fn requests(&self) -> Vec<Ipv4Addr> {
        self.wire.borrow().requests.clone()
    }

    pub fn pending_frames(&self) -> usize {
        self.wire.borrow().frames.len()
    }
}

struct LanChannel {
    lan: Lan,
    src_mac: MacAddr,
    src_addr: Ipv4Addr,
}

impl DiscoveryChannel for LanChannel {
    fn send(&mut self, target: Ipv4Addr) -> anyhow::Result<()> {
        let request = arp::create_request(self.src_mac, self.src_addr, target)?;
        let mut wire = self.lan.wire.borrow_mut();
        wire.requests.push(target);
        // A capture sees its own broadcasts too.
        wire.frames.push_back(request);
        if let Some(mac) = self.lan.hosts.get(&target) {
            for _ in 0..self.lan.answers_per_request {
                wire.frames.push_back(reply_frame(target, *mac, self.src_addr, self.src_mac));
            }
        }
        Ok(())
    }

    fn try_recv(&mut self, _timeout: Duration) -> anyhow::Result<Option<ArpFrame>> {
        match self.lan.wire.borrow_mut().frames.pop_front() {
            Some(bytes) => Ok(Some(arp::parse_frame(&bytes)?)),
            None => Ok(None),
        }
    }
}

pub struct LanOpener {
    lan: Lan,
    failure: Option<io::ErrorKind>,
}

impl LanOpener {
    pub fn new(lan: Lan) -> Self {
        Self { lan, failure: None }
    }

    pub fn unprivileged() -> Self {
        Self {
            lan: Lan::new(),
            failure: Some(io::ErrorKind::PermissionDenied),
        }
    }
}

impl ChannelOpener for LanOpener {
    fn open(
        &self,
        interface: &Interface,
        source: Ipv4Network,
    ) -> Result<Box<dyn DiscoveryChannel>, SessionError> {
        if let Some(kind) = self.failure {
            return Err(SessionError::ChannelOpen {
                interface: interface.name.clone(),
                source: io::Error::new(kind, "Operation not permitted"),
            });
        }
        Ok(Box::new(LanChannel {
            lan: self.lan.clone(),
            src_mac: interface.mac.unwrap_or(MacAddr::zero()),
            src_addr: source.ip(),
        }))
    }
}

pub struct StaticInterfaces(pub Vec<Interface>);

impl InterfaceRepository for StaticInterfaces {
    fn interfaces(&self) -> anyhow::Result<Vec<Interface>> {
        Ok(self.0.clone())
    }

    fn addresses(&self, interface: &Interface) -> anyhow::Result<Vec<IpNetwork>> {
        Ok(interface.ips.clone())
    }
}

pub struct VendorTable(pub HashMap<MacAddr, String>);

impl VendorRepository for VendorTable {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        self.0.get(&mac_addr).cloned()
    }
}

pub fn session(interfaces: Vec<Interface>, opener: LanOpener) -> Session {
    let vendors = VendorTable(HashMap::from([(GATEWAY_MAC, "Acme Networks".to_string())]));
    Session::new(
        Box::new(StaticInterfaces(interfaces)),
        Box::new(opener),
        Box::new(vendors),
        &Config::default(),
    )
    .unwrap()
}

pub fn eth0(ips: Vec<IpNetwork>) -> Interface {
    Interface::new("eth0", 2)
        .with_mac(MacAddr::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x02))
        .with_mtu(1500)
        .with_ips(ips)
}

fn reply_frame(sender_ip: Ipv4Addr, sender_mac: MacAddr, target_ip: Ipv4Addr, target_mac: MacAddr) -> Vec<u8> {
    let mut buffer = vec![0u8; 42];
    {
        let mut eth = MutableEthernetPacket::new(&mut buffer).unwrap();
        eth.set_destination(target_mac);
        eth.set_source(sender_mac);
        eth.set_ethertype(EtherTypes::Arp);
    }
    let mut arp_pkt = MutableArpPacket::new(&mut buffer[14..]).unwrap();
    arp_pkt.set_hardware_type(ArpHardwareTypes::Ethernet);
    arp_pkt.set_protocol_type(EtherTypes::Ipv4);
    arp_pkt.set_hw_addr_len(6);
    arp_pkt.set_proto_addr_len(4);
    arp_pkt.set_operation(ArpOperations::Reply);
    arp_pkt.set_sender_hw_addr(sender_mac);
    arp_pkt.set_sender_proto_addr(sender_ip);
    arp_pkt.set_target_hw_addr(target_mac);
    arp_pkt.set_target_proto_addr(target_ip);
    buffer
}
