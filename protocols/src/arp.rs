use std::net::Ipv4Addr;

use anyhow::{Context, ensure};
use pnet::packet::Packet;
use pnet::packet::arp::{ArpHardwareTypes, ArpOperations, ArpPacket, MutableArpPacket};
use pnet::packet::ethernet::EtherTypes;
use pnet::util::MacAddr;
use sweepr_common::network::arp::{ArpFrame, ArpOperation};

use crate::{ARP_LEN, ETH_HDR_LEN, MIN_ETH_FRAME_NO_FCS, ethernet};

/// Builds a broadcast "who has `dst_addr`, tell `src_addr`" frame.
pub fn create_request(src_mac: MacAddr, src_addr: Ipv4Addr, dst_addr: Ipv4Addr) -> anyhow::Result<Vec<u8>> {
    let mut buffer = [0u8; MIN_ETH_FRAME_NO_FCS];
    ethernet::make_header(&mut buffer, src_mac, MacAddr::broadcast(), EtherTypes::Arp)?;
    let mut arp_packet = MutableArpPacket::new(&mut buffer[ETH_HDR_LEN..ETH_HDR_LEN + ARP_LEN])
        .context("failed to create mutable ARP packet")?;
    arp_packet.set_hardware_type(ArpHardwareTypes::Ethernet);
    arp_packet.set_protocol_type(EtherTypes::Ipv4);
    arp_packet.set_hw_addr_len(6);
    arp_packet.set_proto_addr_len(4);
    arp_packet.set_operation(ArpOperations::Request);
    arp_packet.set_sender_hw_addr(src_mac);
    arp_packet.set_target_hw_addr(MacAddr::zero());
    arp_packet.set_sender_proto_addr(src_addr);
    arp_packet.set_target_proto_addr(dst_addr);
    Ok(Vec::from(buffer))
}

/// Extracts sender and operation from a raw Ethernet frame carrying ARP.
pub fn parse_frame(bytes: &[u8]) -> anyhow::Result<ArpFrame> {
    let ethernet_packet = ethernet::get_packet_from_u8(bytes)?;
    ensure!(
        ethernet_packet.get_ethertype() == EtherTypes::Arp,
        "not an ARP frame (ethertype {:?})",
        ethernet_packet.get_ethertype()
    );
    let arp_packet = ArpPacket::new(ethernet_packet.payload()).context(format!(
        "truncated or invalid ARP packet (payload len {})",
        ethernet_packet.payload().len()
    ))?;
    Ok(ArpFrame {
        sender_ip: arp_packet.get_sender_proto_addr(),
        sender_mac: arp_packet.get_sender_hw_addr(),
        operation: ArpOperation::from(arp_packet.get_operation().0),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
