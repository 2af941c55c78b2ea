use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use std::net::Ipv4Addr;
use sweepr_common::error::SessionError;
use sweepr_common::network::interface::Interface;
use sweepr_common::network::range::AddressSpace;

use super::util::{ni, v4, v6};

/*************************************************************
                  Conversion from pnet interfaces
**************************************************************/

#[test]
fn keeps_name_index_mac_and_flags() {
    let intf = Interface::from(&wlan0());
    assert_eq!(intf.name, "wlan0");
    assert_eq!(intf.index, 3);
    assert_eq!(intf.mac, Some(MacAddr::new(0x3c, 0x22, 0xfb, 0x10, 0x20, 0x30)));
    assert_eq!(intf.flags, 69699);
    assert_eq!(intf.mtu, None);
}

#[test]
fn keeps_address_order() {
    let intf = Interface::from(&wlan0());
    assert_eq!(intf.ips, vec![v6("fe80::3e22:fbff:fe10:2030", 64), v4(192, 168, 178, 23, 24)]);
}

#[test]
fn converts_back_for_datalink() {
    let intf = Interface::from(&enp9s0()).with_mtu(9000);
    let back = NetworkInterface::from(&intf);
    assert_eq!(back.name, "enp9s0");
    assert_eq!(back.index, 2);
    assert_eq!(back.mac, enp9s0().mac);
    assert_eq!(back.ips, enp9s0().ips);
    assert_eq!(back.flags, enp9s0().flags);
}

/*************************************************************
                 Address spaces of interfaces
**************************************************************/

#[test]
fn every_ipv4_address_enumerates() {
    for intf in [lo(), enp9s0(), wlan0(), tun0()].iter().map(Interface::from) {
        for net in intf.ips.iter().filter(|n| n.is_ipv4()) {
            let space = AddressSpace::enumerate(net).unwrap();
            assert!(!space.is_empty(), "{} on {} enumerated nothing", net, intf.name);
            assert!(space.iter().all(|a| net.contains(a.into())));
        }
    }
}

#[test]
fn every_ipv6_address_is_rejected() {
    for intf in [lo(), enp9s0(), wlan0()].iter().map(Interface::from) {
        for net in intf.ips.iter().filter(|n| n.is_ipv6()) {
            let err = AddressSpace::enumerate(net).err().unwrap();
            assert!(matches!(err, SessionError::UnsupportedAddressFamily(_)));
        }
    }
}

#[test]
fn point_to_point_link_is_a_single_address() {
    let intf = Interface::from(&tun0());
    let space = AddressSpace::enumerate(&intf.ips[0]).unwrap();
    assert_eq!(space.as_slice(), &[Ipv4Addr::new(10, 8, 0, 2)]);
}

#[test]
fn sixteen_bit_lan_is_covered_completely() {
    let space = AddressSpace::enumerate(&enp9s0().ips[0]).unwrap();
    assert_eq!(space.len(), 65536);
    assert_eq!(space.iter().next(), Some(Ipv4Addr::new(172, 20, 0, 0)));
    assert_eq!(space.iter().last(), Some(Ipv4Addr::new(172, 20, 255, 255)));
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[v4(172, 20, 4, 17, 16), v6("fe80::b3dd:5c39:7c29:48b6", 64)],
        69699,
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x3c, 0x22, 0xfb, 0x10, 0x20, 0x30)),
        &[v6("fe80::3e22:fbff:fe10:2030", 64), v4(192, 168, 178, 23, 24)],
        69699,
    )
}

fn tun0() -> NetworkInterface {
    let ips: [IpNetwork; 1] = [v4(10, 8, 0, 2, 32)];
    ni("tun0", 7, None, &ips, 69841)
}
