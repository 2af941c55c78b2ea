use std::net::Ipv4Addr;

use pnet::util::MacAddr;
use sweepr_common::network::interface::Interface;
use sweepr_core::scanner::PollOutcome;
use sweepr_core::session::{Action, Session, Stage};

use crate::net::util::{v4, v6};
use crate::support::{eth0, session, Lan, LanOpener, GATEWAY_MAC};

fn press(session: &mut Session, actions: &[Action]) {
    for action in actions {
        assert!(session.handle(*action).unwrap().is_continue());
    }
}

/// Ticks until the wire is quiet, returning what each tick produced.
fn drain(session: &mut Session) -> Vec<PollOutcome> {
    let mut outcomes = Vec::new();
    loop {
        match session.tick() {
            PollOutcome::NoEvent => return outcomes,
            outcome => outcomes.push(outcome),
        }
    }
}

/*************************************************************
                         Popups
**************************************************************/

#[test]
fn interface_without_addresses_keeps_selection() {
    let interfaces = vec![eth0(vec![v4(192, 168, 1, 10, 24)]), Interface::new("dummy0", 9)];
    let mut session = session(interfaces, LanOpener::new(Lan::new()));

    press(&mut session, &[Action::Down, Action::Confirm]);
    assert_eq!(session.stage(), Stage::SelectInterface);
    assert_eq!(session.popup(), Some("No available addresses for this interface!"));

    press(&mut session, &[Action::Confirm]);
    assert_eq!(session.popup(), None);
    assert_eq!(session.stage(), Stage::SelectInterface);
    assert_eq!(session.cursor(), 1);
}

#[test]
fn ipv6_address_is_refused() {
    let lan = Lan::new();
    let interfaces = vec![eth0(vec![v6("fe80::42:acff:fe11:2", 64), v4(192, 168, 1, 10, 24)])];
    let mut session = session(interfaces, LanOpener::new(lan.clone()));

    press(&mut session, &[Action::Confirm, Action::Confirm]);
    assert_eq!(session.stage(), Stage::SelectAddress);
    assert_eq!(session.popup(), Some("ARP is not supported for IPv6!"));
    assert!(lan.requests().is_empty());

    press(&mut session, &[Action::Confirm, Action::Down, Action::Confirm]);
    assert_eq!(session.stage(), Stage::Scanning);
}

#[test]
fn missing_privileges_ask_for_root() {
    let interfaces = vec![eth0(vec![v4(10, 0, 0, 5, 24)])];
    let mut session = session(interfaces, LanOpener::unprivileged());

    press(&mut session, &[Action::Confirm, Action::Confirm]);
    assert_eq!(session.stage(), Stage::SelectAddress);
    assert_eq!(session.popup(), Some("Please run the program as root!"));
    assert!(session.results().is_none());
}

/*************************************************************
                         Sweeps
**************************************************************/

#[test]
fn sweep_probes_whole_subnet_once() {
    let lan = Lan::new();
    let mut session = session(vec![eth0(vec![v4(192, 168, 1, 10, 24)])], LanOpener::new(lan.clone()));
    press(&mut session, &[Action::Confirm, Action::Confirm]);

    let expected: Vec<Ipv4Addr> = (0..=255u8).map(|d| Ipv4Addr::new(192, 168, 1, d)).collect();
    assert_eq!(lan.requests(), expected);
    assert_eq!(session.scan().unwrap().report().sent, 256);
    assert_eq!(session.scan().unwrap().report().failed, 0);
}

#[test]
fn duplicate_replies_give_one_entry() {
    let gateway = Ipv4Addr::new(192, 168, 1, 42);
    let lan = Lan::new().with_host(gateway, GATEWAY_MAC).chatty(2);
    let mut session = session(vec![eth0(vec![v4(192, 168, 1, 10, 24)])], LanOpener::new(lan.clone()));
    press(&mut session, &[Action::Confirm, Action::Confirm]);

    let outcomes = drain(&mut session);
    assert_eq!(lan.pending_frames(), 0);

    let discovered: Vec<&PollOutcome> = outcomes.iter().filter(|o| matches!(o, PollOutcome::Discovered(_))).collect();
    assert_eq!(discovered, vec![&PollOutcome::Discovered(gateway)]);
    assert!(outcomes.contains(&PollOutcome::Duplicate(gateway)));

    let results = session.results().unwrap();
    assert_eq!(results.len(), 1);
    let host = results.iter().next().unwrap();
    assert_eq!(host.ip, gateway);
    assert_eq!(host.mac, MacAddr::new(0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22));
    assert_eq!(host.vendor.as_deref(), Some("Acme Networks"));
}

#[test]
fn own_requests_are_not_hosts() {
    let lan = Lan::new();
    let mut session = session(vec![eth0(vec![v4(10, 0, 0, 5, 28)])], LanOpener::new(lan.clone()));
    press(&mut session, &[Action::Confirm, Action::Confirm]);

    let outcomes = drain(&mut session);
    assert_eq!(outcomes.len(), 16);
    assert!(outcomes.iter().all(|o| *o == PollOutcome::Ignored));
    assert!(session.results().unwrap().is_empty());
}

#[test]
fn results_list_newest_first() {
    let first = Ipv4Addr::new(172, 16, 0, 1);
    let second = Ipv4Addr::new(172, 16, 0, 9);
    let lan = Lan::new()
        .with_host(second, MacAddr::new(0x02, 0, 0, 0, 0, 9))
        .with_host(first, MacAddr::new(0x02, 0, 0, 0, 0, 1));
    let mut session = session(vec![eth0(vec![v4(172, 16, 0, 4, 28)])], LanOpener::new(lan));
    press(&mut session, &[Action::Confirm, Action::Confirm]);
    drain(&mut session);

    let results = session.results().unwrap();
    let in_order: Vec<Ipv4Addr> = results.iter().map(|h| h.ip).collect();
    let newest_first: Vec<Ipv4Addr> = results.newest_first().map(|h| h.ip).collect();
    assert_eq!(in_order, vec![first, second]);
    assert_eq!(newest_first, vec![second, first]);
    assert!(results.iter().all(|h| h.vendor.is_none()));
}

#[test]
fn scanning_ignores_further_navigation() {
    let lan = Lan::new();
    let mut session = session(vec![eth0(vec![v4(10, 0, 0, 5, 30)])], LanOpener::new(lan.clone()));
    press(&mut session, &[Action::Confirm, Action::Confirm]);
    press(&mut session, &[Action::Down, Action::Confirm, Action::Up, Action::Confirm]);

    assert_eq!(session.stage(), Stage::Scanning);
    assert_eq!(lan.requests().len(), 4);
    assert!(session.handle(Action::Quit).unwrap().is_break());
}
