//! # Session
//!
//! The three screens the operator walks through, modelled as a state machine:
//!
//! 1. [`Stage::SelectInterface`]: pick a network interface.
//! 2. [`Stage::SelectAddress`]: pick one of its addresses.
//! 3. [`Stage::Scanning`]: the sweep runs and hosts appear as they answer.
//!
//! Recoverable problems (no addresses, IPv6, no privileges) show up as a popup
//! and leave the session on the stage it was on. Any key press while a popup is
//! visible goes to the popup: Enter dismisses it, movement is swallowed.

use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Context;
use pnet::ipnetwork::IpNetwork;
use sweepr_common::config::Config;
use sweepr_common::error::SessionError;
use sweepr_common::network::interface::Interface;
use sweepr_common::network::range::AddressSpace;
use sweepr_common::scanning::ChannelOpener;
use sweepr_common::system::InterfaceRepository;
use sweepr_common::vendors::VendorRepository;
use tracing::{info, warn};

use crate::scanner::{PollOutcome, ScanResultSet, ScanSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectInterface,
    SelectAddress,
    Scanning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Confirm,
    Quit,
}

pub struct Session {
    stage: Stage,
    cursor: usize,
    popup: Option<String>,
    interfaces: Vec<Interface>,
    addresses: Vec<IpNetwork>,
    interface: Option<Interface>,
    address: Option<IpNetwork>,
    scan: Option<ScanSession>,
    interface_repo: Box<dyn InterfaceRepository>,
    opener: Box<dyn ChannelOpener>,
    vendors: Box<dyn VendorRepository>,
    read_timeout: Duration,
}

impl Session {
    /// Reads the interface list once; failing to do so is fatal.
    pub fn new(
        interface_repo: Box<dyn InterfaceRepository>,
        opener: Box<dyn ChannelOpener>,
        vendors: Box<dyn VendorRepository>,
        cfg: &Config,
    ) -> anyhow::Result<Self> {
        let interfaces = interface_repo
            .interfaces()
            .context("failed to enumerate network interfaces")?;
        info!("Identified {} network interface(s)", interfaces.len());

        Ok(Self {
            stage: Stage::SelectInterface,
            cursor: 0,
            popup: None,
            interfaces,
            addresses: Vec::new(),
            interface: None,
            address: None,
            scan: None,
            interface_repo,
            opener,
            vendors,
            read_timeout: cfg.read_timeout,
        })
    }

    /// Applies one operator action. `Break` means the program should exit.
    pub fn handle(&mut self, action: Action) -> anyhow::Result<ControlFlow<()>> {
        match action {
            Action::Quit => return Ok(ControlFlow::Break(())),
            _ if self.popup.is_some() => {
                if action == Action::Confirm {
                    self.popup = None;
                }
            }
            Action::Up => self.cursor = self.cursor.saturating_sub(1),
            Action::Down => {
                if self.cursor + 1 < self.list_len() {
                    self.cursor += 1;
                }
            }
            Action::Confirm => match self.stage {
                Stage::SelectInterface => self.confirm_interface()?,
                Stage::SelectAddress => self.confirm_address(),
                Stage::Scanning => {}
            },
        }
        Ok(ControlFlow::Continue(()))
    }

    /// One scheduler tick: a single bounded read while scanning, nothing otherwise.
    pub fn tick(&mut self) -> PollOutcome {
        match self.scan.as_mut() {
            Some(scan) => scan.poll(self.vendors.as_ref()),
            None => PollOutcome::NoEvent,
        }
    }

    fn confirm_interface(&mut self) -> anyhow::Result<()> {
        let Some(interface) = self.interfaces.get(self.cursor).cloned() else {
            return Ok(());
        };
        let addresses = self
            .interface_repo
            .addresses(&interface)
            .with_context(|| format!("failed to read addresses of {}", interface.name))?;

        if addresses.is_empty() {
            self.show(SessionError::NoAddresses {
                interface: interface.name,
            });
            return Ok(());
        }

        info!("Selected interface {} ({} address(es))", interface.name, addresses.len());
        self.interface = Some(interface);
        self.addresses = addresses;
        self.cursor = 0;
        self.stage = Stage::SelectAddress;
        Ok(())
    }

    fn confirm_address(&mut self) {
        let Some(address) = self.addresses.get(self.cursor).copied() else {
            return;
        };
        let Some(interface) = self.interface.as_ref() else {
            return;
        };

        let space = match AddressSpace::enumerate(&address) {
            Ok(space) => space,
            Err(e) => return self.show(e),
        };
        let channel = match self.opener.open(interface, space.network()) {
            Ok(channel) => channel,
            Err(e) => return self.show(e),
        };

        info!(
            "Sweeping {} addresses of {} on {}",
            space.len(),
            space.network(),
            interface.name
        );
        self.scan = Some(ScanSession::start(channel, space, self.read_timeout));
        self.address = Some(address);
        self.cursor = 0;
        self.stage = Stage::Scanning;
    }

    fn show(&mut self, err: SessionError) {
        warn!("{err} ({err:?})");
        self.popup = Some(err.to_string());
    }

    fn list_len(&self) -> usize {
        match self.stage {
            Stage::SelectInterface => self.interfaces.len(),
            Stage::SelectAddress => self.addresses.len(),
            Stage::Scanning => 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn addresses(&self) -> &[IpNetwork] {
        &self.addresses
    }

    pub fn selected_interface(&self) -> Option<&Interface> {
        self.interface.as_ref()
    }

    pub fn selected_address(&self) -> Option<IpNetwork> {
        self.address
    }

    pub fn scan(&self) -> Option<&ScanSession> {
        self.scan.as_ref()
    }

    pub fn results(&self) -> Option<&ScanResultSet> {
        self.scan.as_ref().map(ScanSession::results)
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
