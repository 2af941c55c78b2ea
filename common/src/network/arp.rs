use std::net::Ipv4Addr;

use pnet::util::MacAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArpOperation {
    Request,
    Reply,
    Other(u16),
}

impl From<u16> for ArpOperation {
    fn from(code: u16) -> Self {
        match code {
            1 => ArpOperation::Request,
            2 => ArpOperation::Reply,
            other => ArpOperation::Other(other),
        }
    }
}

/// The parts of a captured ARP frame the collector looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpFrame {
    pub sender_ip: Ipv4Addr,
    pub sender_mac: MacAddr,
    pub operation: ArpOperation,
}

impl ArpFrame {
    pub fn reply(sender_ip: Ipv4Addr, sender_mac: MacAddr) -> Self {
        Self {
            sender_ip,
            sender_mac,
            operation: ArpOperation::Reply,
        }
    }

    pub fn request(sender_ip: Ipv4Addr, sender_mac: MacAddr) -> Self {
        Self {
            sender_ip,
            sender_mac,
            operation: ArpOperation::Request,
        }
    }

    pub fn is_reply(&self) -> bool {
        self.operation == ArpOperation::Reply
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
