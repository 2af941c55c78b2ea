use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use pnet::util::MacAddr;

/// A network interface as offered to the operator in the first stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub index: u32,
    pub mac: Option<MacAddr>,
    pub mtu: Option<u32>,
    pub flags: u32,
    pub ips: Vec<IpNetwork>,
}

impl Interface {
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
            mac: None,
            mtu: None,
            flags: 0,
            ips: Vec::new(),
        }
    }

    pub fn with_mac(mut self, mac: MacAddr) -> Self {
        self.mac = Some(mac);
        self
    }

    pub fn with_mtu(mut self, mtu: u32) -> Self {
        self.mtu = Some(mtu);
        self
    }

    pub fn with_ips(mut self, ips: Vec<IpNetwork>) -> Self {
        self.ips = ips;
        self
    }
}

impl From<&NetworkInterface> for Interface {
    fn from(intf: &NetworkInterface) -> Self {
        Self {
            name: intf.name.clone(),
            index: intf.index,
            mac: intf.mac,
            mtu: None,
            flags: intf.flags,
            ips: intf.ips.clone(),
        }
    }
}

impl From<&Interface> for NetworkInterface {
    fn from(intf: &Interface) -> Self {
        NetworkInterface {
            name: intf.name.clone(),
            description: String::new(),
            index: intf.index,
            mac: intf.mac,
            ips: intf.ips.clone(),
            flags: intf.flags,
        }
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
