use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;
use sweepr_common::network::interface::Interface;
use sweepr_common::system::InterfaceRepository;
use tracing::debug;

/// Interfaces as reported by the OS, through `pnet`.
pub struct SystemInterfaces;

impl InterfaceRepository for SystemInterfaces {
    fn interfaces(&self) -> anyhow::Result<Vec<Interface>> {
        let interfaces = datalink::interfaces()
            .iter()
            .map(|intf| {
                let mut interface = Interface::from(intf);
                interface.mtu = read_mtu(&intf.name);
                interface
            })
            .collect();
        Ok(interfaces)
    }

    /// Asks again so addresses assigned after startup are picked up.
    fn addresses(&self, interface: &Interface) -> anyhow::Result<Vec<IpNetwork>> {
        let current: Option<NetworkInterface> = datalink::interfaces()
            .into_iter()
            .find(|intf| intf.index == interface.index && intf.name == interface.name);
        match current {
            Some(intf) => Ok(intf.ips),
            None => {
                debug!("{} vanished, using the addresses seen at startup", interface.name);
                Ok(interface.ips.clone())
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn read_mtu(name: &str) -> Option<u32> {
    let path = std::path::Path::new("/sys/class/net").join(name).join("mtu");
    std::fs::read_to_string(path).ok().as_deref().and_then(parse_mtu)
}

#[cfg(not(target_os = "linux"))]
fn read_mtu(_name: &str) -> Option<u32> {
    None
}

fn parse_mtu(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
