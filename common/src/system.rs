use pnet::ipnetwork::IpNetwork;

use crate::network::interface::Interface;

/// Access to the interfaces the operating system knows about.
pub trait InterfaceRepository {
    fn interfaces(&self) -> anyhow::Result<Vec<Interface>>;

    /// Addresses currently bound to `interface`, in the order the OS reports them.
    fn addresses(&self, interface: &Interface) -> anyhow::Result<Vec<IpNetwork>>;
}
