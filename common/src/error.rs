use std::io;
use std::net::IpAddr;

use thiserror::Error;

/// Recoverable failures of the interactive session.
///
/// None of these end the program. The `Display` text of each variant is what
/// the operator reads in the popup, after which the session stays on the
/// stage it was on.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No available addresses for this interface!")]
    NoAddresses { interface: String },

    #[error("ARP is not supported for IPv6!")]
    UnsupportedAddressFamily(IpAddr),

    #[error("Please run the program as root!")]
    ChannelOpen {
        interface: String,
        #[source]
        source: io::Error,
    },
}
