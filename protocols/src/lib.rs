//! Wire formats used by `sweepr`.
//!
//! Only ARP over Ethernet is needed: building broadcast requests and pulling
//! the sender fields out of whatever comes back.

pub mod arp;
pub mod ethernet;

pub const MIN_ETH_FRAME_NO_FCS: usize = 60;
pub const ARP_LEN: usize = 28;
pub const ETH_HDR_LEN: usize = 14;
