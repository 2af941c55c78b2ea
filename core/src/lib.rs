//! Scan engine and session logic for `sweepr`.
//!
//! [`session::Session`] drives the operator through interface and address
//! selection and then owns a [`scanner::ScanSession`]. The OS-facing adapters
//! live in [`network`] and [`vendors`].

pub mod network;
pub mod scanner;
pub mod session;
pub mod vendors;
