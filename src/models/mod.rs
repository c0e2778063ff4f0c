//! Domain models for the CIDR calculator.
//!
//! - [`Ipv4Block`] - IPv4 address with a validated prefix length
//! - [`SubnetFacts`] - facts derived from one block
//! - [`Resolution`] - empty, facts, or the reason for rejection

mod ipv4;
mod subnet_facts;

// Re-export public types
pub use ipv4::{get_cidr_mask, Ipv4Block, MAX_LENGTH};
pub use subnet_facts::{Resolution, SubnetFacts};
