//! Resolver output.

use crate::error::ResolveError;
use std::net::Ipv4Addr;

/// Everything derived from one IPv4 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetFacts {
    /// Mask with the high `prefix_len` bits set.
    pub netmask: Ipv4Addr,
    /// Bitwise complement of [`SubnetFacts::netmask`].
    pub wildcard_mask: Ipv4Addr,
    /// `2^(32 - prefix_len)`.
    pub total_addresses: u64,
    /// Addresses assignable to end devices.
    pub max_usable_addresses: u64,
    /// Input address with all host bits cleared.
    pub network_address: Ipv4Addr,
    /// Network address with all host bits set.
    pub broadcast_address: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix_len: u8,
}

impl SubnetFacts {
    /// `a.b.c.d/n` of the network address.
    pub fn cidr_notation(&self) -> String {
        format!("{}/{}", self.network_address, self.prefix_len)
    }

    /// `<network> - <broadcast>`.
    pub fn address_range(&self) -> String {
        format!("{} - {}", self.network_address, self.broadcast_address)
    }
}

/// Outcome of resolving one address / mask pair.
///
/// Either there is not enough input yet, or the facts, or the reason there
/// are none. Never a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// One of the inputs is empty.
    #[default]
    Empty,
    /// The block resolved.
    Facts(SubnetFacts),
    /// The input was rejected.
    Invalid(ResolveError),
}

impl Resolution {
    /// The user-facing error text, if the input was rejected.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Resolution::Invalid(e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// The facts, if the input resolved.
    pub fn facts(&self) -> Option<&SubnetFacts> {
        match self {
            Resolution::Facts(facts) => Some(facts),
            _ => None,
        }
    }
}

impl From<Result<SubnetFacts, ResolveError>> for Resolution {
    fn from(result: Result<SubnetFacts, ResolveError>) -> Self {
        match result {
            Ok(facts) => Resolution::Facts(facts),
            Err(e) => Resolution::Invalid(e),
        }
    }
}
