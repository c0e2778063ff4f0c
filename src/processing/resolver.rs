//! CIDR resolution.
//!
//! Turns the two raw strings the user typed into a [`Resolution`]. Parsing
//! the address and parsing the prefix length are separate steps so that a
//! bad address and a bad mask are reported differently.

use crate::error::ResolveError;
use crate::models::{Ipv4Block, Resolution, SubnetFacts, MAX_LENGTH};
use std::net::IpAddr;

/// Longest prefix accepted for an IPv6 literal, only used for classification.
const MAX_LENGTH_V6: u32 = 128;

/// Resolve an address and prefix length typed by the user.
///
/// Either string being empty means "not enough input yet" and yields
/// [`Resolution::Empty`] rather than an error. Rejections are classified in
/// this order: unparseable address, then bad mask, then IPv6.
///
/// # Examples
/// ```
/// use cidr_calc::resolve;
/// let facts = *resolve("192.168.1.10", "24").facts().unwrap();
/// assert_eq!(facts.cidr_notation(), "192.168.1.0/24");
/// assert_eq!(facts.max_usable_addresses, 254);
/// ```
pub fn resolve(address_text: &str, mask_text: &str) -> Resolution {
    if address_text.is_empty() || mask_text.is_empty() {
        return Resolution::Empty;
    }
    let resolution = Resolution::from(resolve_block(address_text, mask_text));
    log::trace!("resolve({address_text:?}, {mask_text:?}) = {resolution:?}");
    resolution
}

fn resolve_block(address_text: &str, mask_text: &str) -> Result<SubnetFacts, ResolveError> {
    let addr = parse_address(address_text)?;
    let max_len = match addr {
        IpAddr::V4(_) => u32::from(MAX_LENGTH),
        IpAddr::V6(_) => MAX_LENGTH_V6,
    };
    let len = parse_prefix_len(mask_text, max_len)?;

    let IpAddr::V4(addr) = addr else {
        log::debug!("Rejecting non IPv4 address {addr}");
        return Err(ResolveError::UnsupportedAddressFamily);
    };
    // `len` is at most 32 here
    let block = Ipv4Block::new(addr, len as u8)?;
    Ok(block_facts(block))
}

/// Parse an IP literal of either family.
pub fn parse_address(text: &str) -> Result<IpAddr, ResolveError> {
    text.parse::<IpAddr>().map_err(|_| ResolveError::InvalidAddress)
}

/// Parse a prefix length: plain decimal digits, no sign or whitespace, at
/// most `max_len`. Leading zeros are accepted.
pub fn parse_prefix_len(text: &str, max_len: u32) -> Result<u32, ResolveError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResolveError::InvalidMask);
    }
    let len = text
        .bytes()
        .try_fold(0u32, |acc, b| {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        })
        .ok_or(ResolveError::InvalidMask)?;
    if len > max_len {
        return Err(ResolveError::InvalidMask);
    }
    Ok(len)
}

/// Derive every fact about an IPv4 block.
pub fn block_facts(block: Ipv4Block) -> SubnetFacts {
    SubnetFacts {
        netmask: block.netmask(),
        wildcard_mask: block.wildcard(),
        total_addresses: block.total_addresses(),
        max_usable_addresses: block.usable_hosts(),
        network_address: block.lo(),
        broadcast_address: block.hi(),
        prefix_len: block.mask(),
    }
}
