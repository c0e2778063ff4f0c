//! IPv4 block arithmetic.
//!
//! Provides [`Ipv4Block`] for an IPv4 address with a prefix length. The
//! prefix is validated once, in [`Ipv4Block::new`], so every derived value
//! is infallible. Everything works on the `u32` form of the address.

use crate::error::ResolveError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, ResolveError> {
    if len > MAX_LENGTH {
        Err(ResolveError::InvalidMask)
    } else {
        let right_len = MAX_LENGTH - len;
        // u64 so that a shift by 32 (len == 0) is defined.
        let all_bits = u32::MAX as u64;
        let mask = (all_bits >> right_len) << right_len;
        Ok(mask as u32)
    }
}

/// IPv4 address with a prefix length that is known to be in range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Block {
    addr: Ipv4Addr,
    mask: u8,
    mask_bits: u32,
}

impl Ipv4Block {
    /// Create a block, rejecting prefix lengths above [`MAX_LENGTH`].
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4Block, ResolveError> {
        let mask_bits = get_cidr_mask(mask)?;
        Ok(Ipv4Block {
            addr,
            mask,
            mask_bits,
        })
    }

    /// Prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Subnet mask in dotted-quad form.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits)
    }

    /// Bitwise complement of the netmask.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.mask_bits)
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits)
    }

    /// Number of addresses in the block, `2^(32 - mask)`.
    ///
    /// A `/0` holds 2^32 addresses, which is why this is a u64.
    pub fn total_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Number of addresses assignable to hosts.
    ///
    /// A /32 is a single host route and a /31 a point-to-point link, neither
    /// loses a network or broadcast address. Anything larger loses both.
    pub fn usable_hosts(&self) -> u64 {
        match self.mask {
            32 => 1,
            31 => 2,
            _ => self.total_addresses() - 2,
        }
    }
}
