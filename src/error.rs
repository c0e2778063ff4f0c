//! Classified resolver failures.
//!
//! Every variant is non-fatal: it is returned as data and displayed to the
//! user, who then keeps editing.

use thiserror::Error;

/// Why a pair of address / mask strings could not be resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveError {
    /// The address text is not an IP literal of any family.
    #[error("Invalid IP Address")]
    InvalidAddress,
    /// The address parsed, but the prefix length is missing, not a decimal
    /// number, or out of range for the address family.
    #[error("Invalid Mask")]
    InvalidMask,
    /// The address parsed as an IPv6 literal.
    #[error("Only IPv4 addresses are supported.")]
    UnsupportedAddressFamily,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ResolveError::InvalidAddress.to_string(), "Invalid IP Address");
        assert_eq!(ResolveError::InvalidMask.to_string(), "Invalid Mask");
        assert_eq!(
            ResolveError::UnsupportedAddressFamily.to_string(),
            "Only IPv4 addresses are supported."
        );
    }
}
