//! Subnet resolution logic.
//!
//! - [`resolver`] - turns raw address / mask text into a [`crate::models::Resolution`]

mod resolver;

// Re-export public functions
pub use resolver::{block_facts, parse_address, parse_prefix_len, resolve};
