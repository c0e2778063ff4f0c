//! Interactive terminal shell around the resolver.
//!
//! - [`input`] - text field editing and key abstraction
//! - [`state`] - focus, buffers and current result
//! - [`terminal`] - crossterm driver

mod input;
mod state;
mod terminal;

pub use input::{KeyInput, TextField};
pub use state::{CalcState, Field, ShellAction, ADDRESS_CHAR_LIMIT, MASK_CHAR_LIMIT};
pub use terminal::{run, TerminalDriver, TerminalEvent};
