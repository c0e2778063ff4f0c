//! Output formatting for resolver results.
//!
//! - [`terminal`] - screen text for the interactive shell

mod terminal;

pub use terminal::{
    cursor_position, format_input, format_results, format_view, HELP, PROMPT, TITLE,
};
