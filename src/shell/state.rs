//! Interactive calculator state.
//!
//! Pure state machine: keys in, [`ShellAction`] out. The terminal driver owns
//! I/O, so everything here runs in tests without a terminal.

use super::input::{KeyInput, TextField};
use crate::models::Resolution;
use crate::processing::resolve;

/// Longest dotted-quad, `255.255.255.255`.
pub const ADDRESS_CHAR_LIMIT: usize = 15;
/// Longest IPv4 prefix length, `32`.
pub const MASK_CHAR_LIMIT: usize = 2;

/// Which input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// Address input.
    #[default]
    Address,
    /// Prefix length input.
    Mask,
}

impl Field {
    fn toggle(self) -> Field {
        match self {
            Field::Address => Field::Mask,
            Field::Mask => Field::Address,
        }
    }
}

/// What the driver should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Redraw the screen.
    Render,
    /// Leave the program.
    Quit,
}

/// Focus, both text buffers and the current result.
#[derive(Debug, Clone)]
pub struct CalcState {
    focus: Field,
    address: TextField,
    mask: TextField,
    results: Resolution,
}

impl Default for CalcState {
    fn default() -> Self {
        CalcState {
            focus: Field::Address,
            address: TextField::new("IP Address", ADDRESS_CHAR_LIMIT),
            mask: TextField::new("Mask Bits", MASK_CHAR_LIMIT),
            results: Resolution::Empty,
        }
    }
}

impl CalcState {
    /// Fresh state, address field focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Address field.
    pub fn address(&self) -> &TextField {
        &self.address
    }

    /// Prefix length field.
    pub fn mask(&self) -> &TextField {
        &self.mask
    }

    /// Latest resolution of the two buffers.
    pub fn results(&self) -> &Resolution {
        &self.results
    }

    /// Handle one key and re-resolve the buffers.
    pub fn handle_key(&mut self, key: KeyInput) -> ShellAction {
        match key {
            KeyInput::CtrlC | KeyInput::Char('q') => return ShellAction::Quit,
            // Two fields: forward and backward land on the same one.
            KeyInput::Tab | KeyInput::BackTab => {
                self.focus = self.focus.toggle();
                log::debug!("focus -> {:?}", self.focus);
            }
            _ => {
                let field = match self.focus {
                    Field::Address => &mut self.address,
                    Field::Mask => &mut self.mask,
                };
                field.handle_key(key);
            }
        }
        self.results = resolve(self.address.value(), self.mask.value());
        ShellAction::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;

    fn type_str(state: &mut CalcState, text: &str) {
        for c in text.chars() {
            assert_eq!(state.handle_key(KeyInput::Char(c)), ShellAction::Render);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CalcState::new();
        assert_eq!(state.focus(), Field::Address);
        assert_eq!(state.address().placeholder(), "IP Address");
        assert_eq!(state.address().char_limit(), 15);
        assert_eq!(state.mask().placeholder(), "Mask Bits");
        assert_eq!(state.mask().char_limit(), 2);
        assert_eq!(state.results(), &Resolution::Empty);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = CalcState::new();
        assert_eq!(state.handle_key(KeyInput::Char('q')), ShellAction::Quit);
        assert_eq!(state.handle_key(KeyInput::CtrlC), ShellAction::Quit);
        assert_eq!(state.address().value(), "");
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = CalcState::new();
        state.handle_key(KeyInput::Tab);
        assert_eq!(state.focus(), Field::Mask);
        state.handle_key(KeyInput::Tab);
        assert_eq!(state.focus(), Field::Address);
        state.handle_key(KeyInput::BackTab);
        assert_eq!(state.focus(), Field::Mask);
        state.handle_key(KeyInput::BackTab);
        assert_eq!(state.focus(), Field::Address);
    }

    #[test]
    fn test_results_follow_every_edit() {
        let mut state = CalcState::new();
        type_str(&mut state, "192.168.1.10");
        assert_eq!(state.results(), &Resolution::Empty);

        state.handle_key(KeyInput::Tab);
        type_str(&mut state, "2");
        let facts = state.results().facts().copied().unwrap();
        assert_eq!(facts.cidr_notation(), "192.0.0.0/2");

        type_str(&mut state, "4");
        let facts = state.results().facts().copied().unwrap();
        assert_eq!(facts.cidr_notation(), "192.168.1.0/24");

        state.handle_key(KeyInput::Backspace);
        state.handle_key(KeyInput::Backspace);
        assert_eq!(state.results(), &Resolution::Empty);
    }

    #[test]
    fn test_error_replaced_by_facts() {
        let mut state = CalcState::new();
        type_str(&mut state, "10.0.0.1");
        state.handle_key(KeyInput::Tab);
        type_str(&mut state, "x");
        assert_eq!(
            state.results(),
            &Resolution::Invalid(ResolveError::InvalidMask)
        );
        state.handle_key(KeyInput::Backspace);
        type_str(&mut state, "31");
        assert_eq!(state.results().facts().unwrap().max_usable_addresses, 2);
    }

    #[test]
    fn test_mask_limit() {
        let mut state = CalcState::new();
        state.handle_key(KeyInput::Tab);
        type_str(&mut state, "123");
        assert_eq!(state.mask().value(), "12");
        assert_eq!(state.address().value(), "");
    }
}
