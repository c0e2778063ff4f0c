//! Terminal driver for the shell.
//!
//! Uses crossterm for raw-mode key events and screen control. The terminal
//! is restored when the driver is dropped, so an error mid-loop still
//! leaves the user with a working shell.

use super::input::KeyInput;
use super::state::{CalcState, ShellAction};
use crate::output::{cursor_position, format_view};
use crossterm::{
    cursor::{MoveTo, MoveToNextLine, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};

/// Terminal input the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyInput),
    /// The window changed size, the screen must be redrawn.
    Resize,
}

/// Raw-mode terminal session.
pub struct TerminalDriver {
    out: Stdout,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so a failure below still restores.
        let mut driver = TerminalDriver { out: io::stdout() };
        execute!(driver.out, EnterAlternateScreen)?;
        log::debug!("Entered raw mode");
        Ok(driver)
    }

    /// Convert a crossterm key event to [`KeyInput`].
    pub fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(KeyInput::CtrlC),
                KeyCode::Char('a') => Some(KeyInput::Home),
                KeyCode::Char('e') => Some(KeyInput::End),
                KeyCode::Char('h') => Some(KeyInput::Backspace),
                KeyCode::Char('u') => Some(KeyInput::DeleteToStart),
                KeyCode::Char('k') => Some(KeyInput::DeleteToEnd),
                KeyCode::Char('w') => Some(KeyInput::DeleteWordBackward),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::BackTab => Some(KeyInput::BackTab),
            _ => None,
        }
    }

    /// Convert a crossterm event, keeping key presses and resizes only.
    pub fn convert_event(event: Event) -> Option<TerminalEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key).map(TerminalEvent::Key)
            }
            Event::Resize(..) => Some(TerminalEvent::Resize),
            _ => None,
        }
    }

    /// Block until the next event the shell cares about.
    pub fn next_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            if let Some(event) = Self::convert_event(event::read()?) {
                return Ok(event);
            }
        }
    }

    /// Redraw the whole screen.
    pub fn render(&mut self, state: &CalcState) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        // Raw mode does not turn `\n` into a carriage return.
        for line in format_view(state).lines() {
            queue!(self.out, Print(line), MoveToNextLine(1))?;
        }
        let (column, row) = cursor_position(state);
        queue!(self.out, MoveTo(column, row), Show)?;
        self.out.flush()
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen);
        log::debug!("Left raw mode");
    }
}

/// Run the interactive calculator until the user quits.
pub fn run() -> io::Result<()> {
    log::info!("#Start shell::run()");
    let mut driver = TerminalDriver::new()?;
    let mut state = CalcState::new();
    driver.render(&state)?;

    loop {
        let action = match driver.next_event()? {
            TerminalEvent::Key(key) => state.handle_key(key),
            TerminalEvent::Resize => ShellAction::Render,
        };
        match action {
            ShellAction::Quit => break,
            ShellAction::Render => driver.render(&state)?,
        }
    }
    log::info!("Quit requested");
    Ok(())
}
