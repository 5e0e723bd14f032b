use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::game::Direction;

/// One input event, already sorted into what the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
    Ignored,
}

/// Where the loop gets its input from
pub trait InputSource {
    /// Everything that arrived since the last call, oldest first. Never blocks.
    fn drain(&mut self) -> Result<Vec<InputEvent>>;
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&self, event: &Event) -> InputEvent {
        match event {
            // Only process key press events, not release or repeat
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            _ => InputEvent::Ignored,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputEvent {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputEvent::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputEvent::Turn(Direction::Up),
            KeyCode::Down => InputEvent::Turn(Direction::Down),
            KeyCode::Left => InputEvent::Turn(Direction::Left),
            KeyCode::Right => InputEvent::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputEvent::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::Turn(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,

            _ => InputEvent::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard input from the controlling terminal
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn drain(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();

        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            events.push(self.handler.handle_event(&event));
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), InputEvent::Turn(Direction::Up));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(down), InputEvent::Turn(Direction::Down));

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(left), InputEvent::Turn(Direction::Left));

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(right),
            InputEvent::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), InputEvent::Turn(Direction::Up));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), InputEvent::Turn(Direction::Left));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(s), InputEvent::Turn(Direction::Down));

        let d = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(d), InputEvent::Turn(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), InputEvent::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), InputEvent::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), InputEvent::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), InputEvent::Ignored);

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(plain_c), InputEvent::Ignored);
    }

    #[test]
    fn test_release_and_non_key_events_ignored() {
        let handler = InputHandler::new();

        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_event(&Event::Key(release)), InputEvent::Ignored);
        assert_eq!(handler.handle_event(&Event::Resize(80, 24)), InputEvent::Ignored);

        let press = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_event(&Event::Key(press)),
            InputEvent::Turn(Direction::Up)
        );
    }
}
