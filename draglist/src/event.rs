//! Input events delivered to the list widgets.
//!
//! Pointer, key and tick events carry the instant they were observed at, so
//! time-based gestures (press-and-hold, autoscroll) and animations can be
//! driven deterministically.

use std::time::Instant;

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed.
    Press {
        x: u16,
        y: u16,
        button: MouseButton,
        at: Instant,
    },
    /// Mouse moved with a button held.
    Drag {
        x: u16,
        y: u16,
        button: MouseButton,
        at: Instant,
    },
    /// Mouse button released.
    Release {
        x: u16,
        y: u16,
        button: MouseButton,
        at: Instant,
    },
    /// Mouse wheel; positive `delta` scrolls down.
    Scroll { x: u16, y: u16, delta: i16, at: Instant },
    /// Key press.
    Key {
        key: Key,
        modifiers: Modifiers,
        at: Instant,
    },
    /// Periodic wakeup from the host loop while nothing else happens.
    Tick { at: Instant },
    /// The host lost the pointer/focus (window deactivated, modal opened).
    Interrupt,
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// When the event happened, if it is timed.
    pub fn at(&self) -> Option<Instant> {
        match self {
            Event::Press { at, .. }
            | Event::Drag { at, .. }
            | Event::Release { at, .. }
            | Event::Scroll { at, .. }
            | Event::Key { at, .. }
            | Event::Tick { at } => Some(*at),
            Event::Interrupt | Event::Resize { .. } => None,
        }
    }

    /// Pointer position for mouse events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::Press { x, y, .. }
            | Event::Drag { x, y, .. }
            | Event::Release { x, y, .. }
            | Event::Scroll { x, y, .. } => Some(Point::new(*x, *y)),
            _ => None,
        }
    }

    /// Convert a crossterm event observed at `at`.
    ///
    /// Returns `None` for events the widgets have no use for (key releases,
    /// horizontal scroll, plain mouse moves, paste, focus gained).
    pub fn from_crossterm(event: crossterm::event::Event, at: Instant) -> Option<Event> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: Key::from(key.code),
                modifiers: Modifiers::from(key.modifiers),
                at,
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(btn) => Some(Event::Press {
                        x,
                        y,
                        button: btn.into(),
                        at,
                    }),
                    MouseEventKind::Drag(btn) => Some(Event::Drag {
                        x,
                        y,
                        button: btn.into(),
                        at,
                    }),
                    MouseEventKind::Up(btn) => Some(Event::Release {
                        x,
                        y,
                        button: btn.into(),
                        at,
                    }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1, at }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1, at }),
                    _ => None,
                }
            }
            CtEvent::FocusLost => Some(Event::Interrupt),
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// Anything the widgets do not distinguish.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
