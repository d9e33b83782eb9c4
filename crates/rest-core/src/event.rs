#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The runtime converts every backend event into an [`Event`] before handing
//! it to the application model, so models and tests never see backend types.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the terminal cannot distinguish
//!   press from repeat/release.
//! - `Modifiers` use bitflags for easy combination.
//! - Mouse input is not captured; the form is keyboard driven.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

impl Event {
    /// Shorthand for a key press with no modifiers.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }

    /// Shorthand for a plain character key press.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Press or auto-repeat. Steppers treat both as a step.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Shift+Tab (back-tab).
    BackTab,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(feature = "crossterm")]
impl Event {
    /// Convert a Crossterm event into a canonical event.
    ///
    /// Returns `None` for events BetterRest does not consume (mouse, paste,
    /// media and lock keys).
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event as ct;

        match event {
            ct::Event::Key(key) => {
                let code = match key.code {
                    ct::KeyCode::Char(c) => KeyCode::Char(c),
                    ct::KeyCode::Enter => KeyCode::Enter,
                    ct::KeyCode::Esc => KeyCode::Escape,
                    ct::KeyCode::Backspace => KeyCode::Backspace,
                    ct::KeyCode::Tab => KeyCode::Tab,
                    ct::KeyCode::BackTab => KeyCode::BackTab,
                    ct::KeyCode::Home => KeyCode::Home,
                    ct::KeyCode::End => KeyCode::End,
                    ct::KeyCode::PageUp => KeyCode::PageUp,
                    ct::KeyCode::PageDown => KeyCode::PageDown,
                    ct::KeyCode::Up => KeyCode::Up,
                    ct::KeyCode::Down => KeyCode::Down,
                    ct::KeyCode::Left => KeyCode::Left,
                    ct::KeyCode::Right => KeyCode::Right,
                    ct::KeyCode::F(n) => KeyCode::F(n),
                    _ => return None,
                };
                let kind = match key.kind {
                    ct::KeyEventKind::Press => KeyEventKind::Press,
                    ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                    ct::KeyEventKind::Release => KeyEventKind::Release,
                };
                Some(Self::Key(KeyEvent {
                    code,
                    modifiers: Modifiers::from_crossterm(key.modifiers),
                    kind,
                }))
            }
            ct::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            ct::Event::FocusGained => Some(Self::Focus(true)),
            ct::Event::FocusLost => Some(Self::Focus(false)),
            _ => None,
        }
    }
}

#[cfg(feature = "crossterm")]
impl Modifiers {
    fn from_crossterm(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;

        let mut out = Self::NONE;
        if mods.contains(KeyModifiers::SHIFT) {
            out |= Self::SHIFT;
        }
        if mods.contains(KeyModifiers::ALT) {
            out |= Self::ALT;
        }
        if mods.contains(KeyModifiers::CONTROL) {
            out |= Self::CTRL;
        }
        if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
            out |= Self::SUPER;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn key_event_combined_modifiers() {
        let event =
            KeyEvent::new(KeyCode::Char('s')).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(event.ctrl());
        assert!(event.shift());
    }

    #[test]
    fn release_is_not_a_press() {
        let press = KeyEvent::new(KeyCode::Up);
        assert!(press.is_press());
        assert!(press.with_kind(KeyEventKind::Repeat).is_press());
        assert!(!press.with_kind(KeyEventKind::Release).is_press());
    }

    #[test]
    fn char_shorthand_builds_plain_press() {
        assert_eq!(
            Event::char('c'),
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: Modifiers::NONE,
                kind: KeyEventKind::Press,
            })
        );
    }

    #[cfg(feature = "crossterm")]
    mod crossterm_mapping {
        use super::super::*;
        use crossterm::event as ct;

        #[test]
        fn maps_ctrl_c() {
            let raw = ct::Event::Key(ct::KeyEvent::new(
                ct::KeyCode::Char('c'),
                ct::KeyModifiers::CONTROL,
            ));
            let Some(Event::Key(key)) = Event::from_crossterm(raw) else {
                panic!("expected key event");
            };
            assert!(key.is_char('c'));
            assert!(key.ctrl());
        }

        #[test]
        fn maps_escape_and_resize() {
            let esc = ct::Event::Key(ct::KeyEvent::new(ct::KeyCode::Esc, ct::KeyModifiers::NONE));
            assert_eq!(Event::from_crossterm(esc), Some(Event::key(KeyCode::Escape)));
            assert_eq!(
                Event::from_crossterm(ct::Event::Resize(100, 40)),
                Some(Event::Resize {
                    width: 100,
                    height: 40
                })
            );
        }

        #[test]
        fn drops_unhandled_events() {
            assert_eq!(Event::from_crossterm(ct::Event::Paste("x".into())), None);
            let caps = ct::Event::Key(ct::KeyEvent::new(
                ct::KeyCode::CapsLock,
                ct::KeyModifiers::NONE,
            ));
            assert_eq!(Event::from_crossterm(caps), None);
        }
    }
}
