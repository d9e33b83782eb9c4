#![forbid(unsafe_code)]

//! Style variants for focusable widgets.
//!
//! [`InteractiveStyle`] holds a base style plus optional overrides per
//! interaction state. Resolving patches the override on top of the base, so
//! the more specific state wins for any property it sets.

use crate::style::Style;

/// The interaction state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Normal,
    /// Widget has keyboard focus.
    Focused,
    /// Widget is non-interactive.
    Disabled,
}

impl InteractionState {
    /// `Focused` when `focused`, otherwise `Normal`.
    pub const fn from_focus(focused: bool) -> Self {
        if focused { Self::Focused } else { Self::Normal }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    pub focus: Option<Style>,
    pub disabled: Option<Style>,
}

impl InteractiveStyle {
    pub const fn new(normal: Style) -> Self {
        Self {
            normal,
            focus: None,
            disabled: None,
        }
    }

    #[must_use]
    pub const fn focused(mut self, style: Style) -> Self {
        self.focus = Some(style);
        self
    }

    #[must_use]
    pub const fn disabled(mut self, style: Style) -> Self {
        self.disabled = Some(style);
        self
    }

    pub fn resolve(&self, state: InteractionState) -> Style {
        let overlay = match state {
            InteractionState::Normal => None,
            InteractionState::Focused => self.focus,
            InteractionState::Disabled => self.disabled,
        };
        match overlay {
            Some(style) => self.normal.patch(style),
            None => self.normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_render::cell::{PackedRgba, StyleFlags};

    #[test]
    fn focus_overrides_base() {
        let base = Style::new().fg(PackedRgba::rgb(1, 1, 1)).bg(PackedRgba::rgb(2, 2, 2));
        let style = InteractiveStyle::new(base).focused(Style::new().bg(PackedRgba::rgb(9, 9, 9)).bold());
        let focused = style.resolve(InteractionState::from_focus(true));
        assert_eq!(focused.fg, base.fg);
        assert_eq!(focused.bg, Some(PackedRgba::rgb(9, 9, 9)));
        assert_eq!(focused.attrs, Some(StyleFlags::BOLD));
        assert_eq!(style.resolve(InteractionState::Normal), base);
    }

    #[test]
    fn missing_override_falls_back_to_normal() {
        let style = InteractiveStyle::new(Style::new().dim());
        assert_eq!(style.resolve(InteractionState::Disabled), style.normal);
    }
}
