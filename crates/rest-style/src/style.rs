#![forbid(unsafe_code)]

//! Optional-field style with cascading semantics.

use rest_render::cell::{Cell, PackedRgba, StyleFlags};

/// Colors and attributes; `None` fields inherit from whatever is underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Style that changes nothing.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags to any already set.
    #[must_use]
    pub fn add_attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attrs(StyleFlags::DIM)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attrs(StyleFlags::REVERSE)
    }

    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// `other` wins wherever it sets a field.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => b.or(a),
            },
        }
    }

    /// `self` wins; `parent` fills the gaps.
    #[must_use]
    pub fn merge(self, parent: &Style) -> Self {
        parent.patch(self)
    }

    /// Write the set fields onto `cell`, leaving its content alone.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs;
        }
    }

    /// A blank cell carrying this style.
    pub fn to_cell(&self) -> Cell {
        let mut cell = Cell::default();
        self.apply_to(&mut cell);
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RED: PackedRgba = PackedRgba::rgb(200, 0, 0);
    const BLUE: PackedRgba = PackedRgba::rgb(0, 0, 200);

    #[test]
    fn patch_prefers_other() {
        let base = Style::new().fg(RED).bg(RED);
        let patched = base.patch(Style::new().fg(BLUE).bold());
        assert_eq!(patched.fg, Some(BLUE));
        assert_eq!(patched.bg, Some(RED));
        assert_eq!(patched.attrs, Some(StyleFlags::BOLD));
    }

    #[test]
    fn merge_prefers_self() {
        let child = Style::new().fg(BLUE);
        let merged = child.merge(&Style::new().fg(RED).bg(RED));
        assert_eq!(merged.fg, Some(BLUE));
        assert_eq!(merged.bg, Some(RED));
    }

    #[test]
    fn attrs_accumulate() {
        let style = Style::new().bold().underline();
        assert_eq!(style.attrs, Some(StyleFlags::BOLD | StyleFlags::UNDERLINE));
        assert!(Style::new().is_empty());
    }

    #[test]
    fn apply_keeps_content() {
        let mut cell = Cell::from_char('z').with_bg(BLUE);
        Style::new().fg(RED).apply_to(&mut cell);
        assert_eq!(cell.content.as_char(), Some('z'));
        assert_eq!(cell.fg, RED);
        assert_eq!(cell.bg, BLUE);
    }

    proptest! {
        #[test]
        fn patch_with_empty_is_identity(fg in any::<u32>(), bg in any::<u32>()) {
            let style = Style::new().fg(PackedRgba(fg)).bg(PackedRgba(bg));
            prop_assert_eq!(style.patch(Style::new()), style);
            prop_assert_eq!(Style::new().patch(style), style);
        }
    }
}
