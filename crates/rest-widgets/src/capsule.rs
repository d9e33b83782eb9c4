#![forbid(unsafe_code)]

//! Pill-shaped heading decoration.

use crate::block::Alignment;
use crate::{Widget, draw_text_span, text_width};
use rest_core::geometry::Rect;
use rest_render::cell::PackedRgba;
use rest_render::frame::Frame;
use rest_style::Style;

const DEFAULT_TINT: PackedRgba = PackedRgba::rgb(58, 74, 110);

/// Text on a tinted background between `╭` and `╮` end caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capsule<'a> {
    text: &'a str,
    tint: PackedRgba,
    text_style: Style,
    alignment: Alignment,
}

/// Shorthand for [`Capsule::new`].
pub fn capsule(text: &str) -> Capsule<'_> {
    Capsule::new(text)
}

impl<'a> Capsule<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            tint: DEFAULT_TINT,
            text_style: Style::new().bold(),
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn tint(mut self, tint: PackedRgba) -> Self {
        self.tint = tint;
        self
    }

    #[must_use]
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Caps plus one cell of padding on each side.
    pub fn width(&self) -> u16 {
        text_width(self.text).saturating_add(4)
    }
}

impl Widget for Capsule<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let width = self.width().min(area.width);
        let x = self.alignment.x_in(area, width);
        let end = x + width;
        let cap = Style::new().fg(self.tint);
        let body = self.text_style.patch(Style::new().bg(self.tint));

        let buf = &mut frame.buffer;
        let mut cx = draw_text_span(buf, x, area.y, "╭", cap, end);
        cx = draw_text_span(buf, cx, area.y, " ", body, end);
        // Leave room for the closing cap and padding.
        cx = draw_text_span(buf, cx, area.y, self.text, body, end.saturating_sub(2));
        cx = draw_text_span(buf, cx, area.y, " ", body, end);
        draw_text_span(buf, cx, area.y, "╮", cap, end);
    }
}
