#![forbid(unsafe_code)]

//! Single-line push button.

use crate::block::Alignment;
use crate::{Widget, draw_text_span, set_style_area, text_width};
use rest_core::geometry::Rect;
use rest_render::frame::Frame;
use rest_style::{InteractionState, InteractiveStyle, Style};

/// A labelled button drawn as `[ label ]`.
///
/// Pressing is handled by the app; the widget only shows whether it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    style: InteractiveStyle,
    alignment: Alignment,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            style: InteractiveStyle::new(Style::new()).focused(Style::new().reverse().bold()),
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn style(mut self, style: InteractiveStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Cells the button needs on one row.
    pub fn width(&self) -> u16 {
        text_width(self.label).saturating_add(4)
    }
}

impl Widget for Button<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let width = self.width().min(area.width);
        let x = self.alignment.x_in(area, width);
        let slot = Rect::new(x, area.y, width, 1);
        let style = self.style.resolve(InteractionState::from_focus(self.focused));

        set_style_area(&mut frame.buffer, slot, style);
        let text = format!("[ {} ]", self.label);
        draw_text_span(&mut frame.buffer, x, area.y, &text, style, slot.right());
    }
}
