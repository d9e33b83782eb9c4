#![forbid(unsafe_code)]

//! Label with decrement/increment controls on one row.

use crate::{Widget, draw_text_span, set_style_area};
use rest_core::geometry::Rect;
use rest_render::frame::Frame;
use rest_style::{InteractionState, InteractiveStyle, Style};

const CONTROLS_WIDTH: u16 = 7;

/// Renders `label ... [-] [+]`.
///
/// The value itself is owned by the caller; `at_min`/`at_max` dim the control
/// that would have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper<'a> {
    label: &'a str,
    focused: bool,
    at_min: bool,
    at_max: bool,
    style: InteractiveStyle,
    disabled_style: Style,
}

impl<'a> Stepper<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            at_min: false,
            at_max: false,
            style: InteractiveStyle::new(Style::new()).focused(Style::new().bold()),
            disabled_style: Style::new().dim(),
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark which ends of the range the value sits on.
    #[must_use]
    pub fn bounds(mut self, at_min: bool, at_max: bool) -> Self {
        self.at_min = at_min;
        self.at_max = at_max;
        self
    }

    #[must_use]
    pub fn style(mut self, style: InteractiveStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Stepper<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let row = area.row(0);
        let style = self.style.resolve(InteractionState::from_focus(self.focused));
        set_style_area(&mut frame.buffer, row, style);

        let controls_x = row.right().saturating_sub(CONTROLS_WIDTH).max(row.x);
        let label_end = controls_x.saturating_sub(1).max(row.x);
        let marker = if self.focused { "› " } else { "  " };
        let x = draw_text_span(&mut frame.buffer, row.x, row.y, marker, style, label_end);
        draw_text_span(&mut frame.buffer, x, row.y, self.label, style, label_end);

        let minus = if self.at_min { style.patch(self.disabled_style) } else { style };
        let plus = if self.at_max { style.patch(self.disabled_style) } else { style };
        let x = draw_text_span(&mut frame.buffer, controls_x, row.y, "[-]", minus, row.right());
        draw_text_span(&mut frame.buffer, x + 1, row.y, "[+]", plus, row.right());
    }
}
