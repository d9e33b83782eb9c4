#![forbid(unsafe_code)]

//! Hour/minute picker display.

use crate::{Widget, draw_text_span, set_style_area};
use rest_core::geometry::Rect;
use rest_render::frame::Frame;
use rest_style::{InteractionState, InteractiveStyle, Style};

/// Which part of the time the arrow keys change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TimeSegment {
    #[default]
    Hour,
    Minute,
}

impl TimeSegment {
    /// The other segment; `←`/`→` both toggle between the two.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Hour,
        }
    }
}

/// Renders `HH:MM` with an optional `AM`/`PM` suffix.
///
/// The caller pre-formats the segments for the active clock style. When
/// focused, the selected segment is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePicker<'a> {
    hour: &'a str,
    minute: &'a str,
    suffix: Option<&'a str>,
    selected: TimeSegment,
    focused: bool,
    style: InteractiveStyle,
    selected_style: Style,
}

impl<'a> TimePicker<'a> {
    pub fn new(hour: &'a str, minute: &'a str) -> Self {
        Self {
            hour,
            minute,
            suffix: None,
            selected: TimeSegment::Hour,
            focused: false,
            style: InteractiveStyle::new(Style::new()).focused(Style::new().bold()),
            selected_style: Style::new().reverse(),
        }
    }

    #[must_use]
    pub fn suffix(mut self, suffix: Option<&'a str>) -> Self {
        self.suffix = suffix;
        self
    }

    #[must_use]
    pub fn selected(mut self, segment: TimeSegment) -> Self {
        self.selected = segment;
        self
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
    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    fn segment_style(&self, base: Style, segment: TimeSegment) -> Style {
        if self.focused && self.selected == segment {
            base.patch(self.selected_style)
        } else {
            base
        }
    }
}

impl Widget for TimePicker<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let row = area.row(0);
        let base = self.style.resolve(InteractionState::from_focus(self.focused));
        set_style_area(&mut frame.buffer, row, base);

        let buf = &mut frame.buffer;
        let end = row.right();
        let marker = if self.focused { "› " } else { "  " };
        let mut x = draw_text_span(buf, row.x, row.y, marker, base, end);
        x = draw_text_span(buf, x, row.y, self.hour, self.segment_style(base, TimeSegment::Hour), end);
        x = draw_text_span(buf, x, row.y, ":", base, end);
        x = draw_text_span(buf, x, row.y, self.minute, self.segment_style(base, TimeSegment::Minute), end);
        if let Some(suffix) = self.suffix {
            x = draw_text_span(buf, x, row.y, " ", base, end);
            draw_text_span(buf, x, row.y, suffix, base, end);
        }
    }
}
