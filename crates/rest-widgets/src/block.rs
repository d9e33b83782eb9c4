#![forbid(unsafe_code)]

use crate::borders::{BorderType, Borders};
use crate::{Widget, draw_text_span, set_style_area, text_width};
use rest_core::geometry::Rect;
use rest_render::buffer::Buffer;
use rest_render::cell::Cell;
use rest_render::frame::Frame;
use rest_style::Style;

/// A widget that draws a block with optional borders and a title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_style: Style,
    border_type: BorderType,
    title: Option<&'a str>,
    title_style: Style,
    title_alignment: Alignment,
    style: Style,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Column at which a `width`-wide item starts inside `area`.
    pub fn x_in(self, area: Rect, width: u16) -> u16 {
        let slack = area.width.saturating_sub(width);
        match self {
            Alignment::Left => area.x,
            Alignment::Center => area.x + slack / 2,
            Alignment::Right => area.x + slack,
        }
    }
}

impl<'a> Block<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block with all borders enabled.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Compute the inner area inside the block's borders.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;

        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }

        inner
    }

    fn border_cell(&self, buf: &Buffer, x: u16, y: u16, c: char) -> Cell {
        let mut cell = buf.get(x, y).copied().unwrap_or_default();
        self.border_style.apply_to(&mut cell);
        cell.content = rest_render::cell::CellContent::Char(c);
        cell
    }

    fn render_borders(&self, area: Rect, buf: &mut Buffer) {
        let set = self.border_type.to_border_chars();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                let cell = self.border_cell(buf, area.x, y, set.vertical);
                buf.set(area.x, y, cell);
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                let cell = self.border_cell(buf, right, y, set.vertical);
                buf.set(right, y, cell);
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                let cell = self.border_cell(buf, x, area.y, set.horizontal);
                buf.set(x, area.y, cell);
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                let cell = self.border_cell(buf, x, bottom, set.horizontal);
                buf.set(x, bottom, cell);
            }
        }

        // Corners overwrite the edge glyphs.
        let corners = [
            (Borders::LEFT | Borders::TOP, area.x, area.y, set.top_left),
            (Borders::RIGHT | Borders::TOP, right, area.y, set.top_right),
            (Borders::LEFT | Borders::BOTTOM, area.x, bottom, set.bottom_left),
            (Borders::RIGHT | Borders::BOTTOM, right, bottom, set.bottom_right),
        ];
        for (needed, x, y, ch) in corners {
            if self.borders.contains(needed) {
                let cell = self.border_cell(buf, x, y, ch);
                buf.set(x, y, cell);
            }
        }
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.title else {
            return;
        };
        // Keep the corners visible when there is a top border.
        let lane = if self.borders.contains(Borders::TOP) {
            area.inner(rest_core::geometry::Sides::horizontal(1))
        } else {
            area
        };
        if lane.width == 0 {
            return;
        }
        let padded = format!(" {title} ");
        let x = self.title_alignment.x_in(lane, text_width(&padded));
        let style = self.title_style.merge(&self.border_style);
        draw_text_span(buf, x, area.y, &padded, style, lane.right());
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_render", widget = "Block", w = area.width, h = area.height).entered();

        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }
        let buf = &mut frame.buffer;
        set_style_area(buf, area, self.style);
        self.render_borders(area, buf);
        self.render_title(area, buf);
    }
}
