#![forbid(unsafe_code)]

//! Core widgets for BetterRest.
//!
//! Widgets are plain values built fresh in every `view()` call. They borrow
//! whatever text they show and draw themselves into a [`Frame`] inside a
//! given [`Rect`]. Input state (the picked time, stepper values, focus) lives
//! in the app model, not in the widgets.

pub mod alert;
pub mod block;
pub mod borders;
pub mod button;
pub mod capsule;
pub mod paragraph;
pub mod stepper;
pub mod time_picker;

use rest_core::geometry::Rect;
use rest_render::buffer::Buffer;
use rest_render::cell::{Cell, CellContent};
use rest_render::frame::Frame;
use rest_style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A renderable component.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Apply `style` to every cell of `area`, keeping content.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    let area = area.intersection(&buf.area());
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                style.apply_to(cell);
            }
        }
    }
}

/// Blank out `area` and paint it with `style`.
pub fn clear_area(buf: &mut Buffer, area: Rect, style: Style) {
    buf.fill(area, style.to_cell());
}

/// Draw `text` at `(x, y)` on top of the existing cells, clipped at `max_x`.
///
/// Each glyph keeps the colors already under it unless `style` sets them.
/// Returns the column after the last drawn glyph.
pub fn draw_text_span(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
    let max_x = max_x.min(buf.width());
    let mut cx = x;
    for ch in text.chars() {
        let w = match ch.width() {
            Some(0) | None => continue,
            Some(w) => w as u16,
        };
        if cx.saturating_add(w) > max_x {
            break;
        }
        let mut cell = buf.get(cx, y).copied().unwrap_or_default();
        style.apply_to(&mut cell);
        cell.content = CellContent::Char(ch);
        buf.set(cx, y, cell);
        for extra in 1..w {
            buf.set(
                cx + extra,
                y,
                Cell {
                    content: CellContent::Continuation,
                    ..cell
                },
            );
        }
        cx += w;
    }
    cx
}

/// Display width of `text` in cells, saturated to `u16`.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_render::cell::PackedRgba;

    #[test]
    fn draw_text_span_keeps_background() {
        let mut buf = Buffer::new(10, 1);
        let bg = PackedRgba::rgb(1, 2, 3);
        let area = buf.area();
        clear_area(&mut buf, area, Style::new().bg(bg));
        draw_text_span(&mut buf, 1, 0, "ok", Style::new().bold(), 10);
        let cell = buf.get(1, 0).copied().unwrap_or_default();
        assert_eq!(cell.bg, bg);
        assert_eq!(buf.row_text(0), " ok");
    }

    #[test]
    fn set_style_area_skips_content() {
        let mut buf = Buffer::new(4, 1);
        buf.set_string(0, 0, "abcd", Cell::default(), 4);
        let fg = PackedRgba::rgb(9, 9, 9);
        set_style_area(&mut buf, Rect::new(1, 0, 2, 1), Style::new().fg(fg));
        assert_eq!(buf.row_text(0), "abcd");
        assert_eq!(buf.get(1, 0).map(|c| c.fg), Some(fg));
        assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(PackedRgba::TRANSPARENT));
    }

    #[test]
    fn text_width_counts_cells() {
        assert_eq!(text_width("8.25"), 4);
        assert_eq!(text_width("☕"), 2);
    }
}
