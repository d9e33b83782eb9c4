#![forbid(unsafe_code)]

//! Modal alert: title, message, and a single `OK` button.
//!
//! [`Alert`] renders a dimmed backdrop over the whole area and a centered
//! box on top. [`AlertState`] tracks whether the alert is showing and
//! swallows every key while it is.

use crate::block::{Alignment, Block};
use crate::borders::BorderType;
use crate::button::Button;
use crate::paragraph::wrap_words;
use crate::{Widget, clear_area, draw_text_span, set_style_area, text_width};
use rest_core::event::{Event, KeyCode};
use rest_core::geometry::{Rect, Sides};
use rest_render::cell::PackedRgba;
use rest_render::frame::Frame;
use rest_style::Style;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 56;

/// Outcome of routing an event through an open alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// The alert was closed.
    Dismissed,
    /// The event was swallowed without effect.
    Consumed,
}

/// Whether the alert is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertState {
    open: bool,
}

impl AlertState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Route `event` through the alert.
    ///
    /// Returns `None` when the alert is closed, so the caller handles the
    /// event normally. While open, `Enter`, `Esc`, and `o` dismiss; every
    /// other key press is consumed.
    pub fn handle_event(&mut self, event: &Event) -> Option<AlertAction> {
        if !self.open {
            return None;
        }
        let Event::Key(key) = event else {
            return Some(AlertAction::Consumed);
        };
        if !key.is_press() {
            return Some(AlertAction::Consumed);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Escape => {}
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'o') => {}
            _ => return Some(AlertAction::Consumed),
        }
        self.open = false;
        #[cfg(feature = "tracing")]
        tracing::debug!("alert dismissed");
        Some(AlertAction::Dismissed)
    }
}

/// The alert box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert<'a> {
    title: &'a str,
    message: &'a str,
    button: &'a str,
    style: Style,
    border_style: Style,
    backdrop: Style,
}

impl<'a> Alert<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            button: "OK",
            style: Style::new(),
            border_style: Style::new(),
            backdrop: Style::new().fg(PackedRgba::rgb(90, 90, 90)).dim(),
        }
    }

    #[must_use]
    pub fn button(mut self, label: &'a str) -> Self {
        self.button = label;
        self
    }

    /// Colors of the box interior.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// The box rectangle inside `area`.
    pub fn box_area(&self, area: Rect) -> Rect {
        let natural = text_width(self.title)
            .max(text_width(self.message))
            .saturating_add(6);
        let width = natural
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(area.width.saturating_sub(2).max(1));
        let text_width = usize::from(width.saturating_sub(4));
        let message_lines = wrap_words(self.message, text_width).len().max(1);
        // Border, title, gap, message, gap, button, border.
        let height = u16::try_from(message_lines).unwrap_or(u16::MAX).saturating_add(6);
        area.centered(width, height)
    }
}

impl Widget for Alert<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        set_style_area(&mut frame.buffer, area, self.backdrop);

        let outer = self.box_area(area);
        clear_area(&mut frame.buffer, outer, self.style);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style.merge(&self.style))
            .render(outer, frame);

        let inner = outer.inner(Sides {
            top: 1,
            right: 2,
            bottom: 1,
            left: 2,
        });
        if inner.is_empty() {
            return;
        }

        let title_style = self.style.bold();
        let x = Alignment::Center.x_in(inner, text_width(self.title));
        draw_text_span(&mut frame.buffer, x, inner.y, self.title, title_style, inner.right());

        let lines = wrap_words(self.message, usize::from(inner.width));
        for (i, line) in lines.iter().enumerate() {
            let Ok(offset) = u16::try_from(i + 2) else { break };
            if offset >= inner.height.saturating_sub(1) {
                break;
            }
            let x = Alignment::Center.x_in(inner, text_width(line));
            draw_text_span(&mut frame.buffer, x, inner.y + offset, line, self.style, inner.right());
        }

        let button_row = inner.row(inner.height.saturating_sub(1));
        Button::new(self.button)
            .focused(true)
            .alignment(Alignment::Center)
            .render(button_row, frame);
    }
}
