#![forbid(unsafe_code)]

use crate::block::{Alignment, Block};
use crate::{Widget, draw_text_span, set_style_area, text_width};
use rest_core::geometry::Rect;
use rest_render::frame::Frame;
use rest_style::Style;
use unicode_width::UnicodeWidthStr;

/// A widget that renders multi-line text.
#[derive(Debug, Clone, Default)]
pub struct Paragraph<'a> {
    text: &'a str,
    block: Option<Block<'a>>,
    style: Style,
    wrap: bool,
    alignment: Alignment,
}

impl<'a> Paragraph<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Break lines wider than the area at word boundaries.
    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Rows needed to show the text in `width` columns.
    pub fn line_count(&self, width: u16) -> u16 {
        let rows = self.visual_lines(width).len();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn visual_lines(&self, width: u16) -> Vec<String> {
        self.text
            .lines()
            .flat_map(|line| {
                if self.wrap && line.width() > width as usize {
                    wrap_words(line, width as usize)
                } else {
                    vec![line.to_string()]
                }
            })
            .collect()
    }
}

/// Greedy word wrap. Words longer than `width` are split by character.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        if current.width() + sep + word.width() <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if current.width() + cw > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

impl Widget for Paragraph<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("widget_render", widget = "Paragraph", w = area.width, h = area.height).entered();

        set_style_area(&mut frame.buffer, area, self.style);

        let text_area = match self.block {
            Some(ref b) => {
                b.render(area, frame);
                b.inner(area)
            }
            None => area,
        };
        if text_area.is_empty() {
            return;
        }

        for (row, line) in self.visual_lines(text_area.width).iter().enumerate() {
            let Ok(row) = u16::try_from(row) else { break };
            if row >= text_area.height {
                break;
            }
            let x = self.alignment.x_in(text_area, text_width(line));
            draw_text_span(
                &mut frame.buffer,
                x,
                text_area.y + row,
                line,
                self.style,
                text_area.right(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn renders_lines_top_down() {
        let mut frame = Frame::new(10, 3);
        Paragraph::new("one\ntwo").render(Rect::new(0, 0, 10, 3), &mut frame);
        assert_eq!(frame.buffer.to_text(), "one\ntwo\n");
    }

    #[test]
    fn center_alignment() {
        let mut frame = Frame::new(11, 1);
        Paragraph::new("23:30")
            .alignment(Alignment::Center)
            .render(Rect::new(0, 0, 11, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "   23:30");
    }

    #[test]
    fn wraps_at_word_boundary() {
        let lines = wrap_words("Sorry, there was a problem calculating your bedtime.", 20);
        assert_eq!(
            lines,
            vec!["Sorry, there was a", "problem calculating", "your bedtime."]
        );
    }

    #[test]
    fn long_word_is_split() {
        assert_eq!(wrap_words("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn clips_to_height() {
        let mut frame = Frame::new(4, 1);
        Paragraph::new("a\nb\nc").render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(frame.buffer.to_text(), "a");
        assert_eq!(Paragraph::new("a\nb\nc").line_count(4), 3);
    }

    proptest! {
        #[test]
        fn wrapped_lines_fit(text in "[a-z ]{0,80}", width in 1usize..30) {
            for line in wrap_words(&text, width) {
                prop_assert!(line.width() <= width, "{:?} wider than {}", line, width);
            }
        }
    }
}
