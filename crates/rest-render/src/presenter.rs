#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! Turns a [`BufferDiff`] into terminal output. The current style and cursor
//! position are tracked so escape sequences are only written when they
//! change, and everything is flushed once per frame.
//!
//! # Usage
//!
//! ```no_run
//! use rest_render::buffer::Buffer;
//! use rest_render::diff::BufferDiff;
//! use rest_render::presenter::Presenter;
//!
//! let mut presenter = Presenter::new(std::io::stdout());
//! let current = Buffer::new(80, 24);
//! let next = Buffer::new(80, 24);
//! let diff = BufferDiff::compute(&current, &next);
//! presenter.present(&next, &diff)?;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, BufWriter, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent, PackedRgba, StyleFlags};
use crate::diff::{BufferDiff, ChangeRun};

const BUFFER_CAPACITY: usize = 16 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

/// Counters for one presented frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentStats {
    pub cells_changed: usize,
    pub run_count: usize,
}

/// State-tracked ANSI presenter.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    /// `None` means unknown; the next cell always emits its style.
    current_style: Option<CellStyle>,
    cursor: Option<(u16, u16)>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
            cursor: None,
        }
    }

    /// Emit the cells named by `diff`, reset the style, and flush.
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<PresentStats> {
        let runs = diff.runs();
        let stats = PresentStats {
            cells_changed: diff.len(),
            run_count: runs.len(),
        };

        self.emit_runs(buffer, &runs)?;

        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        self.current_style = None;
        self.writer.flush()?;

        tracing::trace!(
            cells = stats.cells_changed,
            runs = stats.run_count,
            "frame presented"
        );
        Ok(stats)
    }

    /// Clear the screen and redraw every cell of `buffer`.
    pub fn present_full(&mut self, buffer: &Buffer) -> io::Result<PresentStats> {
        self.clear_screen()?;
        self.present(buffer, &BufferDiff::full(buffer))
    }

    fn emit_runs(&mut self, buffer: &Buffer, runs: &[ChangeRun]) -> io::Result<()> {
        for run in runs {
            self.move_cursor_to(run.x0, run.y)?;
            for x in run.x0..=run.x1 {
                if let Some(cell) = buffer.get(x, run.y) {
                    self.emit_cell(cell, x, run.y)?;
                }
            }
        }
        Ok(())
    }

    fn emit_cell(&mut self, cell: &Cell, x: u16, y: u16) -> io::Result<()> {
        // The wide glyph to the left already advanced the cursor.
        let ch = match cell.content {
            CellContent::Continuation => return Ok(()),
            CellContent::Empty => ' ',
            CellContent::Char(c) => c,
        };
        if self.cursor != Some((x, y)) {
            self.move_cursor_to(x, y)?;
        }
        self.emit_style_changes(cell)?;
        queue!(self.writer, Print(ch))?;

        let width = ch.width().unwrap_or(1).max(1) as u16;
        self.cursor = Some((x.saturating_add(width), y));
        Ok(())
    }

    fn emit_style_changes(&mut self, cell: &Cell) -> io::Result<()> {
        let style = CellStyle::from_cell(cell);
        if self.current_style == Some(style) {
            return Ok(());
        }

        // Reset then apply; simpler than computing attribute deltas.
        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        if !style.fg.is_transparent() {
            queue!(self.writer, SetForegroundColor(to_color(style.fg)))?;
        }
        if !style.bg.is_transparent() {
            queue!(self.writer, SetBackgroundColor(to_color(style.bg)))?;
        }
        for (flag, attr) in [
            (StyleFlags::BOLD, Attribute::Bold),
            (StyleFlags::DIM, Attribute::Dim),
            (StyleFlags::ITALIC, Attribute::Italic),
            (StyleFlags::UNDERLINE, Attribute::Underlined),
            (StyleFlags::REVERSE, Attribute::Reverse),
        ] {
            if style.attrs.contains(flag) {
                queue!(self.writer, SetAttribute(attr))?;
            }
        }

        self.current_style = Some(style);
        Ok(())
    }

    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor == Some((x, y)) {
            return Ok(());
        }
        queue!(self.writer, MoveTo(x, y))?;
        self.cursor = Some((x, y));
        Ok(())
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.writer, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        self.current_style = None;
        self.cursor = None;
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.writer, Hide)?;
        self.writer.flush()
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.writer, Show)?;
        self.writer.flush()
    }

    /// Park the terminal cursor at `(x, y)` after a frame.
    pub fn position_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.move_cursor_to(x, y)?;
        self.writer.flush()
    }

    /// Forget tracked state, e.g. after something else wrote to the terminal.
    pub fn reset(&mut self) {
        self.current_style = None;
        self.cursor = None;
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

fn to_color(color: PackedRgba) -> Color {
    Color::Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}
