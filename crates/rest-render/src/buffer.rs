#![forbid(unsafe_code)]

//! Fixed-size 2D grid of [`Cell`]s.

use crate::cell::{Cell, CellContent};
use rest_core::geometry::Rect;
use unicode_width::UnicodeWidthChar;

/// Row-major cell grid.
///
/// Writes outside the grid are ignored, so widgets can draw without
/// bounds-checking every coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Blank buffer of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Cell at `(x, y)`.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(x, y)`.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell of `rect` (clipped to the buffer) with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Write `text` starting at `(x, y)` using `template` for colors and
    /// attributes, stopping before `max_x`.
    ///
    /// Wide characters occupy two cells; one that would straddle `max_x` is
    /// not drawn. Returns the column after the last drawn glyph.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, template: Cell, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;
        for ch in text.chars() {
            let w = match ch.width() {
                Some(0) | None => continue,
                Some(w) => w as u16,
            };
            if cx.saturating_add(w) > max_x {
                break;
            }
            let mut cell = template;
            cell.content = CellContent::Char(ch);
            self.set(cx, y, cell);
            for extra in 1..w {
                let mut tail = template;
                tail.content = CellContent::Continuation;
                self.set(cx + extra, y, tail);
            }
            cx += w;
        }
        cx
    }

    /// Text of row `y` with trailing blanks trimmed.
    ///
    /// Used by tests and headless snapshots.
    pub fn row_text(&self, y: u16) -> String {
        let mut line = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(ch) = self.get(x, y).and_then(|c| c.content.as_char()) {
                line.push(ch);
            }
        }
        line.trim_end().to_string()
    }

    /// Every row via [`row_text`](Self::row_text), joined with newlines.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any row contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }
}
