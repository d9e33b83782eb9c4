#![forbid(unsafe_code)]

//! Frame = Buffer + cursor metadata for one render pass.

use crate::buffer::Buffer;
use rest_core::geometry::Rect;

/// Passed to `Model::view()`; widgets draw into [`Frame::buffer`].
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,
    /// Where the terminal cursor should sit after presenting, if anywhere.
    pub cursor_position: Option<(u16, u16)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor_position: None,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The whole frame as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.area()
    }

    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }
}
