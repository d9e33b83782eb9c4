//! Border styling primitives.

use rest_render::drawing::BorderChars;

/// Border style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Square,
    /// Single line border with rounded corners.
    Rounded,
    Double,
}

impl BorderType {
    pub const fn to_border_chars(self) -> BorderChars {
        match self {
            BorderType::Square => BorderChars::SQUARE,
            BorderType::Rounded => BorderChars::ROUNDED,
            BorderType::Double => BorderChars::DOUBLE,
        }
    }
}

bitflags::bitflags! {
    /// Which borders to render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL    = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}
