//! Colors and named styles for the BetterRest screens.
//!
//! A night-sky palette: deep blue surfaces with a warm accent for the result.

use rest_style::{InteractiveStyle, PackedRgba, Style};

// ---------------------------------------------------------------------------
// Color palette
// ---------------------------------------------------------------------------

pub mod bg {
    use super::PackedRgba;

    pub const BASE: PackedRgba = PackedRgba::rgb(16, 20, 36);
    pub const SURFACE: PackedRgba = PackedRgba::rgb(26, 32, 54);
    pub const BAR: PackedRgba = PackedRgba::rgb(34, 42, 70);
    pub const ALERT: PackedRgba = PackedRgba::rgb(40, 48, 80);
}

pub mod fg {
    use super::PackedRgba;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(226, 230, 245);
    pub const SECONDARY: PackedRgba = PackedRgba::rgb(170, 178, 210);
    pub const MUTED: PackedRgba = PackedRgba::rgb(110, 118, 150);
}

pub mod accent {
    use super::PackedRgba;

    pub const MOON: PackedRgba = PackedRgba::rgb(255, 214, 120);
    pub const SKY: PackedRgba = PackedRgba::rgb(120, 160, 255);
    pub const ERROR: PackedRgba = PackedRgba::rgb(255, 110, 110);
    pub const CAPSULE: PackedRgba = PackedRgba::rgb(58, 74, 110);
}

// ---------------------------------------------------------------------------
// Named styles
// ---------------------------------------------------------------------------

pub fn background() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::BASE)
}

pub fn title_bar() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::BAR)
}

pub fn title() -> Style {
    Style::new().fg(accent::MOON).bold()
}

pub fn heading() -> Style {
    Style::new().fg(fg::SECONDARY).bold()
}

pub fn capsule_text() -> Style {
    Style::new().fg(fg::PRIMARY).bold()
}

pub fn section_border() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn section() -> Style {
    Style::new().bg(bg::SURFACE)
}

/// Controls: plain when idle, highlighted when focused.
pub fn control() -> InteractiveStyle {
    InteractiveStyle::new(Style::new().fg(fg::PRIMARY))
        .focused(Style::new().fg(accent::SKY).bold())
        .disabled(Style::new().fg(fg::MUTED).dim())
}

pub fn button() -> InteractiveStyle {
    InteractiveStyle::new(Style::new().fg(accent::SKY))
        .focused(Style::new().fg(bg::BASE).bg(accent::SKY).bold())
}

pub fn result_label() -> Style {
    Style::new().fg(fg::SECONDARY)
}

pub fn result_time() -> Style {
    Style::new().fg(accent::MOON).bold()
}

pub fn error_text() -> Style {
    Style::new().fg(accent::ERROR).bold()
}

pub fn alert() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::ALERT)
}

pub fn alert_border() -> Style {
    Style::new().fg(accent::SKY)
}

pub fn hints() -> Style {
    Style::new().fg(fg::MUTED).bg(bg::BAR)
}
