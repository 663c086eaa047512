//! Small value types shared by the renderer and the surfaces.

use std::fmt;

/// An opaque RGB color, packed as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

/// A coordinate as handed over by a caller: either already numeric, or text
/// that still has to go through the coercion boundary (see [`crate::coerce`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoordArg<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for CoordArg<'_> {
    fn from(value: f64) -> Self {
        CoordArg::Number(value)
    }
}

impl From<i32> for CoordArg<'_> {
    fn from(value: i32) -> Self {
        CoordArg::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for CoordArg<'a> {
    fn from(value: &'a str) -> Self {
        CoordArg::Text(value)
    }
}

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

impl TextAlign {
    /// SVG `text-anchor` keyword
    pub fn svg_anchor(self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::Center => "middle",
            TextAlign::End => "end",
        }
    }
}
