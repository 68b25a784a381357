//! A single styled character on screen.

use crate::style::Style;

/// One on-screen character with its visual style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// A space carrying `style`. Background fills are made of these.
    #[inline]
    pub const fn blank(style: Style) -> Self {
        Self { ch: ' ', style }
    }

    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the style (builder).
    #[inline]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::blank(Style::default())
    }
}
