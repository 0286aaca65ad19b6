use std::fmt::{self, Display, Formatter};

use crate::errors::ColorError;
use crate::rgb::Rgb;

const HEX_DIGITS: usize = 6;

/// A validated color, rendered canonically as lowercase `#rrggbb`.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct HexColor(Rgb);

impl HexColor {
    /// Parse user input into a color.
    ///
    /// Surrounding whitespace and a single leading `#` are ignored; what
    /// remains must be exactly six hex digits in either case.
    pub fn normalize(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let len = body.chars().count();
        if len != HEX_DIGITS {
            return Err(ColorError::Length { len });
        }

        let mut digits = [0u8; HEX_DIGITS];
        for (slot, ch) in digits.iter_mut().zip(body.chars()) {
            let digit = ch.to_digit(16).ok_or(ColorError::Digit { ch })?;
            *slot = digit as u8;
        }

        Ok(Self(Rgb::new(
            (digits[0] << 4) | digits[1],
            (digits[2] << 4) | digits[3],
            (digits[4] << 4) | digits[5],
        )))
    }

    /// Wrap channels that are already in range.
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Uppercase `#RRGGBB`, the form handed to the clipboard.
    pub fn to_uppercase(self) -> String {
        let Rgb { r, g, b } = self.0;
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// Channels of `input`, or `None` when it is not a valid hex color.
pub fn to_rgb(input: &str) -> Option<Rgb> {
    HexColor::normalize(input).ok().map(HexColor::rgb)
}
