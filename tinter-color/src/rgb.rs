use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::ColorError;
use crate::hex::HexColor;

const BLACK_CHANNEL: f64 = 0.0;
const WHITE_CHANNEL: f64 = 255.0;

/// Luma weights from ITU-R BT.601, scaled by 1000.
const LUMA_RED: u32 = 299;
const LUMA_GREEN: u32 = 587;
const LUMA_BLUE: u32 = 114;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend every channel linearly toward white (`percent >= 0`) or
    /// black (`percent < 0`) by `|percent|`.
    ///
    /// `percent` must lie in `[-1, 1]`. Out-of-range values are a caller
    /// bug: debug builds assert, release builds saturate at the channel
    /// bounds.
    pub fn shade(self, percent: f64) -> Self {
        debug_assert!(
            (-1.0..=1.0).contains(&percent),
            "shade offset {percent} outside [-1, 1]"
        );

        let target = if percent < 0.0 {
            BLACK_CHANNEL
        } else {
            WHITE_CHANNEL
        };
        let weight = percent.abs();
        let blend = |channel: u8| {
            let channel = f64::from(channel);
            ((target - channel) * weight + channel).round() as u8
        };

        Self {
            r: blend(self.r),
            g: blend(self.g),
            b: blend(self.b),
        }
    }

    /// Perceived brightness multiplied by 1000, exact in integers.
    pub fn luma_milli(self) -> u32 {
        u32::from(self.r) * LUMA_RED
            + u32::from(self.g) * LUMA_GREEN
            + u32::from(self.b) * LUMA_BLUE
    }

    /// Perceived brightness in `0.0..=255.0`.
    pub fn brightness(self) -> f64 {
        f64::from(self.luma_milli()) / 1000.0
    }

    /// Sum of absolute per-channel differences (L1 distance).
    pub fn manhattan_distance(self, other: Rgb) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::normalize(s).map(HexColor::rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(color: HexColor) -> Self {
        color.rgb()
    }
}
