use crate::hex::HexColor;
use crate::rgb::Rgb;

/// Foreground for bright backgrounds.
pub const DARK_TEXT: HexColor = HexColor::from_rgb(Rgb::new(0x11, 0x18, 0x27));
/// Foreground for dark backgrounds.
pub const LIGHT_TEXT: HexColor =
    HexColor::from_rgb(Rgb::new(0xf8, 0xfa, 0xfc));
/// Backgrounds brighter than this get [`DARK_TEXT`].
pub const BRIGHTNESS_THRESHOLD: u32 = 140;

/// Pick a readable foreground for `background`.
pub fn text_color_for(background: Rgb) -> HexColor {
    // Compare in milli-units so the threshold test is exact.
    if background.luma_milli() > BRIGHTNESS_THRESHOLD * 1000 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Like [`text_color_for`], but falls back to [`DARK_TEXT`] when `input`
/// does not parse.
pub fn text_color_for_hex(input: &str) -> HexColor {
    HexColor::normalize(input)
        .map(|color| text_color_for(color.rgb()))
        .unwrap_or(DARK_TEXT)
}
