use crate::hex::HexColor;
use crate::rgb::Rgb;

/// Name returned when the input is not a color at all.
pub const CUSTOM_NAME: &str = "Custom";

/// Hue families used for naming, in tie-break order.
pub const REFERENCE_COLORS: [(HexColor, &str); 8] = [
    (HexColor::from_rgb(Rgb::new(0xef, 0x44, 0x44)), "Red"),
    (HexColor::from_rgb(Rgb::new(0xf9, 0x73, 0x16)), "Orange"),
    (HexColor::from_rgb(Rgb::new(0xea, 0xb3, 0x08)), "Yellow"),
    (HexColor::from_rgb(Rgb::new(0x22, 0xc5, 0x5e)), "Green"),
    (HexColor::from_rgb(Rgb::new(0x06, 0xb6, 0xd4)), "Cyan"),
    (HexColor::from_rgb(Rgb::new(0x3b, 0x82, 0xf6)), "Blue"),
    (HexColor::from_rgb(Rgb::new(0x8b, 0x5c, 0xf6)), "Violet"),
    (HexColor::from_rgb(Rgb::new(0xec, 0x48, 0x99)), "Pink"),
];

/// Name of the reference hue closest to `rgb` in L1 distance.
pub fn nearest_name(rgb: Rgb) -> &'static str {
    nearest_in(rgb, &REFERENCE_COLORS)
}

/// Like [`nearest_name`], but falls back to [`CUSTOM_NAME`] when `input`
/// does not parse.
pub fn name_for(input: &str) -> &'static str {
    HexColor::normalize(input)
        .map(|color| nearest_name(color.rgb()))
        .unwrap_or(CUSTOM_NAME)
}

// Strict comparison keeps the earliest entry on ties.
fn nearest_in(rgb: Rgb, table: &[(HexColor, &'static str)]) -> &'static str {
    let mut best = CUSTOM_NAME;
    let mut best_distance = u32::MAX;

    for &(reference, label) in table {
        let distance = rgb.manhattan_distance(reference.rgb());
        if distance < best_distance {
            best_distance = distance;
            best = label;
        }
    }

    best
}
