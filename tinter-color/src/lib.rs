mod contrast;
mod errors;
mod hex;
mod names;
mod palette;
mod random;
mod rgb;

pub use contrast::{
    BRIGHTNESS_THRESHOLD, DARK_TEXT, LIGHT_TEXT, text_color_for,
    text_color_for_hex,
};
pub use errors::ColorError;
pub use hex::{HexColor, to_rgb};
pub use names::{CUSTOM_NAME, REFERENCE_COLORS, name_for, nearest_name};
pub use palette::{Palette, SHADE_STEPS, STEP_COUNT, ShadeStep, Swatch};
pub use random::{random_hex, random_hex_with};
pub use rgb::Rgb;
