use rand::Rng;

use crate::hex::HexColor;
use crate::rgb::Rgb;

const MAX_COLOR: u32 = 0xff_ffff;

/// A uniformly random 24-bit color from the thread-local generator.
pub fn random_hex() -> HexColor {
    random_hex_with(&mut rand::thread_rng())
}

/// A uniformly random 24-bit color drawn from `rng`.
pub fn random_hex_with<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let value = rng.gen_range(0..=MAX_COLOR);
    let [_, r, g, b] = value.to_be_bytes();
    HexColor::from_rgb(Rgb::new(r, g, b))
}
