//! Named colors and the palette used by randomized scenes

use rand::{Rng, RngCore};

use super::{Rgb, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const GREEN: Rgb = rgb_from_u32(0x00_8000);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const PURPLE: Rgb = rgb_from_u32(0x80_0080);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF00);
pub const TURQUOISE: Rgb = rgb_from_u32(0x40_E0D0);
pub const PINK: Rgb = rgb_from_u32(0xFF_C0CB);

// Saturated party colors shared by disco, fader and flow scenes
#[allow(clippy::unreadable_literal)]
pub const DISCO_PALETTE: [Rgb; 7] = hex_palette![
    0xFF0000, // Red
    0x0000FF, // Blue
    0x008000, // Green
    0x800080, // Purple
    0xFFFF00, // Yellow
    0x40E0D0, // Turquoise
    0xFFC0CB  // Pink
];

/// Pick a uniformly random color from the palette
///
/// Returns black for an empty palette; scenes reject empty palettes at
/// configuration time.
pub fn random_color<R: RngCore>(palette: &[Rgb], rng: &mut R) -> Rgb {
    if palette.is_empty() {
        return BLACK;
    }
    palette[rng.random_range(0..palette.len())]
}
