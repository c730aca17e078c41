mod kelvin;
mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use kelvin::kelvin_to_rgb;
pub use palette::{
    BLACK, BLUE, DISCO_PALETTE, GREEN, PINK, PURPLE, RED, TURQUOISE, WHITE, YELLOW,
    random_color,
};
pub use utils::{fade_to_black_by, fill_rainbow, mix_colors, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
pub use smart_leds::hsv::hsv2rgb;
