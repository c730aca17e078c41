use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    math8::{mix8, scale8},
};

/// Saturation used by [`fill_rainbow`]
const RAINBOW_SATURATION: u8 = 240;

/// Fill the LEDs with a hue sweep starting at `initial_hue`
///
/// Each following LED advances the hue by `delta_hue`, wrapping around the
/// color wheel.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hsv = Hsv {
        hue: initial_hue,
        sat: RAINBOW_SATURATION,
        val: 255,
    };
    for led in leds {
        *led = hsv2rgb(hsv);
        hsv.hue = hsv.hue.wrapping_add(delta_hue);
    }
}

/// Mix two RGB colors with the truncating 256 denominator of [`mix8`]
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Mix factor (0 = all a, 255 = almost all b)
#[inline]
pub const fn mix_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: mix8(a.r, b.r, amount_of_b),
        g: mix8(a.g, b.g, amount_of_b),
        b: mix8(a.b, b.b, amount_of_b),
    }
}

/// Dim the LEDs toward black by `amount` (0 = unchanged, 255 = black)
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
