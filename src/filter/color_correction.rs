//! Color correction filter
//!
//! Applies multiplicative color correction to each RGB channel.
//! Combines a strip correction profile with a color temperature profile.

use crate::color::{Rgb, rgb_from_u32};
use crate::math8::scale8;

use super::Filter;

/// No correction
pub const UNCORRECTED: Rgb = rgb_from_u32(0xFF_FFFF);
/// Typical values for SMD5050 LED strips
pub const TYPICAL_LED_STRIP: Rgb = rgb_from_u32(0xFF_B0F0);
/// Typical values for 8mm "pixels on a string"
pub const TYPICAL_PIXEL_STRING: Rgb = rgb_from_u32(0xFF_E08C);

/// 1900 Kelvin
pub const CANDLE: Rgb = rgb_from_u32(0xFF_9329);
/// 2600 Kelvin
pub const TUNGSTEN_40W: Rgb = rgb_from_u32(0xFF_C58F);
/// 2850 Kelvin
pub const TUNGSTEN_100W: Rgb = rgb_from_u32(0xFF_D6AA);
/// 3200 Kelvin
pub const HALOGEN: Rgb = rgb_from_u32(0xFF_F1E0);
/// 5200 Kelvin
pub const CARBON_ARC: Rgb = rgb_from_u32(0xFF_FAF4);
/// 5400 Kelvin
pub const HIGH_NOON: Rgb = rgb_from_u32(0xFF_FFFB);

/// Color correction filter
///
/// Applies per-channel multiplicative scaling to correct color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl Default for ColorCorrection {
    fn default() -> Self {
        Self::new(UNCORRECTED)
    }
}

impl ColorCorrection {
    /// Create a new color correction from color
    pub const fn new(factors: Rgb) -> Self {
        Self { factors }
    }

    /// Combine an optional strip correction with an optional temperature
    pub const fn from_profiles(correction: Option<Rgb>, temperature: Option<Rgb>) -> Self {
        let correction = match correction {
            Some(correction) => correction,
            None => UNCORRECTED,
        };
        let temperature = match temperature {
            Some(temperature) => temperature,
            None => UNCORRECTED,
        };
        Self::new(Rgb {
            r: scale8(correction.r, temperature.r),
            g: scale8(correction.g, temperature.g),
            b: scale8(correction.b, temperature.b),
        })
    }

    pub const fn factors(self) -> Rgb {
        self.factors
    }

    /// Check if correction is active
    pub const fn is_active(self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }
}

impl Filter for ColorCorrection {
    fn apply(&self, pixel: Rgb) -> Rgb {
        if !self.is_active() {
            return pixel;
        }

        Rgb {
            r: scale8(pixel.r, self.factors.r),
            g: scale8(pixel.g, self.factors.g),
            b: scale8(pixel.b, self.factors.b),
        }
    }
}
