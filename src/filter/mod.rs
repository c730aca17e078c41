use crate::color::Rgb;

mod color_correction;

pub(crate) trait Filter {
    /// Apply the filter to a single pixel
    fn apply(&self, pixel: Rgb) -> Rgb;
}

pub use color_correction::{
    CANDLE, CARBON_ARC, HALOGEN, HIGH_NOON, ColorCorrection, TUNGSTEN_40W, TUNGSTEN_100W,
    TYPICAL_LED_STRIP, TYPICAL_PIXEL_STRING, UNCORRECTED,
};
