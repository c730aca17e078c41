//! LED strip output
//!
//! [`OutputDriver`] is the flush seam the scheduler writes every frame to.
//! [`SmartLedsOutput`] implements it on top of any `smart_leds` writer and
//! applies the strip configuration on the way out.

use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::filter::{ColorCorrection, Filter, TYPICAL_LED_STRIP};

/// Intensity for one-shot utility flushes (blank, whitewash)
pub const FULL_INTENSITY: u8 = 255;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// A write is synchronous and returns once the frame has been clocked out.
pub trait OutputDriver {
    /// Write colors to the LED strip at the given intensity (0-255)
    fn write(&mut self, colors: &[Rgb], intensity: u8);
}

/// LED chipset driven by the platform writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chipset {
    /// Clocked SPI-like strip (data + clock)
    Apa102,
    /// Single-wire strip
    Ws2812,
}

/// Order in which the strip expects the color channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// Move the channels of `color` into wire order
    ///
    /// The returned value's `r`, `g`, `b` fields hold the first, second and
    /// third byte on the wire.
    pub const fn apply(self, color: Rgb) -> Rgb {
        let Rgb { r, g, b } = color;
        let (first, second, third) = match self {
            Self::Rgb => (r, g, b),
            Self::Rbg => (r, b, g),
            Self::Grb => (g, r, b),
            Self::Gbr => (g, b, r),
            Self::Brg => (b, r, g),
            Self::Bgr => (b, g, r),
        };
        Rgb {
            r: first,
            g: second,
            b: third,
        }
    }
}

/// Strip configuration applied once at startup
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub chipset: Chipset,
    pub data_pin: u8,
    /// Clock pin for clocked chipsets
    pub clock_pin: Option<u8>,
    pub color_order: ColorOrder,
    /// Strip color correction profile
    pub correction: Option<Rgb>,
    /// Color temperature profile
    pub temperature: Option<Rgb>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chipset: Chipset::Apa102,
            data_pin: 11,
            clock_pin: Some(13),
            color_order: ColorOrder::Bgr,
            correction: Some(TYPICAL_LED_STRIP),
            temperature: None,
        }
    }
}

/// [`OutputDriver`] over a `smart_leds` writer
///
/// Every flush applies color correction, reorders channels and scales the
/// frame by the requested intensity.
pub struct SmartLedsOutput<W> {
    writer: W,
    correction: ColorCorrection,
    color_order: ColorOrder,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    /// Wrap a platform writer that was set up for `config`
    pub fn configure(writer: W, config: &OutputConfig) -> Self {
        #[cfg(feature = "esp32-log")]
        println!(
            "[SmartLedsOutput.configure] {:?} data={} clock={:?} order={:?}",
            config.chipset, config.data_pin, config.clock_pin, config.color_order
        );
        Self {
            writer,
            correction: ColorCorrection::from_profiles(config.correction, config.temperature),
            color_order: config.color_order,
        }
    }

    pub const fn correction(&self) -> ColorCorrection {
        self.correction
    }

    /// Get a reference to the platform writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Give the platform writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb], intensity: u8) {
        let correction = self.correction;
        let order = self.color_order;
        let pixels = colors
            .iter()
            .map(move |pixel| order.apply(correction.apply(*pixel)));

        // The strip has no way to report back; a failed frame is simply lost.
        if self.writer.write(brightness(pixels, intensity)).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] write failed");
        }
    }
}
