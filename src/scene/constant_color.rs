//! Constant color fill scene
//!
//! Fills all LEDs with a single solid color for a fixed number of ticks.

use rand::RngCore;

use super::{DEFAULT_DURATION, DEFAULT_INTENSITY, Scene, SceneContext};
use crate::color::Rgb;

/// Constant color scene - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct ConstantColorScene {
    color: Rgb,
    /// Frames rendered per run
    duration: u16,
    intensity: u8,
}

impl ConstantColorScene {
    /// Create a new constant color scene
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            duration: DEFAULT_DURATION,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Set the number of frames rendered per run
    #[must_use]
    pub const fn with_duration(mut self, duration: u16) -> Self {
        self.duration = duration;
        self
    }

    /// Set the output intensity
    #[must_use]
    pub const fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Scene for ConstantColorScene {
    fn render<R: RngCore>(&mut self, ctx: &mut SceneContext<'_, R>, leds: &mut [Rgb]) -> bool {
        leds.fill(self.color);
        ctx.tick.saturating_add(1) < self.duration
    }

    fn intensity(&self) -> u8 {
        self.intensity
    }
}
