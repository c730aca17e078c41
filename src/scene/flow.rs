//! Flow scene: a comet traveling along the strip
//!
//! The front moves `step` LEDs per tick and wraps around. Every LED is
//! painted from the front backwards, darker the further it trails behind.
//! The comet switches to a new palette color five times per run.

use rand::RngCore;

use super::{DEFAULT_INTENSITY, Scene, SceneContext, SceneId};
use crate::{
    color::{BLACK, DISCO_PALETTE, Rgb, mix_colors, random_color},
    error::ConfigError,
    math8::ramp8,
};

const DEFAULT_STEP: usize = 5;
const COLOR_CHANGES_PER_RUN: usize = 5;

#[derive(Debug, Clone)]
pub struct FlowScene {
    palette: &'static [Rgb],
    /// Index of the comet head
    front: usize,
    color: Rgb,
    /// LEDs the front advances per tick
    step: usize,
    intensity: u8,
}

impl Default for FlowScene {
    fn default() -> Self {
        Self::new(&DISCO_PALETTE)
    }
}

impl FlowScene {
    pub fn new(palette: &'static [Rgb]) -> Self {
        Self {
            palette,
            front: 0,
            color: palette.first().copied().unwrap_or_default(),
            step: DEFAULT_STEP,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Set the number of LEDs the front advances per tick
    #[must_use]
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Set the output intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    pub const fn front(&self) -> usize {
        self.front
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    fn render_tail(&self, leds: &mut [Rgb]) {
        let len = leds.len();
        for distance in 0..len {
            let index = (self.front + len - distance) % len;
            leds[index] = mix_colors(self.color, BLACK, ramp8(distance, len));
        }
    }
}

impl Scene for FlowScene {
    fn render<R: RngCore>(&mut self, ctx: &mut SceneContext<'_, R>, leds: &mut [Rgb]) -> bool {
        let len = leds.len();
        if len == 0 {
            return false;
        }

        let color_period = (len / COLOR_CHANGES_PER_RUN).max(1);
        if usize::from(ctx.tick).is_multiple_of(color_period) {
            self.color = random_color(self.palette, ctx.rng);
        }

        self.front %= len;
        self.render_tail(leds);
        self.front = (self.front + self.step) % len;

        usize::from(ctx.tick) < len
    }

    fn intensity(&self) -> u8 {
        self.intensity
    }

    fn reset(&mut self) {
        self.front = 0;
    }

    fn validate(&self, _led_count: usize) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette {
                scene: SceneId::Flow,
            });
        }
        Ok(())
    }
}
