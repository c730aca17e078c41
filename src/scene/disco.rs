//! Disco scene
//!
//! Splits the strip into equal segments and repaints each one with a random
//! palette color every `interval` ticks.

use rand::RngCore;

use super::{DEFAULT_DURATION, DEFAULT_INTENSITY, Scene, SceneContext, SceneId};
use crate::{
    bounds::segment_len,
    color::{DISCO_PALETTE, Rgb, random_color},
    error::ConfigError,
};

const DEFAULT_SEGMENTS: usize = 8;
const DEFAULT_INTERVAL: u16 = 50;

#[derive(Debug, Clone)]
pub struct DiscoScene {
    palette: &'static [Rgb],
    segments: usize,
    /// Ticks between repaints
    interval: u16,
    /// Frames rendered per run
    duration: u16,
    intensity: u8,
}

impl Default for DiscoScene {
    fn default() -> Self {
        Self::new(&DISCO_PALETTE)
    }
}

impl DiscoScene {
    pub const fn new(palette: &'static [Rgb]) -> Self {
        Self {
            palette,
            segments: DEFAULT_SEGMENTS,
            interval: DEFAULT_INTERVAL,
            duration: DEFAULT_DURATION,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Set the number of equal segments
    #[must_use]
    pub const fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set the number of ticks between repaints
    #[must_use]
    pub const fn with_interval(mut self, interval: u16) -> Self {
        self.interval = interval;
        self
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

    fn repaint<R: RngCore>(&self, leds: &mut [Rgb], rng: &mut R) {
        let Some(len) = segment_len(leds.len(), self.segments) else {
            return;
        };
        for segment in leds.chunks_exact_mut(len) {
            segment.fill(random_color(self.palette, rng));
        }
    }
}

impl Scene for DiscoScene {
    fn render<R: RngCore>(&mut self, ctx: &mut SceneContext<'_, R>, leds: &mut [Rgb]) -> bool {
        if ctx.tick.is_multiple_of(self.interval.max(1)) {
            self.repaint(leds, ctx.rng);
        }

        ctx.tick.saturating_add(1) < self.duration
    }

    fn intensity(&self) -> u8 {
        self.intensity
    }

    fn validate(&self, led_count: usize) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette {
                scene: SceneId::Disco,
            });
        }
        if segment_len(led_count, self.segments).is_none() {
            return Err(ConfigError::UnevenSegments {
                segments: self.segments,
                led_count,
            });
        }
        Ok(())
    }
}
