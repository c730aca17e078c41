//! Rainbow sweep scene
//!
//! The hue phase follows wall-clock time rather than the tick counter, so the
//! rainbow rotates at the same speed whatever the loop period is.

use rand::RngCore;

use super::{DEFAULT_DURATION, DEFAULT_INTENSITY, Scene, SceneContext};
use crate::color::{Rgb, fill_rainbow};

const DEFAULT_DELTA_HUE: u8 = 2;
const DEFAULT_MS_PER_HUE: u64 = 10;

/// Rainbow scene - hue sweep rotating with wall-clock time
#[derive(Debug, Clone)]
pub struct RainbowScene {
    /// Frames rendered per run
    duration: u16,
    /// Hue advance between neighbouring LEDs
    delta_hue: u8,
    /// Milliseconds per one step of the base hue
    ms_per_hue: u64,
    intensity: u8,
}

impl Default for RainbowScene {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            delta_hue: DEFAULT_DELTA_HUE,
            ms_per_hue: DEFAULT_MS_PER_HUE,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

impl RainbowScene {
    /// Set the number of frames rendered per run
    #[must_use]
    pub fn with_duration(mut self, duration: u16) -> Self {
        self.duration = duration;
        self
    }

    /// Set the hue advance between neighbouring LEDs
    #[must_use]
    pub fn with_delta_hue(mut self, delta_hue: u8) -> Self {
        self.delta_hue = delta_hue;
        self
    }

    /// Set how many milliseconds one base hue step takes
    #[must_use]
    pub fn with_ms_per_hue(mut self, ms_per_hue: u64) -> Self {
        self.ms_per_hue = ms_per_hue;
        self
    }

    /// Set the output intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }
}

impl Scene for RainbowScene {
    fn render<R: RngCore>(&mut self, ctx: &mut SceneContext<'_, R>, leds: &mut [Rgb]) -> bool {
        #[allow(clippy::cast_possible_truncation)]
        let base_hue = (ctx.now.as_millis() / self.ms_per_hue.max(1)) as u8;
        fill_rainbow(leds, base_hue, self.delta_hue);

        ctx.tick.saturating_add(1) < self.duration
    }

    fn intensity(&self) -> u8 {
        self.intensity
    }
}
