//! Fader scene
//!
//! Each half of the strip breathes on its own: it is filled with its color and
//! faded toward black by a level that sweeps between 0 and 255. Whenever a
//! half goes fully dark it picks a new palette color. The scene completes
//! after the first half has gone dark `cycles` times.

use rand::RngCore;

use super::{DEFAULT_INTENSITY, Scene, SceneContext, SceneId};
use crate::{
    bounds::center_of,
    color::{DISCO_PALETTE, Rgb, fade_to_black_by, random_color},
    error::ConfigError,
};

const DEFAULT_STEP: u8 = 5;
const DEFAULT_CYCLES: u8 = 4;

/// Direction the fade level is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Level increases, the half gets darker
    Darken,
    /// Level decreases, the half gets brighter
    Brighten,
}

/// Fade state of one half of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeHalf {
    pub color: Rgb,
    /// Fade-to-black amount (0 = full color, 255 = black)
    pub level: u8,
    pub direction: FadeDirection,
}

impl FadeHalf {
    pub const fn new(color: Rgb, level: u8, direction: FadeDirection) -> Self {
        Self {
            color,
            level,
            direction,
        }
    }

    fn render(&self, leds: &mut [Rgb]) {
        leds.fill(self.color);
        fade_to_black_by(leds, self.level);
    }

    /// Step the level; returns `true` when the half has just gone fully dark
    fn step<R: RngCore>(&mut self, step: u8, palette: &[Rgb], rng: &mut R) -> bool {
        match self.direction {
            FadeDirection::Darken => {
                self.level = self.level.saturating_add(step);
                if self.level == u8::MAX {
                    self.color = random_color(palette, rng);
                    self.direction = FadeDirection::Brighten;
                    return true;
                }
            }
            FadeDirection::Brighten => {
                self.level = self.level.saturating_sub(step);
                if self.level == 0 {
                    self.direction = FadeDirection::Darken;
                }
            }
        }
        false
    }
}

#[derive(Debug, Clone)]
pub struct FaderScene {
    palette: &'static [Rgb],
    halves: [FadeHalf; 2],
    /// State restored by an explicit reset
    initial: [FadeHalf; 2],
    /// Level change per tick
    step: u8,
    /// Dark events of the first half needed to complete
    cycles: u8,
    /// Dark events of the first half in the current run
    completed: u8,
    intensity: u8,
}

impl Default for FaderScene {
    fn default() -> Self {
        Self::new(&DISCO_PALETTE)
    }
}

impl FaderScene {
    /// Create a fader; the first half starts bright, the second starts dark
    pub fn new(palette: &'static [Rgb]) -> Self {
        let first = palette.first().copied().unwrap_or_default();
        let second = palette.last().copied().unwrap_or_default();
        let halves = [
            FadeHalf::new(first, 0, FadeDirection::Darken),
            FadeHalf::new(second, u8::MAX, FadeDirection::Brighten),
        ];
        Self {
            palette,
            halves,
            initial: halves,
            step: DEFAULT_STEP,
            cycles: DEFAULT_CYCLES,
            completed: 0,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Set the level change per tick
    #[must_use]
    pub fn with_step(mut self, step: u8) -> Self {
        self.step = step.max(1);
        self
    }

    /// Set the number of dark events that complete the scene
    #[must_use]
    pub fn with_cycles(mut self, cycles: u8) -> Self {
        self.cycles = cycles;
        self
    }

    /// Override the initial state of both halves
    #[must_use]
    pub fn with_halves(mut self, first: FadeHalf, second: FadeHalf) -> Self {
        self.halves = [first, second];
        self.initial = self.halves;
        self
    }

    /// Set the output intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    pub const fn halves(&self) -> &[FadeHalf; 2] {
        &self.halves
    }

    pub const fn completed(&self) -> u8 {
        self.completed
    }
}

impl Scene for FaderScene {
    fn render<R: RngCore>(&mut self, ctx: &mut SceneContext<'_, R>, leds: &mut [Rgb]) -> bool {
        // A new run starts counting again; colors and levels carry over.
        if ctx.tick == 0 {
            self.completed = 0;
        }

        let center = center_of(leds);
        let (first, second) = leds.split_at_mut(center);
        self.halves[0].render(first);
        self.halves[1].render(second);

        if self.halves[0].step(self.step, self.palette, ctx.rng) {
            self.completed = self.completed.saturating_add(1);
        }
        self.halves[1].step(self.step, self.palette, ctx.rng);

        self.completed < self.cycles
    }

    fn intensity(&self) -> u8 {
        self.intensity
    }

    fn reset(&mut self) {
        self.halves = self.initial;
        self.completed = 0;
    }

    fn validate(&self, _led_count: usize) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette {
                scene: SceneId::Fader,
            });
        }
        Ok(())
    }
}
