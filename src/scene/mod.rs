//! Scene system with compile-time known scene variants
//!
//! All scenes are stored in an enum to avoid heap allocations.
//! Each scene implements the `Scene` trait.

mod constant_color;
mod disco;
mod fader;
mod flow;
mod rainbow;

use embassy_time::Instant;
use rand::RngCore;

pub use constant_color::ConstantColorScene;
pub use disco::DiscoScene;
pub use fader::{FadeDirection, FadeHalf, FaderScene};
pub use flow::FlowScene;
pub use rainbow::RainbowScene;

use crate::{color::Rgb, error::ConfigError};

/// Output intensity used by scenes unless configured otherwise
pub const DEFAULT_INTENSITY: u8 = 40;

/// Frames a timed scene renders before handing off
pub const DEFAULT_DURATION: u16 = 400;

const SCENE_NAME_CONSTANT_COLOR: &str = "constant_color";
const SCENE_NAME_RAINBOW: &str = "rainbow";
const SCENE_NAME_DISCO: &str = "disco";
const SCENE_NAME_FADER: &str = "fader";
const SCENE_NAME_FLOW: &str = "flow";

const SCENE_ID_CONSTANT_COLOR: u8 = 0;
const SCENE_ID_RAINBOW: u8 = 1;
const SCENE_ID_DISCO: u8 = 2;
const SCENE_ID_FADER: u8 = 3;
const SCENE_ID_FLOW: u8 = 4;

/// Per-call inputs handed to a scene
pub struct SceneContext<'a, R: RngCore> {
    /// Ticks since this scene became active (0 on activation)
    pub tick: u16,
    /// Wall-clock time of this frame
    pub now: Instant,
    /// Randomness source for palette picks
    pub rng: &'a mut R,
}

pub trait Scene {
    /// Render a single frame
    ///
    /// Returns `true` to keep running, `false` once the scene is done and the
    /// scheduler should move on.
    fn render<R: RngCore>(&mut self, ctx: &mut SceneContext<'_, R>, leds: &mut [Rgb]) -> bool;

    /// Intensity the frame should be flushed with
    fn intensity(&self) -> u8 {
        DEFAULT_INTENSITY
    }

    /// Reset scene state
    fn reset(&mut self) {}

    /// Check that the scene can run on a strip of `led_count` LEDs
    fn validate(&self, _led_count: usize) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Scene slot - enum containing all possible scenes
#[derive(Debug, Clone)]
pub enum SceneSlot {
    /// Solid single color
    ConstantColor(ConstantColorScene),
    /// Wall-clock driven hue sweep
    Rainbow(RainbowScene),
    /// Randomly colored equal segments
    Disco(DiscoScene),
    /// Two halves breathing independently
    Fader(FaderScene),
    /// Traveling comet with a fading tail
    Flow(FlowScene),
}

/// Known scene ids for logging and external observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SceneId {
    ConstantColor = SCENE_ID_CONSTANT_COLOR,
    Rainbow = SCENE_ID_RAINBOW,
    Disco = SCENE_ID_DISCO,
    Fader = SCENE_ID_FADER,
    Flow = SCENE_ID_FLOW,
}

impl SceneId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            SCENE_ID_CONSTANT_COLOR => Self::ConstantColor,
            SCENE_ID_RAINBOW => Self::Rainbow,
            SCENE_ID_DISCO => Self::Disco,
            SCENE_ID_FADER => Self::Fader,
            SCENE_ID_FLOW => Self::Flow,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConstantColor => SCENE_NAME_CONSTANT_COLOR,
            Self::Rainbow => SCENE_NAME_RAINBOW,
            Self::Disco => SCENE_NAME_DISCO,
            Self::Fader => SCENE_NAME_FADER,
            Self::Flow => SCENE_NAME_FLOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            SCENE_NAME_CONSTANT_COLOR => Some(Self::ConstantColor),
            SCENE_NAME_RAINBOW => Some(Self::Rainbow),
            SCENE_NAME_DISCO => Some(Self::Disco),
            SCENE_NAME_FADER => Some(Self::Fader),
            SCENE_NAME_FLOW => Some(Self::Flow),
            _ => None,
        }
    }
}

impl SceneSlot {
    /// Render the current scene
    pub fn render<R: RngCore>(
        &mut self,
        ctx: &mut SceneContext<'_, R>,
        leds: &mut [Rgb],
    ) -> bool {
        match self {
            Self::ConstantColor(scene) => scene.render(ctx, leds),
            Self::Rainbow(scene) => scene.render(ctx, leds),
            Self::Disco(scene) => scene.render(ctx, leds),
            Self::Fader(scene) => scene.render(ctx, leds),
            Self::Flow(scene) => scene.render(ctx, leds),
        }
    }

    /// Intensity the scene flushes with
    pub fn intensity(&self) -> u8 {
        match self {
            Self::ConstantColor(scene) => scene.intensity(),
            Self::Rainbow(scene) => scene.intensity(),
            Self::Disco(scene) => scene.intensity(),
            Self::Fader(scene) => scene.intensity(),
            Self::Flow(scene) => scene.intensity(),
        }
    }

    /// Reset the scene state
    pub fn reset(&mut self) {
        match self {
            Self::ConstantColor(scene) => Scene::reset(scene),
            Self::Rainbow(scene) => Scene::reset(scene),
            Self::Disco(scene) => Scene::reset(scene),
            Self::Fader(scene) => Scene::reset(scene),
            Self::Flow(scene) => Scene::reset(scene),
        }
    }

    /// Check the scene parameters against the strip length
    pub fn validate(&self, led_count: usize) -> Result<(), ConfigError> {
        match self {
            Self::ConstantColor(scene) => scene.validate(led_count),
            Self::Rainbow(scene) => scene.validate(led_count),
            Self::Disco(scene) => scene.validate(led_count),
            Self::Fader(scene) => scene.validate(led_count),
            Self::Flow(scene) => scene.validate(led_count),
        }
    }

    /// Get the scene ID for external observation
    pub fn id(&self) -> SceneId {
        match self {
            Self::ConstantColor(_) => SceneId::ConstantColor,
            Self::Rainbow(_) => SceneId::Rainbow,
            Self::Disco(_) => SceneId::Disco,
            Self::Fader(_) => SceneId::Fader,
            Self::Flow(_) => SceneId::Flow,
        }
    }
}

impl From<ConstantColorScene> for SceneSlot {
    fn from(scene: ConstantColorScene) -> Self {
        Self::ConstantColor(scene)
    }
}

impl From<RainbowScene> for SceneSlot {
    fn from(scene: RainbowScene) -> Self {
        Self::Rainbow(scene)
    }
}

impl From<DiscoScene> for SceneSlot {
    fn from(scene: DiscoScene) -> Self {
        Self::Disco(scene)
    }
}

impl From<FaderScene> for SceneSlot {
    fn from(scene: FaderScene) -> Self {
        Self::Fader(scene)
    }
}

impl From<FlowScene> for SceneSlot {
    fn from(scene: FlowScene) -> Self {
        Self::Flow(scene)
    }
}
