//! Ordered set of scenes the scheduler cycles through
//!
//! The rotation is assembled once at startup and handed to the
//! [`Scheduler`](crate::Scheduler), which then owns it. Scenes run in the
//! order they were added and wrap back to the first one after the last.

use heapless::Vec;

use crate::color::{BLUE, GREEN, PURPLE, RED};
use crate::error::{ConfigError, ConfigResult};
use crate::scene::{
    ConstantColorScene, DiscoScene, FaderScene, FlowScene, RainbowScene, SceneId, SceneSlot,
};

/// Scenes in the rotation built by [`standard_rotation`]
pub const STANDARD_ROTATION_LEN: usize = 8;

/// Disco segments in the standard rotation; divides every deployed strip length
pub const STANDARD_DISCO_SEGMENTS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct Rotation<const MAX_SCENES: usize> {
    scenes: Vec<SceneSlot, MAX_SCENES>,
}

impl<const MAX_SCENES: usize> Rotation<MAX_SCENES> {
    pub const fn new() -> Self {
        Self { scenes: Vec::new() }
    }

    /// Append a scene to the end of the rotation
    pub fn add(&mut self, scene: impl Into<SceneSlot>) -> ConfigResult<()> {
        self.scenes
            .push(scene.into())
            .map_err(|_| ConfigError::RotationFull {
                capacity: MAX_SCENES,
            })
    }

    /// Builder form of [`Rotation::add`]
    pub fn with(mut self, scene: impl Into<SceneSlot>) -> ConfigResult<Self> {
        self.add(scene)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene ids in rotation order
    pub fn ids(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.scenes.iter().map(SceneSlot::id)
    }

    /// Index of the scene following `index`, wrapping to the head
    pub(crate) fn next_index(&self, index: usize) -> usize {
        let next = index + 1;
        if next >= self.scenes.len() { 0 } else { next }
    }

    /// Scene at `index`; the scheduler only holds indices below `len`
    pub(crate) fn slot(&self, index: usize) -> &SceneSlot {
        &self.scenes[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut SceneSlot {
        &mut self.scenes[index]
    }

    pub(crate) fn validate(&self, led_count: usize) -> ConfigResult<()> {
        if self.scenes.is_empty() {
            return Err(ConfigError::EmptyRotation);
        }
        self.scenes
            .iter()
            .try_for_each(|scene| scene.validate(led_count))
    }
}

/// The deployment rotation: four solid colors, rainbow, disco, fader and flow
pub fn standard_rotation() -> ConfigResult<Rotation<STANDARD_ROTATION_LEN>> {
    Rotation::new()
        .with(ConstantColorScene::new(BLUE))?
        .with(ConstantColorScene::new(GREEN))?
        .with(ConstantColorScene::new(RED))?
        .with(ConstantColorScene::new(PURPLE))?
        .with(RainbowScene::default())?
        .with(DiscoScene::default().with_segments(STANDARD_DISCO_SEGMENTS))?
        .with(FaderScene::default())?
        .with(FlowScene::default())
}
