use thiserror::Error;

use crate::scene::SceneId;

/// Configuration problems detected while assembling the rotation
///
/// Only construction paths return these. Once a scheduler is built every
/// per-tick operation is total.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("strip must have at least one LED")]
    EmptyStrip,
    #[error("strip of {led_count} LEDs exceeds the {max} LEDs a scene run can count")]
    StripTooLong { led_count: usize, max: usize },
    #[error("rotation must contain at least one scene")]
    EmptyRotation,
    #[error("rotation is full ({capacity} scenes)")]
    RotationFull { capacity: usize },
    #[error("{scene:?} scene has an empty palette")]
    EmptyPalette { scene: SceneId },
    #[error("{segments} disco segments do not evenly divide {led_count} LEDs")]
    UnevenSegments { segments: usize, led_count: usize },
    #[error("frame buffer holds {buffer} LEDs but the scheduler expects {expected}")]
    LedCountMismatch { buffer: usize, expected: usize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
