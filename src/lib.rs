#![no_std]

pub mod bounds;
pub mod color;
pub mod controller;
pub mod error;
pub mod filter;
pub mod math8;
pub mod output;
pub mod rotation;
pub mod scene;
pub mod scheduler;
pub mod trigger;

pub use controller::{Controller, ControllerConfig, FrameResult};
pub use error::{ConfigError, ConfigResult};
pub use output::{
    Chipset, ColorOrder, FULL_INTENSITY, OutputConfig, OutputDriver, SmartLedsOutput,
};
pub use rotation::{Rotation, standard_rotation};
pub use scene::{
    ConstantColorScene, DiscoScene, FaderScene, FlowScene, RainbowScene, Scene, SceneContext,
    SceneId, SceneSlot,
};
pub use scheduler::{MAX_LED_COUNT, Scheduler, SchedulerConfig, StartMode, TickOutcome};
pub use trigger::{CodeSource, Debouncer, PulseSource, RemoteTrigger, TriggerCode};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
