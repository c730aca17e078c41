//! Scene scheduler
//!
//! Drives the active scene of a [`Rotation`] once per tick, flushes the frame
//! and moves on to the next scene when the active one reports completion.

use embassy_time::Instant;
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::error::{ConfigError, ConfigResult};
use crate::rotation::Rotation;
use crate::scene::{SceneContext, SceneId};

/// What [`Scheduler::start`] does with the current position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartMode {
    /// Begin again at the first scene with tick 0
    #[default]
    Restart,
    /// Continue with the scene and tick that were active when stopped
    Resume,
}

/// Configuration for the scheduler
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Number of LEDs every frame buffer must have
    pub led_count: usize,
    pub start_mode: StartMode,
    /// Reset scene state whenever a scene becomes active
    pub reset_on_activate: bool,
}

impl SchedulerConfig {
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            start_mode: StartMode::Restart,
            reset_on_activate: false,
        }
    }
}

/// Longest strip a scene run can cover; the tick counter saturates beyond it
#[allow(clippy::cast_lossless)]
pub const MAX_LED_COUNT: usize = u16::MAX as usize;

/// Result of a single [`Scheduler::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The scheduler is stopped; nothing was rendered
    Paused,
    /// The active scene rendered and keeps running
    Continued(SceneId),
    /// The active scene rendered its last frame and the next one took over
    Advanced { from: SceneId, to: SceneId },
    /// The frame does not hold the configured number of LEDs; nothing was
    /// rendered or flushed
    FrameMismatch { len: usize, expected: usize },
}

/// Scheduler - cycles through the rotation one tick at a time
pub struct Scheduler<R: RngCore, const MAX_SCENES: usize> {
    rotation: Rotation<MAX_SCENES>,
    config: SchedulerConfig,
    rng: R,

    active: usize,
    /// Ticks since the active scene became active
    tick: u16,
    running: bool,
}

impl<R: RngCore, const MAX_SCENES: usize> Scheduler<R, MAX_SCENES> {
    /// Create a stopped scheduler
    ///
    /// Fails if the rotation is empty, the strip is empty or longer than
    /// [`MAX_LED_COUNT`], or a scene does not fit the strip.
    pub fn new(
        rotation: Rotation<MAX_SCENES>,
        config: SchedulerConfig,
        rng: R,
    ) -> ConfigResult<Self> {
        if config.led_count == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if config.led_count > MAX_LED_COUNT {
            return Err(ConfigError::StripTooLong {
                led_count: config.led_count,
                max: MAX_LED_COUNT,
            });
        }
        rotation.validate(config.led_count)?;

        Ok(Self {
            rotation,
            config,
            rng,
            active: 0,
            tick: 0,
            running: false,
        })
    }

    /// Render the active scene into `frame` and flush it
    ///
    /// Does nothing while stopped, or when `frame` is not `led_count` long.
    pub fn tick<O: OutputDriver>(
        &mut self,
        frame: &mut [Rgb],
        now: Instant,
        output: &mut O,
    ) -> TickOutcome {
        if !self.running {
            return TickOutcome::Paused;
        }
        if frame.len() != self.config.led_count {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Scheduler.tick] frame of {} LEDs, expected {}",
                frame.len(),
                self.config.led_count
            );
            return TickOutcome::FrameMismatch {
                len: frame.len(),
                expected: self.config.led_count,
            };
        }

        let scene = self.rotation.slot_mut(self.active);
        let mut ctx = SceneContext {
            tick: self.tick,
            now,
            rng: &mut self.rng,
        };
        let keep_running = scene.render(&mut ctx, frame);
        output.write(frame, scene.intensity());

        let current = scene.id();
        if keep_running {
            self.tick = self.tick.saturating_add(1);
            return TickOutcome::Continued(current);
        }

        self.activate(self.rotation.next_index(self.active));
        let next = self.active_scene();
        #[cfg(feature = "esp32-log")]
        println!(
            "[Scheduler.tick] {} done, switching to {} (#{})",
            current.as_str(),
            next.as_str(),
            self.active
        );
        TickOutcome::Advanced {
            from: current,
            to: next,
        }
    }

    /// Resume ticking
    ///
    /// With [`StartMode::Restart`] the rotation begins again at its head.
    pub fn start(&mut self) {
        if self.config.start_mode == StartMode::Restart {
            self.activate(0);
        }
        self.running = true;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Scheduler.start] running {} at tick {}",
            self.active_scene().as_str(),
            self.tick
        );
    }

    /// Pause ticking; the display keeps its last frame
    pub fn stop(&mut self) {
        self.running = false;
        #[cfg(feature = "esp32-log")]
        println!("[Scheduler.stop] paused at tick {}", self.tick);
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks since the active scene became active
    pub const fn elapsed(&self) -> u16 {
        self.tick
    }

    /// Position of the active scene in the rotation
    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_scene(&self) -> SceneId {
        self.rotation.slot(self.active).id()
    }

    pub const fn led_count(&self) -> usize {
        self.config.led_count
    }

    pub const fn rotation(&self) -> &Rotation<MAX_SCENES> {
        &self.rotation
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        self.tick = 0;
        if self.config.reset_on_activate {
            self.rotation.slot_mut(index).reset();
        }
    }
}
