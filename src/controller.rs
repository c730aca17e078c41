//! Main loop body
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use rand::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb, WHITE};
use crate::error::{ConfigError, ConfigResult};
use crate::output::{FULL_INTENSITY, OutputDriver};
use crate::scheduler::{Scheduler, TickOutcome};
use crate::trigger::{DEFAULT_DEBOUNCE_TICKS, Debouncer, PulseSource};

/// Default loop period
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(10);

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Fixed loop period
    pub frame_duration: Duration,
    /// Iterations to ignore the remote after a toggle
    pub debounce_ticks: u8,
    /// Color shown while the scenes are stopped
    pub idle_color: Rgb,
    /// Start cycling scenes right away instead of waiting for the remote
    pub start_running: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            debounce_ticks: DEFAULT_DEBOUNCE_TICKS,
            idle_color: WHITE,
            start_running: true,
        }
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the scheduler did this frame.
    pub outcome: TickOutcome,
    /// Whether the remote toggled the scenes this frame.
    pub toggled: bool,
}

/// Owns the frame buffer and everything that touches it
///
/// Each tick:
/// - Polls the remote once and toggles scenes on an accepted pulse
/// - Ticks the scheduler, which renders and flushes
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut controller = Controller::new(output, trigger, scheduler, &config, now)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = controller.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct Controller<O, T, R, const LEDS: usize, const MAX_SCENES: usize>
where
    O: OutputDriver,
    T: PulseSource,
    R: RngCore,
{
    output: O,
    trigger: T,
    scheduler: Scheduler<R, MAX_SCENES>,
    frame: [Rgb; LEDS],
    debouncer: Debouncer,
    idle_color: Rgb,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O, T, R, const LEDS: usize, const MAX_SCENES: usize> Controller<O, T, R, LEDS, MAX_SCENES>
where
    O: OutputDriver,
    T: PulseSource,
    R: RngCore,
{
    /// Blank the strip and either start the scenes or show the idle color
    pub fn new(
        output: O,
        trigger: T,
        scheduler: Scheduler<R, MAX_SCENES>,
        config: &ControllerConfig,
        now: Instant,
    ) -> ConfigResult<Self> {
        if LEDS == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if scheduler.led_count() != LEDS {
            return Err(ConfigError::LedCountMismatch {
                buffer: LEDS,
                expected: scheduler.led_count(),
            });
        }

        let mut controller = Self {
            output,
            trigger,
            scheduler,
            frame: [BLACK; LEDS],
            debouncer: Debouncer::new(config.debounce_ticks),
            idle_color: config.idle_color,
            next_frame: now,
            frame_duration: config.frame_duration,
        };
        controller.fill_and_flush(BLACK);
        if config.start_running {
            controller.scheduler.start();
        } else {
            controller.fill_and_flush(controller.idle_color);
        }
        Ok(controller)
    }

    /// Process one loop iteration and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let pulse = self.trigger.poll_pulse();
        let toggled = self.debouncer.filter(pulse);
        if toggled {
            self.toggle();
        }

        let outcome = self.scheduler.tick(&mut self.frame, now, &mut self.output);

        self.next_frame += self.frame_duration;
        let sleep_duration = if self.next_frame > now {
            self.next_frame.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            outcome,
            toggled,
        }
    }

    /// Switch between cycling scenes and the idle color
    fn toggle(&mut self) {
        if self.scheduler.is_running() {
            #[cfg(feature = "esp32-log")]
            println!("[Controller.toggle] remote pulse, scenes off");
            self.scheduler.stop();
            self.fill_and_flush(self.idle_color);
        } else {
            #[cfg(feature = "esp32-log")]
            println!("[Controller.toggle] remote pulse, scenes on");
            self.scheduler.start();
        }
    }

    fn fill_and_flush(&mut self, color: Rgb) {
        self.frame.fill(color);
        self.output.write(&self.frame, FULL_INTENSITY);
    }

    /// Current frame buffer contents
    pub fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame
    }

    /// Get a reference to the scheduler.
    pub fn scheduler(&self) -> &Scheduler<R, MAX_SCENES> {
        &self.scheduler
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the trigger.
    pub fn trigger_mut(&mut self) -> &mut T {
        &mut self.trigger
    }
}
