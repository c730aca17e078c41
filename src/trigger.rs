//! Remote trigger input
//!
//! The radio receiver is polled once per loop iteration and never blocks.
//! [`RemoteTrigger`] turns decoded codes into pulses and [`Debouncer`]
//! swallows the burst of repeats that follows a button press.

/// Source of debounced-or-not "button pressed" pulses
pub trait PulseSource {
    /// Non-blocking poll; `true` if a pulse was detected since the last call
    fn poll_pulse(&mut self) -> bool;
}

/// Source of raw decoded remote codes
pub trait CodeSource {
    /// Non-blocking poll for the next decoded code
    fn poll_code(&mut self) -> Option<u32>;
}

/// Code the remote must send, and how many times in a row, to count as a pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerCode {
    pub address: u32,
    pub repeat: u8,
}

/// The deployed remote button
pub const DEFAULT_TRIGGER_CODE: TriggerCode = TriggerCode {
    address: 0x0089_9381,
    repeat: 3,
};

/// Empty polls tolerated between two codes of the same press
pub const DEFAULT_MAX_GAP: u8 = 10;

/// Loop iterations ignored after an accepted pulse
pub const DEFAULT_DEBOUNCE_TICKS: u8 = 5;

/// Matches decoded codes against a [`TriggerCode`]
///
/// Foreign codes are treated as radio noise and restart the match. So does
/// a run of more than `max_gap` empty polls: codes from separate presses
/// never add up to one pulse.
#[derive(Debug, Clone)]
pub struct RemoteTrigger<S: CodeSource> {
    source: S,
    code: TriggerCode,
    /// Matching codes seen in a row
    matched: u8,
    max_gap: u8,
    /// Empty polls since the last matching code
    quiet: u8,
}

impl<S: CodeSource> RemoteTrigger<S> {
    pub const fn new(source: S, code: TriggerCode) -> Self {
        Self {
            source,
            code,
            matched: 0,
            max_gap: DEFAULT_MAX_GAP,
            quiet: 0,
        }
    }

    /// Set how many empty polls may separate codes of one press
    #[must_use]
    pub const fn with_max_gap(mut self, max_gap: u8) -> Self {
        self.max_gap = max_gap;
        self
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: CodeSource> PulseSource for RemoteTrigger<S> {
    fn poll_pulse(&mut self) -> bool {
        let Some(code) = self.source.poll_code() else {
            if self.matched > 0 {
                self.quiet = self.quiet.saturating_add(1);
                if self.quiet > self.max_gap {
                    self.matched = 0;
                }
            }
            return false;
        };
        self.quiet = 0;
        if code != self.code.address {
            self.matched = 0;
            return false;
        }

        self.matched = self.matched.saturating_add(1);
        if self.matched < self.code.repeat.max(1) {
            return false;
        }
        self.matched = 0;
        true
    }
}

/// Suppresses pulses for a fixed number of iterations after an accepted one
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window: u8,
    /// Iterations left in the current suppression window
    remaining: u8,
}

impl Debouncer {
    pub const fn new(window: u8) -> Self {
        Self {
            window,
            remaining: 0,
        }
    }

    /// Feed one polled pulse; returns whether it is accepted
    ///
    /// Call exactly once per loop iteration.
    pub fn filter(&mut self, pulse: bool) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            return false;
        }
        if pulse {
            self.remaining = self.window;
        }
        pulse
    }

    pub const fn is_suppressing(&self) -> bool {
        self.remaining > 0
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_TICKS)
    }
}
