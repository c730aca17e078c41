//! Shared test doubles for the integration tests

#![allow(dead_code)] // Each test file uses a different subset

use std::collections::VecDeque;

use myrtio_light_scenes::{CodeSource, OutputDriver, PulseSource, Rgb};
use rand::{SeedableRng, rngs::SmallRng};

/// Seeded randomness so palette picks are reproducible
pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5EED)
}

/// One flushed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flush {
    pub colors: Vec<Rgb>,
    pub intensity: u8,
}

impl Flush {
    /// Whether every LED has `color`
    pub fn is_solid(&self, color: Rgb) -> bool {
        self.colors.iter().all(|c| *c == color)
    }
}

/// Output that records every flush
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub flushes: Vec<Flush>,
}

impl RecordingOutput {
    pub fn last(&self) -> Option<&Flush> {
        self.flushes.last()
    }
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb], intensity: u8) {
        self.flushes.push(Flush {
            colors: colors.to_vec(),
            intensity,
        });
    }
}

/// Pulse source replaying a fixed script, then reporting nothing
#[derive(Debug, Default)]
pub struct ScriptedPulses {
    pub script: VecDeque<bool>,
    pub polls: usize,
}

impl ScriptedPulses {
    pub fn new(script: &[bool]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            polls: 0,
        }
    }
}

impl PulseSource for ScriptedPulses {
    fn poll_pulse(&mut self) -> bool {
        self.polls += 1;
        self.script.pop_front().unwrap_or(false)
    }
}

/// Code source replaying a fixed script of decoded codes
#[derive(Debug, Default)]
pub struct ScriptedCodes {
    pub script: VecDeque<Option<u32>>,
}

impl ScriptedCodes {
    pub fn new(script: &[Option<u32>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
        }
    }
}

impl CodeSource for ScriptedCodes {
    fn poll_code(&mut self) -> Option<u32> {
        self.script.pop_front().flatten()
    }
}
