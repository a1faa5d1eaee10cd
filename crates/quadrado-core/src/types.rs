//! Fundamental value types: colors, actor identity, and simulation time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
///
/// All arithmetic is channel-wise and saturates at `0..=255`, so call sites
/// never clamp by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    /// Add the same signed delta to every channel.
    pub fn offset(self, delta: i16) -> Self {
        self.offset_each([delta; 3])
    }

    /// Add an independent signed delta to each channel.
    pub fn offset_each(self, deltas: [i16; 3]) -> Self {
        let [r, g, b] = self.channels();
        Self {
            r: clamp_channel(r as i32 + deltas[0] as i32),
            g: clamp_channel(g as i32 + deltas[1] as i32),
            b: clamp_channel(b as i32 + deltas[2] as i32),
        }
    }

    /// Multiply every channel by `factor`, rounding to the nearest integer.
    pub fn scale(self, factor: f32) -> Self {
        let ch = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }

    /// Red channel as a fraction in `0.0..=1.0`.
    pub fn redness(&self) -> f32 {
        self.r as f32 / 255.0
    }
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Stable identity for an actor, issued once at construction.
///
/// Ids are handed out by [`ActorIdAllocator`] and never reused, so a wave
/// manager can keep referring to an actor after others have been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Monotonic source of [`ActorId`]s.
#[derive(Debug, Clone, Default)]
pub struct ActorIdAllocator {
    next: u32,
}

impl ActorIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ActorId {
        let id = ActorId(self.next);
        self.next += 1;
        id
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// Simulation time tracking.
///
/// Gameplay timers (cooldowns, invulnerability) compare against
/// `elapsed_ms`, which is derived from the tick counter so the clock is
/// monotonic and reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one tick at the given tick rate (Hz).
    pub fn advance(&mut self, tick_rate: u32) {
        self.tick += 1;
        self.elapsed_ms = self.tick * 1000 / tick_rate.max(1) as u64;
    }

    pub fn now_ms(&self) -> u64 {
        self.elapsed_ms
    }
}
