//! Logical strip: one animated virtual pixel run.
//!
//! A logical strip owns its pixel buffer and animation state and knows which
//! physical segments it is composed of. It renders at most one frame per
//! refresh interval; strips gate independently, so a short accent strip can
//! run at a different cadence than the long perimeter behind it.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::{
    color::{BLACK, Palette, PaletteId, Rgb},
    effect::{EffectCtx, EffectId, Outcome, Scratch},
    rng::Rng,
    segment::{MAX_SEGMENTS, Segment, total_len},
};

/// Default per-strip refresh gate, 50 frames per second.
pub(crate) const DEFAULT_REFRESH: Duration = Duration::from_millis(1000 / 50);

/// One animation request as applied to a strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Animation {
    pub effect: EffectId,
    /// Period of one cycle in milliseconds.
    pub speed: u16,
    /// Compose the rendered buffer back to front.
    pub direction: bool,
    pub option: u16,
    pub palette: Palette,
}

impl Animation {
    /// The dim white shown whenever nothing else is playing.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            effect: EffectId::IdleWhite,
            speed: 1000,
            direction: false,
            option: 0,
            palette: Palette::Preset(PaletteId::Rgb),
        }
    }
}

/// A virtual pixel run composed of physical segments, animating one effect.
#[derive(Debug, Clone)]
pub struct LogicalStrip<const PX: usize> {
    segments: Vec<Segment, MAX_SEGMENTS>,
    pixels: Vec<Rgb, PX>,
    effect: EffectId,
    speed: u16,
    option: u16,
    direction: bool,
    palette: Palette,
    started: Instant,
    frames: u32,
    refresh_interval: Duration,
    last_refresh: Instant,
    refresh_rate: u32,
    scratch: Scratch<PX>,
}

impl<const PX: usize> LogicalStrip<PX> {
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            pixels: Vec::new(),
            effect: EffectId::Stopped,
            speed: 1000,
            option: 0,
            direction: false,
            palette: Palette::Preset(PaletteId::Rgb),
            started: Instant::from_millis(0),
            frames: 0,
            refresh_interval: DEFAULT_REFRESH,
            last_refresh: Instant::from_millis(0),
            refresh_rate: 0,
            scratch: Scratch::None,
        }
    }

    /// Install a segment list and size the pixel buffer to its total length,
    /// cleared to black. The previous animation does not carry over.
    pub fn rebuild(&mut self, segments: &[Segment]) {
        self.segments.clear();
        let _ = self.segments.extend_from_slice(segments);
        self.pixels.clear();
        let _ = self.pixels.resize(total_len(segments).min(PX), BLACK);
        self.effect = EffectId::Stopped;
        self.scratch = Scratch::None;
        self.refresh_rate = 0;
    }

    /// Switch the active animation.
    ///
    /// Resets the animation clock, frame counter and scratch state. The
    /// refresh gate is left alone, so reconfiguring rapidly cannot push a
    /// strip past its frame rate.
    pub fn configure(&mut self, animation: Animation, now: Instant) {
        self.effect = animation.effect;
        self.speed = animation.speed;
        self.option = animation.option;
        self.direction = animation.direction;
        self.palette = animation.palette;
        self.started = now;
        self.frames = 0;
        self.scratch = Scratch::None;
    }

    /// Advance the animation by at most one frame.
    ///
    /// Returns true when a new frame was rendered into the buffer.
    pub fn tick(&mut self, now: Instant, rng: &mut Rng) -> bool {
        if self.effect == EffectId::Stopped || self.pixels.is_empty() {
            return false;
        }
        if now < self.last_refresh + self.refresh_interval {
            return false;
        }
        let frame_ms = now.duration_since(self.last_refresh).as_millis().max(1);
        #[allow(clippy::cast_possible_truncation)]
        {
            self.refresh_rate = (1000 / frame_ms) as u32;
        }
        self.last_refresh = now;

        let ctx = EffectCtx {
            now,
            elapsed_ms: now.duration_since(self.started).as_millis(),
            speed_ms: u64::from(self.speed),
            option: self.option,
            palette: &self.palette,
        };
        let outcome = self
            .effect
            .evaluate(&ctx, rng, &mut self.scratch, &mut self.pixels);
        self.frames = self.frames.wrapping_add(1);
        if outcome == Outcome::Finished {
            self.effect = EffectId::Stopped;
        }
        true
    }

    pub(crate) fn set_refresh_interval(&mut self, interval: Duration) {
        self.refresh_interval = interval;
    }

    pub const fn effect(&self) -> EffectId {
        self.effect
    }

    /// Composed output runs back to front.
    pub const fn direction(&self) -> bool {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Frames rendered since the last `configure`.
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Measured frame rate in Hz, valid after the second frame.
    pub const fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }
}

impl<const PX: usize> Default for LogicalStrip<PX> {
    fn default() -> Self {
        Self::new()
    }
}
