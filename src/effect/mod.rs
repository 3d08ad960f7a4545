//! Animation catalog with compile-time known variants
//!
//! Every animation the wire can request is one `EffectId` variant, evaluated
//! through a single dispatch point. Effects are plain functions of elapsed
//! time, period, option word and palette; the few that carry state between
//! frames (fire, particles) keep it in an explicit `Scratch` slot owned by
//! the strip, so switching animations never leaks stale state.

mod basic;
mod fade;
mod fire;
mod flash;
mod growth;
mod particles;
mod sweep;
mod travel;

use embassy_time::Instant;
use heapless::Vec;

use crate::{
    color::{BLACK, MAX_PALETTE, Palette, Rgb},
    rng::Rng,
};

/// Animation identifiers as requested over the wire.
///
/// The raw value is the low 15 bits of the animate word. `Stopped` is the
/// terminal marker: a stopped strip keeps its last frame and is skipped by
/// the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum EffectId {
    Stopped = 0,
    // one-shot fills
    On = 1,
    Off = 2,
    IdleWhite = 3,
    OnePixel = 4,
    PixelLine = 5,
    // flashers
    Blink = 6,
    BlinkAlt = 7,
    Strobe = 8,
    Sparkle = 9,
    SparkleFade = 10,
    // color traversal
    CycleColors = 11,
    MovingBars = 12,
    MovingGradient = 13,
    Plasma = 14,
    // sweeps
    ShiftRight = 15,
    ShiftLeft = 16,
    Bounce = 17,
    SmoothShiftRight = 18,
    SmoothShiftLeft = 19,
    SmoothBounce = 20,
    Comet = 21,
    CometTrail = 22,
    Scanner = 23,
    ScannerWide = 24,
    // fades
    FadeIn = 25,
    FadeOut = 26,
    FadeInOut = 27,
    Glow = 28,
    FadeColors = 29,
    FadeColorsLoop = 30,
    PixelsFadeColors = 31,
    SoundPulse = 32,
    // growth
    Grow = 33,
    Shrink = 34,
    March = 35,
    // simulations
    Fire = 36,
    BouncingBalls = 37,
    Bubbles = 38,
}

impl EffectId {
    const ALL: [Self; 39] = [
        Self::Stopped,
        Self::On,
        Self::Off,
        Self::IdleWhite,
        Self::OnePixel,
        Self::PixelLine,
        Self::Blink,
        Self::BlinkAlt,
        Self::Strobe,
        Self::Sparkle,
        Self::SparkleFade,
        Self::CycleColors,
        Self::MovingBars,
        Self::MovingGradient,
        Self::Plasma,
        Self::ShiftRight,
        Self::ShiftLeft,
        Self::Bounce,
        Self::SmoothShiftRight,
        Self::SmoothShiftLeft,
        Self::SmoothBounce,
        Self::Comet,
        Self::CometTrail,
        Self::Scanner,
        Self::ScannerWide,
        Self::FadeIn,
        Self::FadeOut,
        Self::FadeInOut,
        Self::Glow,
        Self::FadeColors,
        Self::FadeColorsLoop,
        Self::PixelsFadeColors,
        Self::SoundPulse,
        Self::Grow,
        Self::Shrink,
        Self::March,
        Self::Fire,
        Self::BouncingBalls,
        Self::Bubbles,
    ];

    /// Decode a wire animation id.
    pub fn from_raw(value: u16) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::On => "on",
            Self::Off => "off",
            Self::IdleWhite => "idle_white",
            Self::OnePixel => "one_pixel",
            Self::PixelLine => "pixel_line",
            Self::Blink => "blink",
            Self::BlinkAlt => "blink_alt",
            Self::Strobe => "strobe",
            Self::Sparkle => "sparkle",
            Self::SparkleFade => "sparkle_fade",
            Self::CycleColors => "cycle_colors",
            Self::MovingBars => "moving_bars",
            Self::MovingGradient => "moving_gradient",
            Self::Plasma => "plasma",
            Self::ShiftRight => "shift_right",
            Self::ShiftLeft => "shift_left",
            Self::Bounce => "bounce",
            Self::SmoothShiftRight => "smooth_shift_right",
            Self::SmoothShiftLeft => "smooth_shift_left",
            Self::SmoothBounce => "smooth_bounce",
            Self::Comet => "comet",
            Self::CometTrail => "comet_trail",
            Self::Scanner => "scanner",
            Self::ScannerWide => "scanner_wide",
            Self::FadeIn => "fade_in",
            Self::FadeOut => "fade_out",
            Self::FadeInOut => "fade_in_out",
            Self::Glow => "glow",
            Self::FadeColors => "fade_colors",
            Self::FadeColorsLoop => "fade_colors_loop",
            Self::PixelsFadeColors => "pixels_fade_colors",
            Self::SoundPulse => "sound_pulse",
            Self::Grow => "grow",
            Self::Shrink => "shrink",
            Self::March => "march",
            Self::Fire => "fire",
            Self::BouncingBalls => "bouncing_balls",
            Self::Bubbles => "bubbles",
        }
    }

    /// Render one frame of this animation into `pixels`.
    pub(crate) fn evaluate<const PX: usize>(
        self,
        ctx: &EffectCtx<'_>,
        rng: &mut Rng,
        scratch: &mut Scratch<PX>,
        pixels: &mut [Rgb],
    ) -> Outcome {
        match self {
            Self::Stopped => Outcome::Finished,
            Self::On => basic::fill(ctx.palette.color(0), pixels),
            Self::Off => basic::fill(BLACK, pixels),
            Self::IdleWhite => basic::fill(basic::IDLE_WHITE, pixels),
            Self::OnePixel => basic::one_pixel(ctx, pixels),
            Self::PixelLine => basic::pixel_line(ctx, pixels),
            Self::Blink => flash::blink(ctx, pixels),
            Self::BlinkAlt => flash::blink_alt(ctx, pixels),
            Self::Strobe => flash::strobe(ctx, pixels),
            Self::Sparkle => flash::sparkle(ctx, rng, pixels),
            Self::SparkleFade => flash::sparkle_fade(ctx, rng, pixels),
            Self::CycleColors => travel::cycle_colors(ctx, pixels),
            Self::MovingBars => travel::moving_bars(ctx, pixels),
            Self::MovingGradient => travel::moving_gradient(ctx, pixels),
            Self::Plasma => travel::plasma(ctx, pixels),
            Self::ShiftRight => sweep::shift_right(ctx, pixels),
            Self::ShiftLeft => sweep::shift_left(ctx, pixels),
            Self::Bounce => sweep::bounce(ctx, pixels),
            Self::SmoothShiftRight => sweep::smooth_shift_right(ctx, pixels),
            Self::SmoothShiftLeft => sweep::smooth_shift_left(ctx, pixels),
            Self::SmoothBounce => sweep::smooth_bounce(ctx, pixels),
            Self::Comet => sweep::comet(ctx, pixels),
            Self::CometTrail => sweep::comet_trail(ctx, pixels),
            Self::Scanner => sweep::scanner(ctx, pixels),
            Self::ScannerWide => sweep::scanner_wide(ctx, pixels),
            Self::FadeIn => fade::fade_in(ctx, pixels),
            Self::FadeOut => fade::fade_out(ctx, pixels),
            Self::FadeInOut => fade::fade_in_out(ctx, pixels),
            Self::Glow => fade::glow(ctx, pixels),
            Self::FadeColors => fade::fade_colors(ctx, pixels),
            Self::FadeColorsLoop => fade::fade_colors_loop(ctx, pixels),
            Self::PixelsFadeColors => fade::pixels_fade_colors(ctx, pixels),
            Self::SoundPulse => fade::sound_pulse(ctx, pixels),
            Self::Grow => growth::grow(ctx, pixels),
            Self::Shrink => growth::shrink(ctx, pixels),
            Self::March => growth::march(ctx, pixels),
            Self::Fire => fire::fire(ctx, rng, scratch, pixels),
            Self::BouncingBalls => particles::bouncing_balls(ctx, rng, scratch, pixels),
            Self::Bubbles => particles::bubbles(ctx, rng, scratch, pixels),
        }
    }
}

/// Inputs every effect evaluation sees.
pub(crate) struct EffectCtx<'a> {
    pub now: Instant,
    /// Milliseconds since the animation was configured.
    pub elapsed_ms: u64,
    /// Period of one full cycle, from the wire speed word.
    pub speed_ms: u64,
    pub option: u16,
    pub palette: &'a Palette,
}

/// What an evaluation did with the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Running,
    /// A one-shot ran its course; the strip transitions to `Stopped`.
    Finished,
}

/// Effect-private state that survives between frames.
///
/// Reconfiguring a strip resets this to `None`; the next evaluation that
/// needs it rebuilds it at the right size.
#[derive(Debug, Clone)]
pub(crate) enum Scratch<const PX: usize> {
    None,
    /// Heat cells for the fire simulation, one per pixel.
    Heat(Vec<u8, PX>),
    /// One particle per palette color.
    Particles(ParticleSet),
}

#[derive(Debug, Clone)]
pub(crate) struct ParticleSet {
    pos: Vec<f32, MAX_PALETTE>,
    vel: Vec<f32, MAX_PALETTE>,
    last_step: Instant,
}

impl ParticleSet {
    fn new(now: Instant) -> Self {
        Self {
            pos: Vec::new(),
            vel: Vec::new(),
            last_step: now,
        }
    }

    /// Milliseconds since the previous step, advancing the bookkeeping.
    #[allow(clippy::cast_precision_loss)]
    fn step_millis(&mut self, now: Instant) -> f32 {
        let dt = now.duration_since(self.last_step);
        self.last_step = now;
        dt.as_millis() as f32
    }
}
