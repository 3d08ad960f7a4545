//! Flashers: whole-strip or per-pixel on/off keyed to the period.

use super::{EffectCtx, Outcome};
use crate::{
    color::{BLACK, Rgb, scale_color},
    rng::Rng,
    step::step_index,
};

/// Strobe duty: one lit step out of ten.
const STROBE_STEPS: u32 = 10;

/// Per-frame decay for `SparkleFade`, roughly x0.88.
const SPARKLE_DECAY: u8 = 224;

pub(crate) fn blink(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, 2);
    let c = if (t + 1) % 2 == 1 {
        ctx.palette.color(0)
    } else {
        BLACK
    };
    pixels.fill(c);
    Outcome::Running
}

/// Like blink, but alternate pixels carry opposite phase.
pub(crate) fn blink_alt(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, 2) as usize;
    let c = ctx.palette.color(0);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = if (t + x) % 2 == 1 { c } else { BLACK };
    }
    Outcome::Running
}

pub(crate) fn strobe(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, STROBE_STEPS);
    let c = if t == 0 { ctx.palette.color(0) } else { BLACK };
    pixels.fill(c);
    Outcome::Running
}

/// Random pixels light in random palette colors; the gate is speed/100, so
/// faster speeds sparkle denser.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn sparkle(ctx: &EffectCtx<'_>, rng: &mut Rng, pixels: &mut [Rgb]) -> Outcome {
    let gate = (ctx.speed_ms / 100) as u32;
    let colors = ctx.palette.color_count() as u32;
    for led in pixels.iter_mut() {
        let c = ctx.palette.color(rng.below(colors) as usize);
        *led = if rng.below(gate) == 0 { c } else { BLACK };
    }
    Outcome::Running
}

/// Sparse random relights over a decaying previous frame.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn sparkle_fade(ctx: &EffectCtx<'_>, rng: &mut Rng, pixels: &mut [Rgb]) -> Outcome {
    let gate = (ctx.speed_ms / 10) as u32;
    let colors = ctx.palette.color_count() as u32;
    for led in pixels.iter_mut() {
        if rng.below(gate) == 0 {
            *led = ctx.palette.color(rng.below(colors) as usize);
        } else {
            *led = scale_color(*led, SPARKLE_DECAY);
        }
    }
    Outcome::Running
}
