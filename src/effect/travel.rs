//! Color traversal: the whole strip walks the palette over time.

use super::{EffectCtx, Outcome};
use crate::{
    color::{Rgb, blend_colors},
    step::{step_frac, step_index},
};

pub(crate) fn cycle_colors(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    #[allow(clippy::cast_possible_truncation)]
    let n = ctx.palette.color_count() as u32;
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, n);
    pixels.fill(ctx.palette.color(t as usize));
    Outcome::Running
}

/// Hard-edged palette bars sliding along the strip.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn moving_bars(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let len = pixels.len();
    let n = ctx.palette.color_count();
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, len as u32) as usize;
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = ctx.palette.color((t + x) * n / len);
    }
    Outcome::Running
}

/// Smooth palette gradient sliding along the strip.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn moving_gradient(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let n = ctx.palette.color_count() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, lenf);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = ctx.palette.sample((x as f32 + t) * n / lenf);
    }
    Outcome::Running
}

/// Two palette ramps moving against each other, mixed half and half.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn plasma(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let n = ctx.palette.color_count() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, lenf);
    for (x, led) in pixels.iter_mut().enumerate() {
        let x = x as f32;
        let c1 = ctx.palette.sample((x + t) * n / lenf);
        let c2 = ctx.palette.sample((2.0 * x - t + lenf) * n / lenf);
        *led = blend_colors(c1, c2, 128);
    }
    Outcome::Running
}
