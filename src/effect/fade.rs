//! Whole-strip fades: brightness ramps on the first palette color, or a
//! slow walk through the palette itself.

use core::f32::consts::TAU;

use libm::{cosf, fabsf};

use super::{EffectCtx, Outcome};
use crate::{
    color::{Rgb, scale_color, unit_to_byte},
    step::step_frac,
};

fn fill_scaled(ctx: &EffectCtx<'_>, k: f32, pixels: &mut [Rgb]) {
    pixels.fill(scale_color(ctx.palette.color(0), unit_to_byte(k)));
}

pub(crate) fn fade_in(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let s = step_frac(ctx.elapsed_ms, ctx.speed_ms, 1.0);
    fill_scaled(ctx, s, pixels);
    Outcome::Running
}

pub(crate) fn fade_out(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let s = step_frac(ctx.elapsed_ms, ctx.speed_ms, 1.0);
    fill_scaled(ctx, 1.0 - s, pixels);
    Outcome::Running
}

/// Triangle ramp: up over the first half of the period, down over the second.
pub(crate) fn fade_in_out(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let s = step_frac(ctx.elapsed_ms, ctx.speed_ms, 2.0) - 1.0;
    fill_scaled(ctx, fabsf(1.0 - fabsf(s)), pixels);
    Outcome::Running
}

/// Cosine ramp, so the strip lingers near full and near dark.
pub(crate) fn glow(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let s = step_frac(ctx.elapsed_ms, ctx.speed_ms, TAU);
    fill_scaled(ctx, (1.0 - cosf(s)) / 2.0, pixels);
    Outcome::Running
}

/// Cross-fade through the palette, first to last, then snap back.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fade_colors(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let n = ctx.palette.color_count() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, n - 1.0);
    pixels.fill(ctx.palette.sample(t));
    Outcome::Running
}

/// Cross-fade through the palette and wrap from last back to first.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fade_colors_loop(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let n = ctx.palette.color_count() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, n);
    pixels.fill(ctx.palette.sample(t));
    Outcome::Running
}

/// Each pixel cross-fades through the palette with a 7-color stride, giving
/// neighbors distinct hues.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn pixels_fade_colors(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let n = ctx.palette.color_count() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, n);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = ctx.palette.sample(t + 7.0 * x as f32);
    }
    Outcome::Running
}

/// One decaying flash: full color at activation, black after one period,
/// then the animation retires itself.
pub(crate) fn sound_pulse(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let done = ctx.elapsed_ms >= ctx.speed_ms;
    let s = if done {
        1.0
    } else {
        step_frac(ctx.elapsed_ms, ctx.speed_ms, 1.0)
    };
    fill_scaled(ctx, 1.0 - s, pixels);
    if done { Outcome::Finished } else { Outcome::Running }
}
