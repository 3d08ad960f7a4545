//! Sweeps: a lit pixel, tent profile or comet tail traveling the strip.
//!
//! All of these share one trick: the sweep color itself also walks the
//! palette once per period, so on multi-color palettes the moving shape
//! changes hue as it travels.

use libm::fabsf;

use super::{EffectCtx, Outcome};
use crate::{
    color::{BLACK, Rgb, scale_color, unit_to_byte},
    step::{map_range, step_frac, step_index},
};

fn cursor_color(ctx: &EffectCtx<'_>) -> Rgb {
    #[allow(clippy::cast_precision_loss)]
    let n = ctx.palette.color_count() as f32;
    ctx.palette.sample(step_frac(ctx.elapsed_ms, ctx.speed_ms, n))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn shift_right(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, pixels.len() as u32) as usize;
    let c = cursor_color(ctx);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = if x == t { c } else { BLACK };
    }
    Outcome::Running
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn shift_left(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let len = pixels.len();
    let t = step_index(ctx.elapsed_ms, ctx.speed_ms, len as u32) as usize;
    let c = cursor_color(ctx);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = if x + t + 1 == len { c } else { BLACK };
    }
    Outcome::Running
}

/// One pixel walking back and forth between the ends.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn bounce(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let len = pixels.len() as i64;
    let span = (2 * len - 2).max(0) as u32;
    let t = i64::from(step_index(ctx.elapsed_ms, ctx.speed_ms, span));
    let lit = (len - 1) - (t - (len - 1)).abs();
    let c = cursor_color(ctx);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = if x as i64 == lit { c } else { BLACK };
    }
    Outcome::Running
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn smooth_shift_right(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, lenf + 1.0);
    let c = cursor_color(ctx);
    for (x, led) in pixels.iter_mut().enumerate() {
        let k = (1.0 - fabsf(t - 1.0 - x as f32)).max(0.0);
        *led = scale_color(c, unit_to_byte(k));
    }
    Outcome::Running
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn smooth_shift_left(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, lenf + 1.0);
    let c = cursor_color(ctx);
    for (x, led) in pixels.iter_mut().enumerate() {
        let k = (1.0 - fabsf(lenf - t - x as f32)).max(0.0);
        *led = scale_color(c, unit_to_byte(k));
    }
    Outcome::Running
}

/// Tent profile bouncing between the ends.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn smooth_bounce(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, 2.0 * lenf - 2.0);
    let c = cursor_color(ctx);
    let peak = fabsf(t - lenf + 1.0);
    for (x, led) in pixels.iter_mut().enumerate() {
        let k = (1.0 - fabsf(peak - x as f32)).clamp(0.0, 1.0);
        *led = scale_color(c, unit_to_byte(k));
    }
    Outcome::Running
}

/// Bright head with a linear tail half the strip long. The travel range
/// extends past the end so the tail fully exits before wrapping.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn comet(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let tail = lenf / 2.0;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, 2.0 * lenf - tail);
    let c = cursor_color(ctx);
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = scale_color(c, unit_to_byte(comet_profile(x as f32 - t, tail)));
    }
    Outcome::Running
}

/// Comet whose tail fades through the palette instead of one color.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn comet_trail(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let tail = lenf / 2.0;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, 2.0 * lenf - tail);
    let n = ctx.palette.color_count() as f32;
    for (x, led) in pixels.iter_mut().enumerate() {
        let x = x as f32;
        let tx = map_range((t - x).max(0.0), 0.0, lenf / 1.7, 0.0, n - 1.0);
        let c = ctx.palette.sample(tx);
        *led = scale_color(c, unit_to_byte(comet_profile(x - t, tail)));
    }
    Outcome::Running
}

fn comet_profile(head_distance: f32, tail: f32) -> f32 {
    if head_distance < 0.0 {
        (head_distance / tail + 1.2).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Plateau a quarter of the strip wide scanning back and forth.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scanner(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let width = lenf / 4.0;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, 2.0 * lenf - 2.0);
    let c = cursor_color(ctx);
    let peak = fabsf(t - lenf + 1.0);
    for (x, led) in pixels.iter_mut().enumerate() {
        let k = (width - fabsf(peak - x as f32)).clamp(0.0, 1.0);
        *led = scale_color(c, unit_to_byte(k));
    }
    Outcome::Running
}

/// Scanner variant whose plateau fully leaves the strip at both ends.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scanner_wide(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let lenf = pixels.len() as f32;
    let width = lenf / 4.0;
    let t = step_frac(ctx.elapsed_ms, ctx.speed_ms, 2.0 * lenf + (width * 4.0 - 1.0));
    let c = cursor_color(ctx);
    let peak = fabsf(t - lenf - 2.0 * width);
    for (x, led) in pixels.iter_mut().enumerate() {
        let k = (width - fabsf(peak - x as f32 - width)).clamp(0.0, 1.0);
        *led = scale_color(c, unit_to_byte(k));
    }
    Outcome::Running
}
