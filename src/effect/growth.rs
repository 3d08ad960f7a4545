//! One-shot growth animations: the strip fills, empties or is walked once
//! over the period, then the animation retires itself.

use super::{EffectCtx, Outcome};
use crate::color::{BLACK, Rgb, scale_color};

/// Brightness of the pixels flanking the march walker, about 10%.
const MARCH_NEIGHBOR: u8 = 25;

/// Pixels covered after `elapsed_ms` of a `speed_ms`-long ramp.
#[allow(clippy::cast_possible_truncation)]
fn covered(ctx: &EffectCtx<'_>, len: usize) -> usize {
    if ctx.speed_ms == 0 || ctx.elapsed_ms >= ctx.speed_ms {
        return len;
    }
    ((ctx.elapsed_ms * len as u64) / ctx.speed_ms) as usize
}

/// Fill from the near end, cycling the palette per pixel.
pub(crate) fn grow(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let numon = covered(ctx, pixels.len());
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = if x < numon {
            ctx.palette.color(x)
        } else {
            BLACK
        };
    }
    if numon == pixels.len() {
        Outcome::Finished
    } else {
        Outcome::Running
    }
}

/// Black out from the near end, leaving the far end palette-cycled.
pub(crate) fn shrink(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let numoff = covered(ctx, pixels.len());
    for (x, led) in pixels.iter_mut().enumerate() {
        *led = if x < numoff {
            BLACK
        } else {
            ctx.palette.color(x)
        };
    }
    if numoff == pixels.len() {
        Outcome::Finished
    } else {
        Outcome::Running
    }
}

/// Walk one bright pixel with dim flanking neighbors across the strip once.
pub(crate) fn march(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    let len = pixels.len();
    pixels.fill(BLACK);
    let walker = covered(ctx, len);
    if walker >= len {
        return Outcome::Finished;
    }
    let c = ctx.palette.color(0);
    let dim = scale_color(c, MARCH_NEIGHBOR);
    if walker >= 1 {
        pixels[walker - 1] = dim;
    }
    pixels[walker] = c;
    if walker + 1 < len {
        pixels[walker + 1] = dim;
    }
    Outcome::Running
}
