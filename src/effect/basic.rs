//! One-shot fills: paint the buffer once, then stop.

use super::{EffectCtx, Outcome};
use crate::color::{BLACK, Rgb};

/// Dim white shown while the panel idles.
pub(crate) const IDLE_WHITE: Rgb = Rgb {
    r: 10,
    g: 10,
    b: 10,
};

pub(crate) fn fill(c: Rgb, pixels: &mut [Rgb]) -> Outcome {
    pixels.fill(c);
    Outcome::Finished
}

/// Light a single pixel at the index given by the option word.
pub(crate) fn one_pixel(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    pixels.fill(BLACK);
    let index = usize::from(ctx.option);
    if index < pixels.len() {
        pixels[index] = ctx.palette.color(0);
    }
    Outcome::Finished
}

/// Light the first `option` pixels.
pub(crate) fn pixel_line(ctx: &EffectCtx<'_>, pixels: &mut [Rgb]) -> Outcome {
    pixels.fill(BLACK);
    let lit = usize::from(ctx.option).min(pixels.len());
    pixels[..lit].fill(ctx.palette.color(0));
    Outcome::Finished
}
