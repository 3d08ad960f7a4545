//! Fire simulation in the Fire2012 style: a column of heat cells that cool,
//! drift upward and randomly spark near the base, mapped through the palette.

use super::{EffectCtx, Outcome, Scratch};
use crate::{color::Rgb, rng::Rng};

/// Total cooling spread over the strip. Less cooling means taller flames.
const COOLING: u32 = 600;

/// Chance out of 255 that a new spark ignites each frame.
const SPARKING: u32 = 120;

/// Sparks land within the first few cells.
const SPARK_ZONE: u32 = 7;

pub(crate) fn fire<const PX: usize>(
    ctx: &EffectCtx<'_>,
    rng: &mut Rng,
    scratch: &mut Scratch<PX>,
    pixels: &mut [Rgb],
) -> Outcome {
    let len = pixels.len();
    if len == 0 {
        return Outcome::Running;
    }
    if !matches!(scratch, Scratch::Heat(heat) if heat.len() == len) {
        let mut heat = heapless::Vec::new();
        // len is bounded by PX, the same bound as the pixel buffer
        let _ = heat.resize_default(len);
        *scratch = Scratch::Heat(heat);
    }
    let Scratch::Heat(heat) = scratch else {
        return Outcome::Running;
    };

    advance_heat(heat, rng);

    #[allow(clippy::cast_precision_loss)]
    let top = (ctx.palette.color_count() - 1) as f32;
    for (led, &h) in pixels.iter_mut().zip(heat.iter()) {
        *led = ctx.palette.sample(f32::from(h) * top / 256.0);
    }
    Outcome::Running
}

/// One simulation step over the heat column. `heat` must be non-empty.
fn advance_heat(heat: &mut [u8], rng: &mut Rng) {
    let len = heat.len();

    // Every cell cools a little.
    #[allow(clippy::cast_possible_truncation)]
    let cool_max = COOLING / len as u32 + 2;
    for cell in heat.iter_mut() {
        #[allow(clippy::cast_possible_truncation)]
        let cooling = rng.below(cool_max).min(255) as u8;
        *cell = cell.saturating_sub(cooling);
    }

    // Heat drifts up, each cell averaging the three below it.
    for k in (3..len).rev() {
        let sum = u16::from(heat[k - 1]) + u16::from(heat[k - 2]) + u16::from(heat[k - 3]);
        #[allow(clippy::cast_possible_truncation)]
        {
            heat[k] = (sum / 3) as u8;
        }
    }

    // Maybe ignite a spark near the base.
    if rng.below(255) < SPARKING {
        let y = (rng.below(SPARK_ZONE) as usize).min(len - 1);
        #[allow(clippy::cast_possible_truncation)]
        let spark = rng.range(160, 255) as u8;
        heat[y] = heat[y].saturating_add(spark);
    }
}
