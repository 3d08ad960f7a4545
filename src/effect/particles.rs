//! Particle animations: one particle per palette color, integrated in strip
//! units (position 0.0 to 1.0) with real elapsed-time physics so the look
//! does not depend on the refresh rate.

use super::{EffectCtx, Outcome, ParticleSet, Scratch};
use crate::{
    color::{BLACK, Rgb, scale_color, sum_colors, unit_to_byte},
    rng::Rng,
    step::map_range,
};

/// Velocity kept after a floor bounce.
const BOUNCE_DAMPING: f32 = 0.91;

/// Seeds one particle per palette color at a random position, standing
/// still. Returns true when this call did the seeding; the caller skips the
/// frame so the first physics step sees a sane time delta.
#[allow(clippy::cast_precision_loss)]
fn seed<const PX: usize>(ctx: &EffectCtx<'_>, rng: &mut Rng, scratch: &mut Scratch<PX>) -> bool {
    let count = ctx.palette.color_count();
    if matches!(scratch, Scratch::Particles(set) if set.pos.len() == count) {
        return false;
    }
    let mut set = ParticleSet::new(ctx.now);
    for _ in 0..count {
        // count is bounded by the palette capacity
        let _ = set.pos.push(rng.below(255) as f32 / 255.0);
        let _ = set.vel.push(0.0);
    }
    *scratch = Scratch::Particles(set);
    true
}

/// Balls falling under gravity, bouncing off the near end with damping and
/// getting a random kick when they settle.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn bouncing_balls<const PX: usize>(
    ctx: &EffectCtx<'_>,
    rng: &mut Rng,
    scratch: &mut Scratch<PX>,
    pixels: &mut [Rgb],
) -> Outcome {
    let len = pixels.len();
    if len == 0 || seed(ctx, rng, scratch) {
        return Outcome::Running;
    }
    let Scratch::Particles(set) = scratch else {
        return Outcome::Running;
    };

    let gravity = set.step_millis(ctx.now) / 5000.0;
    for (pos, vel) in set.pos.iter_mut().zip(set.vel.iter_mut()) {
        // relaunch a ball that has almost settled on the floor
        if *vel > -0.04 && *vel < 0.0 && *pos > 0.0 && *pos < 0.1 {
            *vel = 0.09 - rng.below(10) as f32 / 1000.0;
        }
        *pos += *vel;
        if *pos >= 1.0 {
            *pos = 1.0;
        }
        if *pos < 0.0 {
            *pos = -*pos;
            *vel = -BOUNCE_DAMPING * *vel;
        }
        *vel -= gravity;
    }

    pixels.fill(BLACK);
    let top = (len - 1) as f32;
    for (i, &pos) in set.pos.iter().enumerate() {
        let p = (map_range(pos, 0.0, 1.0, 0.0, top) as usize).min(len - 1);
        pixels[p] = sum_colors(pixels[p], ctx.palette.color(i));
    }
    Outcome::Running
}

/// Bubbles rising with growing lift, respawning at the near end at random
/// moments, flickering as they go.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub(crate) fn bubbles<const PX: usize>(
    ctx: &EffectCtx<'_>,
    rng: &mut Rng,
    scratch: &mut Scratch<PX>,
    pixels: &mut [Rgb],
) -> Outcome {
    let len = pixels.len();
    if len == 0 || seed(ctx, rng, scratch) {
        return Outcome::Running;
    }
    let Scratch::Particles(set) = scratch else {
        return Outcome::Running;
    };

    let lift = set.step_millis(ctx.now) / 80000.0;
    for (pos, vel) in set.pos.iter_mut().zip(set.vel.iter_mut()) {
        if *pos >= 1.0 {
            *pos = 0.0;
            *vel = 0.0;
        }
        if rng.below(20) == 0 && *pos == 0.0 {
            *pos = 0.0001;
            *vel = 0.0001;
        }
        if *pos > 0.0 {
            *pos += *vel;
            *vel += lift;
        }
    }

    pixels.fill(BLACK);
    let top = (len - 1) as f32;
    for (i, &pos) in set.pos.iter().enumerate() {
        if pos > 0.0 {
            let p = (map_range(pos, 0.0, 1.0, 0.0, top) as usize).min(len - 1);
            let flicker = 1.0 - rng.below(10) as f32 / 30.0;
            pixels[p] = scale_color(ctx.palette.color(i), unit_to_byte(flicker));
        }
    }
    Outcome::Running
}
