//! Time-base ramps shared by the animation catalog.
//!
//! Every periodic animation derives its position from the time elapsed since
//! activation, a period in milliseconds and a range. These helpers are total:
//! a zero period is treated as 1 ms and a zero integer range as 1, so a
//! malformed command can slow an animation down to a crawl but never divide
//! by zero.

use libm::fmodf;

/// Integer ramp: walks `0..steps` once per `period_ms`, wrapping.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn step_index(elapsed_ms: u64, period_ms: u64, steps: u32) -> u32 {
    let period = period_ms.max(1);
    let steps = u64::from(steps.max(1));
    ((elapsed_ms.wrapping_mul(steps) / period) % steps) as u32
}

/// Fractional ramp: walks `0.0..range` once per `period_ms`, wrapping.
///
/// A non-positive range yields 0.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn step_frac(elapsed_ms: u64, period_ms: u64, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    let period = period_ms.max(1) as f32;
    fmodf(elapsed_ms as f32 * range / period, range)
}

/// Linear remap of `value` from `in_min..in_max` to `out_min..out_max`.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / span + out_min
}
