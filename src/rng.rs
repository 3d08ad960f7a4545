//! Small deterministic random source.
//!
//! Sparkle, fire and the particle animations need cheap entropy, but the
//! crate has no allocator and no OS to ask. This is a SplitMix64-style
//! generator: one `u64` of state, a handful of multiplies per draw, and a
//! seed the embedder picks (a hardware RNG read, an ADC sample, anything).
//! Tests pass fixed seeds and get reproducible frames.

/// Seedable pseudo-random generator.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }

    /// Uniform value in `0..bound`. A bound of 0 yields 0.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Uniform value in `lo..hi` (half-open). Collapses to `lo` when empty.
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.below(hi - lo)
    }

    /// Uniform float in `[0, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn unit_f32(&mut self) -> f32 {
        self.next_u32() as f32 / 4_294_967_296.0
    }
}
