// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic body populations for stress tests and benchmarks.

use crate::body::{FakeBody, FakeBodyBuilder};
use crate::mask::CircleMask;

/// `xoroshiro128+` generator; identical seeds give identical populations on
/// every platform.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Seeds the generator via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm = seed;
        let mut state = [splitmix64(&mut sm), splitmix64(&mut sm)];
        if state == [0, 0] {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Uniform float in `[0, 1)` from the high 52 bits.
    pub fn next_f64(&mut self) -> f64 {
        let bits = (self.next_u64() >> 12) | 0x3ff0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Uniform float in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

/// `count` disc bodies spread over `[0, extent)²` with radii in
/// `[min_radius, max_radius)`.
pub fn scatter_bodies(
    seed: u64,
    count: usize,
    extent: f64,
    min_radius: f64,
    max_radius: f64,
) -> Vec<FakeBody> {
    let mut rng = Prng::from_seed_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.range(0.0, extent);
            let y = rng.range(0.0, extent);
            let r = rng.range(min_radius, max_radius);
            FakeBodyBuilder::new()
                .label("scattered")
                .at(x, y)
                .mask(CircleMask::new(r))
                .build()
        })
        .collect()
}
