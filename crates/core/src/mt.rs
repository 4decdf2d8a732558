//! 32-bit Mersenne Twister (MT19937).
//!
//! Bit-exact with the reference generator: the same seed always yields the
//! same word stream on every platform. All arithmetic is `u32` with explicit
//! wrapping, so the 32-bit mask invariant is carried by the type.

use std::fmt;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const TEMPERING_MASK_B: u32 = 0x9D2C_5680;
const TEMPERING_MASK_C: u32 = 0xEFC6_0000;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Number of state words; one regeneration happens every `MT_STATE_WORDS` draws.
pub const MT_STATE_WORDS: usize = N;

/// MT19937 word generator.
///
/// Draws mutate the state, so an instance belongs to one caller at a time.
#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; N],
    index: usize,
    regenerations: u64,
}

impl MersenneTwister {
    /// Seed a new generator. The first draw triggers a full regeneration.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            state,
            index: N,
            regenerations: 0,
        }
    }

    /// Seed from a signed value using its two's-complement bit pattern.
    pub fn from_i32(seed: i32) -> Self {
        Self::new(seed as u32)
    }

    /// Seed from a wider value, keeping only the low 32 bits.
    pub fn from_u64_truncating(seed: u64) -> Self {
        Self::new(seed as u32)
    }

    /// Draw the next tempered 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
            self.index = 0;
        }

        let mut y = self.state[self.index];
        y ^= y >> 11;
        y ^= (y << 7) & TEMPERING_MASK_B;
        y ^= (y << 15) & TEMPERING_MASK_C;
        y ^= y >> 18;

        self.index += 1;
        y
    }

    /// How many times the state array has been regenerated.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    /// Regenerate every state word in place.
    ///
    /// Entries past the wrap point read words already rewritten in this pass.
    fn twist(&mut self) {
        for i in 0..N {
            // Disjoint bit ranges, so the sum cannot overflow.
            let x = (self.state[i] & UPPER_MASK) + (self.state[(i + 1) % N] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + M) % N] ^ x_a;
        }
        self.regenerations += 1;
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .field("regenerations", &self.regenerations)
            .finish_non_exhaustive()
    }
}
