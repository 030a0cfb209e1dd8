//! Random color source.
//!
//! The firmware seeds [`Xorshift32`] from the boot-time tick counter;
//! tests seed it with fixed values for reproducible sequences.

use crate::game::ColorIndex;

/// Source of randomness for the sequence engine.
pub trait Rng {
    fn next_u32(&mut self) -> u32;

    /// Draw one color, discrete uniform over the 3 variants.
    fn color(&mut self) -> ColorIndex {
        // 2^32 - 1 is divisible by 3, so rejecting the single value
        // u32::MAX leaves an exact multiple of 3 outcomes and the
        // modulo below is bias-free.
        loop {
            let v = self.next_u32();
            if v != u32::MAX {
                return ColorIndex::ALL[(v % 3) as usize];
            }
        }
    }
}

/// Marsaglia xorshift32. Small, fast, and plenty for game sequences.
pub struct Xorshift32(u32);

impl Xorshift32 {
    /// Create a generator from a seed. A zero seed would make xorshift
    /// emit zero forever, so it is replaced with a fixed constant.
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x6D65_6D6F } else { seed })
    }
}

impl Rng for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}
