//! Seedable xoroshiro128++ generator used to fill noise tiles.

use rand::{Error, RngCore, SeedableRng};

use crate::random::util::seed_to_u128_seed;

// Replacement state for an all-zero seed, which would otherwise only ever output zero
const ZERO_SEED_LOW: u64 = 0x9E37_79B9_7F4A_7C15;
const ZERO_SEED_HIGH: u64 = 0x6A09_E667_F3BC_C909;

/// A small, fast and fully deterministic generator. Two instances built from the same seed produce
/// the same sequence on every platform, which is what makes tile generation reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XoroshiroRandom {
    seed_low: u64,
    seed_high: u64,
}

impl XoroshiroRandom {
    /// Creates a generator from a single 64 bit seed.
    pub fn new(seed: u64) -> Self {
        let (low, high) = seed_to_u128_seed(seed);
        Self::from_longs(low, high)
    }

    /// Creates a generator directly from its two state words.
    pub fn from_longs(seed_low: u64, seed_high: u64) -> Self {
        if (seed_low | seed_high) == 0 {
            XoroshiroRandom {
                seed_low: ZERO_SEED_LOW,
                seed_high: ZERO_SEED_HIGH,
            }
        } else {
            XoroshiroRandom {
                seed_low,
                seed_high,
            }
        }
    }

    fn next_long(&mut self) -> u64 {
        let low = self.seed_low;
        let mut high = self.seed_high;
        let output = low.wrapping_add(high).rotate_left(17).wrapping_add(low);
        high ^= low;
        self.seed_low = low.rotate_left(49) ^ high ^ (high << 21);
        self.seed_high = high.rotate_left(28);
        output
    }
}

impl RngCore for XoroshiroRandom {
    fn next_u32(&mut self) -> u32 {
        // The high bits of xoroshiro output are the strongest
        (self.next_long() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_long().to_le_bytes();
            chunk.copy_from_slice(&bytes[.. chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XoroshiroRandom {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        low.copy_from_slice(&seed[.. 8]);
        high.copy_from_slice(&seed[8 ..]);

        Self::from_longs(u64::from_le_bytes(low), u64::from_le_bytes(high))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_is_replaced() {
        let mut rand = XoroshiroRandom::from_longs(0, 0);
        assert_ne!(rand.next_u64(), 0, "An all-zero state must not be kept.");
    }

    #[test]
    fn fill_bytes_partial_chunk() {
        let mut a = XoroshiroRandom::new(99);
        let mut b = a.clone();

        let mut bytes = [0u8; 11];
        a.fill_bytes(&mut bytes);

        let first = b.next_u64().to_le_bytes();
        let second = b.next_u64().to_le_bytes();
        assert_eq!(&bytes[.. 8], &first[..]);
        assert_eq!(&bytes[8 ..], &second[.. 3]);
    }
}
