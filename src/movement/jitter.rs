//! Bounded random jitter
//!
//! Each axis gets an independent uniform draw from `[-A/2, A - 1 - A/2]`.
//! `Uniform` samples by rejection, so the reduced range carries no modulo bias.

use crate::platform::Offset;
use rand::distributions::{Distribution, Uniform};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// State of a generator nobody has seeded yet.
const UNSEEDED_STATE: u64 = 1;

#[derive(Debug, Clone)]
pub struct JitterMovement {
    rng: ChaCha8Rng,
    range: Uniform<i32>,
    half: i32,
}

impl JitterMovement {
    /// Seeds from the first draw of an unseeded generator.
    ///
    /// That seed is the same on every run, so the sequence repeats between
    /// processes. Use [`JitterMovement::with_seed`] to pick another stream.
    pub fn new(amplitude: i32) -> Self {
        let seed = ChaCha8Rng::seed_from_u64(UNSEEDED_STATE).next_u64();
        Self::with_seed(amplitude, seed)
    }

    /// # Panics
    ///
    /// Panics if `amplitude` is not positive. `AgentConfig::validate` rules
    /// that out before a generator is built.
    pub fn with_seed(amplitude: i32, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            range: Uniform::new(0, amplitude),
            half: amplitude / 2,
        }
    }

    pub fn next_offset(&mut self) -> Offset {
        let dx = self.range.sample(&mut self.rng) - self.half;
        let dy = self.range.sample(&mut self.rng) - self.half;
        Offset::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unseeded_generators_agree() {
        let mut a = JitterMovement::new(10);
        let mut b = JitterMovement::new(10);
        for _ in 0..32 {
            assert_eq!(a.next_offset(), b.next_offset());
        }
    }

    #[test]
    fn test_distribution_is_flat() {
        const SAMPLES: usize = 100_000;
        let mut jitter = JitterMovement::with_seed(10, 42);
        let mut dx_counts = [0usize; 10];
        let mut dy_counts = [0usize; 10];
        for _ in 0..SAMPLES {
            let offset = jitter.next_offset();
            dx_counts[(offset.dx + 5) as usize] += 1;
            dy_counts[(offset.dy + 5) as usize] += 1;
        }

        let expected = SAMPLES / 10;
        for count in dx_counts.iter().chain(dy_counts.iter()) {
            assert!(
                count.abs_diff(expected) < expected / 20,
                "bucket count {} too far from {}",
                count,
                expected
            );
        }
    }

    #[test]
    fn test_amplitude_one_never_moves() {
        let mut jitter = JitterMovement::with_seed(1, 7);
        for _ in 0..16 {
            assert_eq!(jitter.next_offset(), Offset::ZERO);
        }
    }

    proptest! {
        #[test]
        fn offsets_stay_in_range(seed in any::<u64>(), amplitude in 1i32..200) {
            let mut jitter = JitterMovement::with_seed(amplitude, seed);
            let low = -(amplitude / 2);
            let high = amplitude - 1 - amplitude / 2;
            for _ in 0..64 {
                let offset = jitter.next_offset();
                prop_assert!((low..=high).contains(&offset.dx));
                prop_assert!((low..=high).contains(&offset.dy));
            }
        }
    }
}
