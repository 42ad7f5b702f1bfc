//! Seeded pseudo-random helpers
//!
//! Terrain uses a stateless sine hash: identical seed, identical value, so a
//! wall point depends only on its depth and side. Creature spawning draws
//! from a PCG stream that is re-seeded from the area on every reset.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Map a seed to a reproducible value in [0, 1)
///
/// Nearby seeds give visually uncorrelated output. There is no internal
/// state; derive a new seed per call to get independent-looking sequences.
#[inline]
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    let r = x - x.floor();
    // x just below an integer can round up to exactly 1.0
    if r >= 1.0 { 0.0 } else { r }
}

/// Linear interpolation driven by a seeded sample
#[inline]
pub fn seeded_range(seed: f64, min: f64, max: f64) -> f64 {
    min + (max - min) * seeded_random(seed)
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

/// Stream id for creature spawning
pub const CREATURE_STREAM: u64 = 0xC0D_F15;

impl RngState {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self { seed, stream }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mixed = self.seed ^ self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Pcg32::seed_from_u64(mixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;

    #[test]
    fn test_seeded_random_deterministic() {
        for seed in [0.0, 1.0, 12_345.0, 12_345.1, -77.5] {
            assert_eq!(seeded_random(seed).to_bits(), seeded_random(seed).to_bits());
        }
    }

    #[test]
    fn test_nearby_seeds_differ() {
        let a = seeded_random(12_345.0);
        let b = seeded_random(12_345.1);
        let c = seeded_random(12_346.0);
        assert!((a - b).abs() > 1e-6);
        assert!((a - c).abs() > 1e-6);
    }

    #[test]
    fn test_seeded_range_bounds() {
        for i in 0..500 {
            let v = seeded_range(i as f64 * 0.37, 40.0, 100.0);
            assert!((40.0..100.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_state_reproducible() {
        let state = RngState::new(54_321, CREATURE_STREAM);
        let mut a = state.to_rng();
        let mut b = state.to_rng();
        for _ in 0..32 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }

        let mut other = RngState::new(54_321, CREATURE_STREAM + 1).to_rng();
        let mut c = state.to_rng();
        let same = (0..32).all(|_| c.random::<u32>() == other.random::<u32>());
        assert!(!same);
    }

    proptest! {
        #[test]
        fn prop_seeded_random_in_unit_interval(seed in -1.0e7f64..1.0e7f64) {
            let v = seeded_random(seed);
            prop_assert!((0.0..1.0).contains(&v));
        }
    }
}
