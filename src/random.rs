//! Seeded random number generation.
//!
//! Every distribution owns one generator built here. The generator is
//! deterministic for a given seed on the same platform; an absent seed draws
//! fresh state from the operating system.
//!
//! # Reproducibility
//!
//! Two generators created with the same seed produce the same stream, so a
//! distribution constructed (or reset) with a fixed seed replays its samples.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_probability::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed.
///
/// `Some(seed)` behaves like [`create_rng`]; `None` seeds from OS entropy, so
/// the resulting stream is not reproducible.
pub fn generator(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => SmallRng::from_os_rng(),
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn seeded_streams_replay(seed in 0_u64..10000) {
            let mut a = generator(Some(seed));
            let mut b = generator(Some(seed));
            for _ in 0..8 {
                let x: f64 = a.random();
                let y: f64 = b.random();
                prop_assert_eq!(x, y);
            }
        }

        #[test]
        fn unit_draws_in_range(seed in 0_u64..10000) {
            let mut rng = create_rng(seed);
            let x: f64 = rng.random();
            prop_assert!((0.0..1.0).contains(&x));
        }
    }
}
