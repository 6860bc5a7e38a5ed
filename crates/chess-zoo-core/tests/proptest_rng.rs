//! Property-based tests for the simulation RNG.
//!
//! Every draw must stay inside its requested bounds for any seed, since
//! move, target and dwell selection index straight into collections with
//! the results.

use chess_zoo_core::fixed::Fixed64;
use chess_zoo_core::rng::SimRng;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn below_stays_under_bound(seed in any::<u64>(), n in 1u64..=u64::MAX) {
        let mut rng = SimRng::new(seed);
        for _ in 0..16 {
            prop_assert!(rng.below(n) < n);
        }
    }

    #[test]
    fn range_stays_half_open(seed in any::<u64>(), lo in 0u64..100_000, width in 0u64..100_000) {
        let mut rng = SimRng::new(seed);
        let hi = lo + width;
        for _ in 0..16 {
            let v = rng.range(lo, hi);
            if width == 0 {
                prop_assert_eq!(v, lo);
            } else {
                prop_assert!(lo <= v && v < hi);
            }
        }
    }

    #[test]
    fn sample_indices_are_distinct_and_in_range(
        seed in any::<u64>(),
        len in 0usize..64,
        count in 0usize..80,
    ) {
        let mut rng = SimRng::new(seed);
        let picked = rng.sample_indices(len, count);
        prop_assert_eq!(picked.len(), count.min(len));

        let mut seen = vec![false; len];
        for &i in &picked {
            prop_assert!(i < len);
            prop_assert!(!seen[i], "index {} picked twice", i);
            seen[i] = true;
        }
    }

    #[test]
    fn unit_is_in_unit_interval(seed in any::<u64>()) {
        let mut rng = SimRng::new(seed);
        for _ in 0..16 {
            let v = rng.unit();
            prop_assert!(v >= Fixed64::ZERO && v < Fixed64::from_num(1));
        }
    }
}
