//! Property-based tests for the classifier's core guarantees.
//!
//! - Cache transparency: memoized window evaluation equals direct evaluation
//!   regardless of call order
//! - Translation invariance: leading dead cells never change a pattern's fate
//! - Extinction threshold: 2 or fewer live cells always vanish
//! - Determinism: independent classifiers agree on every pattern

use linelife::rule::evaluate_slice;
use linelife::{normalize, BitLine, Classifier, Outcome, SliceCache};
use proptest::prelude::*;

/// Random pattern text over live/dead cells.
fn pattern_strategy(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::bool::ANY, 0..max_len)
        .prop_map(|cells| cells.iter().map(|&c| if c { '#' } else { '.' }).collect())
}

proptest! {
    #[test]
    fn cache_is_transparent(windows in prop::collection::vec(0u16..4096, 1..64)) {
        // Arbitrary lookup order against a single cache instance.
        let mut cache = SliceCache::new();
        for window in windows {
            prop_assert_eq!(cache.evaluate(window), evaluate_slice(window));
            // Second lookup hits the populated entry.
            prop_assert_eq!(cache.evaluate(window), evaluate_slice(window));
        }
    }

    #[test]
    fn classification_is_translation_invariant(
        pattern in pattern_strategy(32),
        pad in 0usize..24,
    ) {
        let mut classifier = Classifier::new();
        let padded = format!("{}{}", ".".repeat(pad), pattern);
        prop_assert_eq!(classifier.classify(&pattern), classifier.classify(&padded));
    }

    #[test]
    fn normalize_cancels_translation(pattern in pattern_strategy(32), d in 0usize..48) {
        let line = BitLine::encode(&pattern, 64);
        let mut shifted = line.clone();
        shifted.shift_right(d);

        let a = normalize(&line);
        let b = normalize(&shifted);
        prop_assert_eq!(&a.line, &b.line);
        if line.num_set() > 0 {
            prop_assert_eq!(a.shift, b.shift + d);
        }
    }

    #[test]
    fn sparse_patterns_always_vanish(
        len in 1usize..64,
        positions in prop::collection::vec(0usize..64, 0..=2),
    ) {
        // Any placement of at most two live cells is below the survival
        // threshold.
        let mut cells = vec!['.'; len];
        for &p in &positions {
            cells[p % len] = '#';
        }
        let text: String = cells.into_iter().collect();
        let mut classifier = Classifier::new();
        prop_assert_eq!(classifier.classify(&text), Outcome::Vanishing);
    }

    #[test]
    fn classification_is_deterministic(pattern in pattern_strategy(40)) {
        let mut a = Classifier::new();
        let mut b = Classifier::new();
        let outcome = a.classify(&pattern);
        prop_assert_eq!(outcome, b.classify(&pattern));
        prop_assert_eq!(outcome, a.classify(&pattern));
    }

    #[test]
    fn live_count_preserved_by_normalization(pattern in pattern_strategy(48)) {
        let line = BitLine::encode(&pattern, 100);
        let canonical = normalize(&line);
        prop_assert_eq!(canonical.line.num_set(), line.num_set());
    }
}
