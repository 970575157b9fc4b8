use proptest::prelude::*;
use strdist_core::{
    jaccard_distance, jaccard_index, ngrams, weighted_jaccard_distance, weighted_jaccard_index,
    CaseMapper, Finder,
};

const EPSILON: f64 = 1e-9;

fn short_string() -> impl Strategy<Value = String> {
    "[a-dA-Dé日]{0,8}"
}

proptest! {
    /// Invariant: both distances are symmetric.
    #[test]
    fn distances_are_symmetric(s1 in short_string(), s2 in short_string(), n in 1usize..4) {
        let d12 = jaccard_distance(&s1, &s2, n).unwrap();
        let d21 = jaccard_distance(&s2, &s1, n).unwrap();
        prop_assert!((d12 - d21).abs() < EPSILON);

        let w12 = weighted_jaccard_distance(&s1, &s2, n).unwrap();
        let w21 = weighted_jaccard_distance(&s2, &s1, n).unwrap();
        prop_assert!((w12 - w21).abs() < EPSILON);
    }

    /// Invariant: a string is at distance zero from itself.
    #[test]
    fn distance_to_self_is_zero(s in short_string(), n in 1usize..4) {
        prop_assert_eq!(jaccard_distance(&s, &s, n).unwrap(), 0.0);
    }

    /// Invariant: indices and distances stay in [0, 1] and sum to one.
    #[test]
    fn values_in_range(s1 in short_string(), s2 in short_string(), n in 1usize..4) {
        let a = ngrams(&s1, n).unwrap();
        let b = ngrams(&s2, n).unwrap();

        let ji = jaccard_index(&a, &b);
        let wji = weighted_jaccard_index(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ji));
        prop_assert!((0.0..=1.0).contains(&wji));

        let d = jaccard_distance(&s1, &s2, n).unwrap();
        let wd = weighted_jaccard_distance(&s1, &s2, n).unwrap();
        prop_assert!((0.0..=1.0).contains(&d));
        prop_assert!((0.0..=1.0).contains(&wd));
        prop_assert!((ji + d - 1.0).abs() < EPSILON);
        prop_assert!((wji + wd - 1.0).abs() < EPSILON);
    }

    /// Invariant: the gram total equals the number of window positions.
    #[test]
    fn total_count_matches_length(s in short_string(), n in 1usize..4) {
        let set = ngrams(&s, n).unwrap();
        let chars = s.chars().count();
        prop_assert_eq!(set.total_count(), (chars + 1).saturating_sub(n));
        prop_assert_eq!(set.is_empty(), chars < n);
    }

    /// Invariant: short targets and entries never appear, nor do low scores.
    #[test]
    fn finder_filters_hold(
        target in short_string(),
        population in prop::collection::vec(short_string(), 0..12),
        min_len in 0usize..6,
        threshold in 0.0f64..=1.0,
    ) {
        let finder = Finder::new(2, min_len, threshold, CaseMapper::ForceLower).unwrap();
        let matches = finder.find(&target, &population);

        if target.chars().count() < min_len {
            prop_assert!(matches.is_empty());
        }
        for m in &matches {
            prop_assert!(m.value.chars().count() >= min_len);
            prop_assert!(m.score >= threshold);
        }
    }

    /// Invariant: top-N results are bounded and non-increasing.
    #[test]
    fn top_n_bounded_and_sorted(
        target in short_string(),
        population in prop::collection::vec(short_string(), 0..12),
        max_n in 1usize..5,
    ) {
        let finder = Finder::new(2, 0, 0.0, CaseMapper::NoChange).unwrap();
        let matches = finder.find_top_n(&target, &population, max_n);

        prop_assert!(matches.len() <= max_n);
        prop_assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
