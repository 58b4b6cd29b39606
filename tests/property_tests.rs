use echoscore::alignment::{align, original_words, recognized_words};
use echoscore::distance::distance;
use echoscore::scorer::Scorer;
use echoscore::ComparisonEngine;
use proptest::prelude::*;

// --- STRATEGIES ---

// Small vocabulary so matches, repeats and ties are common
fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop::sample::select(vec!["a", "b", "c", "the", "The", "cat", "dog"]),
        0..24,
    )
    .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn arb_sentence() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Za-z']{1,6}[,.!?]?", 0..16).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_distance_symmetric(a in arb_tokens(), b in arb_tokens()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_identity(a in arb_tokens()) {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn test_distance_bounded_by_longer_side(a in arb_tokens(), b in arb_tokens()) {
        let d = distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn test_alignment_reconstructs_both_sides(a in arb_tokens(), b in arb_tokens()) {
        let diff = align(&a, &b);
        prop_assert_eq!(original_words(&diff), a.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(recognized_words(&diff), b.iter().map(String::as_str).collect::<Vec<_>>());
        for (idx, entry) in diff.iter().enumerate() {
            prop_assert_eq!(entry.position, idx);
        }
    }

    #[test]
    fn test_scores_in_range(a in arb_tokens(), b in arb_tokens()) {
        let diff = align(&a, &b);
        let details = Scorer::default().score_details(&diff);
        for s in [details.accuracy, details.fluency, details.overall] {
            prop_assert!((0.0..=100.0).contains(&s), "score out of range: {}", s);
        }
        if details.total == 0 {
            prop_assert_eq!(details.scores(), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_engine_on_raw_text(original in arb_sentence(), recognized in arb_sentence()) {
        let engine = ComparisonEngine::default();
        let res = engine.compare(&original, &recognized);
        prop_assert!((0.0..=100.0).contains(&res.overall_score));
        prop_assert_eq!(
            original_words(&res.diff_entries),
            res.original_tokens.iter().map(String::as_str).collect::<Vec<_>>()
        );
        prop_assert!(res.edit_distance <= res.original_tokens.len().max(res.recognized_tokens.len()));
    }
}
