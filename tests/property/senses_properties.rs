use proptest::prelude::*;
use senses_score::{RatingsBundle, ScoringConfig, run_senses};

fn bundle_strategy() -> impl Strategy<Value = RatingsBundle> {
    (
        prop::collection::vec(-2.0f64..3.0, 0..30),
        prop::collection::vec(-2.0f64..3.0, 0..30),
        prop::collection::vec(-1e3f64..1e3, 0..30),
        prop::collection::vec(any::<bool>(), 0..30),
        prop::collection::vec(-1.0f64..8.0, 0..30),
    )
        .prop_map(|(coherence, structural, novelty, successes, likability)| RatingsBundle {
            coherence_ratings: coherence,
            structural_feedback: structural,
            novelty_indicators: novelty,
            application_successes: successes,
            likability_scores: likability,
            custom_metric: None,
        })
}

proptest! {
    #[test]
    fn every_score_in_unit_range(bundle in bundle_strategy(), z in 0.1f64..10.0) {
        let config = ScoringConfig::with_z_threshold(z).unwrap();
        let out = run_senses(&bundle, &config).unwrap();
        for v in out.scores.as_array() {
            prop_assert!((0.0..=1.0).contains(&v), "score {} out of range", v);
        }
        prop_assert!((0.0..=1.0).contains(&out.composite));
    }

    #[test]
    fn out_of_domain_sample_never_changes_hear(
        base in prop::collection::vec(0.0f64..=1.0, 0..25),
        bad in prop_oneof![1.0001f64..1e6, -1e6f64..-0.0001],
        pos in any::<prop::sample::Index>(),
    ) {
        let config = ScoringConfig::default();
        let clean = RatingsBundle { coherence_ratings: base.clone(), ..Default::default() };

        let mut injected = base;
        injected.insert(pos.index(injected.len() + 1), bad);
        let dirty = RatingsBundle { coherence_ratings: injected, ..Default::default() };

        let a = run_senses(&clean, &config).unwrap();
        let b = run_senses(&dirty, &config).unwrap();
        prop_assert_eq!(a.scores.hear, b.scores.hear);
        prop_assert_eq!(b.audits[0].n_out_of_domain, 1);
    }

    #[test]
    fn out_of_domain_sample_never_changes_see(
        base in prop::collection::vec(0.0f64..=1.0, 0..25),
        bad in prop_oneof![1.0001f64..1e6, -1e6f64..-0.0001],
        pos in any::<prop::sample::Index>(),
    ) {
        let config = ScoringConfig::default();
        let clean = RatingsBundle { structural_feedback: base.clone(), ..Default::default() };

        let mut injected = base;
        injected.insert(pos.index(injected.len() + 1), bad);
        let dirty = RatingsBundle { structural_feedback: injected, ..Default::default() };

        let a = run_senses(&clean, &config).unwrap();
        let b = run_senses(&dirty, &config).unwrap();
        prop_assert_eq!(a.scores.see, b.scores.see);
        prop_assert_eq!(b.audits[1].n_out_of_domain, 1);
    }

    #[test]
    fn out_of_domain_sample_never_changes_taste(
        base in prop::collection::vec(1.0f64..=5.0, 0..25),
        bad in prop_oneof![5.0001f64..1e6, -1e6f64..0.9999],
        pos in any::<prop::sample::Index>(),
    ) {
        let config = ScoringConfig::default();
        let clean = RatingsBundle { likability_scores: base.clone(), ..Default::default() };

        let mut injected = base;
        injected.insert(pos.index(injected.len() + 1), bad);
        let dirty = RatingsBundle { likability_scores: injected, ..Default::default() };

        let a = run_senses(&clean, &config).unwrap();
        let b = run_senses(&dirty, &config).unwrap();
        prop_assert_eq!(a.scores.taste, b.scores.taste);
        prop_assert_eq!(b.audits[4].n_out_of_domain, 1);
    }

    #[test]
    fn extreme_novelty_is_rejected_as_outlier(
        base in prop::collection::vec(-1.0f64..1.0, 11..40),
        sign in prop_oneof![Just(1.0f64), Just(-1.0f64)],
    ) {
        // Without the extreme sample and with an unreachable threshold, nothing is dropped.
        let unfiltered = RatingsBundle { novelty_indicators: base.clone(), ..Default::default() };
        let reference = run_senses(&unfiltered, &ScoringConfig::with_z_threshold(1e300).unwrap()).unwrap();

        let mut injected = base;
        injected.push(sign * 1e6);
        let bundle = RatingsBundle { novelty_indicators: injected, ..Default::default() };
        let out = run_senses(&bundle, &ScoringConfig::default()).unwrap();

        prop_assert_eq!(out.audits[2].n_outliers, 1);
        prop_assert_eq!(out.scores.smell, reference.scores.smell);
    }

    #[test]
    fn identical_samples_survive_outlier_removal(
        v in 0.0f64..=1.0,
        like in 1.0f64..=5.0,
        n in 1usize..20,
        z in 0.1f64..5.0,
    ) {
        let bundle = RatingsBundle {
            coherence_ratings: vec![v; n],
            likability_scores: vec![like; n],
            ..Default::default()
        };
        let out = run_senses(&bundle, &ScoringConfig::with_z_threshold(z).unwrap()).unwrap();
        prop_assert_eq!(out.audits[0].n_kept, n);
        prop_assert_eq!(out.audits[4].n_kept, n);
        prop_assert!((out.scores.hear - v).abs() < 1e-12);
        prop_assert!((out.scores.taste - (like - 1.0) / 4.0).abs() < 1e-12);
    }
}

#[test]
fn empty_bundle_scores_zero() {
    let out = run_senses(&RatingsBundle::default(), &ScoringConfig::default()).unwrap();
    assert_eq!(out.scores.as_array(), [0.0; 5]);
    assert_eq!(out.composite, 0.0);
}
