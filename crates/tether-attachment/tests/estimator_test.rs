//! Estimator behavior over realistic observation streams.

use proptest::prelude::*;

use tether_attachment::confidence::compute_confidence;
use tether_attachment::{AttachmentEstimator, WindowGate};
use tether_core::config::EstimatorConfig;
use tether_core::models::{
    AttachmentStyle, CategoryTag, CommunicationPattern, InteractionKind, Observation,
    RelationshipContext, StyleScores, UiTone,
};
use tether_core::normalize::{is_distribution, normalize};
use test_fixtures::{accepted, anxious_week, interaction, prior_for, tone, ts};

fn gate_from_day0() -> WindowGate {
    WindowGate::with_start(7, Some(ts(0, 0)))
}

fn pursuing(timestamp: i64) -> Observation {
    interaction(
        timestamp,
        false,
        InteractionKind::Other,
        CommunicationPattern::Pursuing,
        RelationshipContext::Other,
    )
}

#[test]
fn full_anxious_week_confirms() {
    let estimator = AttachmentEstimator::default();
    let observations = anxious_week(7, 2);
    let rollup = estimator.estimate(&observations, None, &gate_from_day0(), ts(7, 0));

    assert_eq!(rollup.primary, AttachmentStyle::Anxious);
    assert_eq!(rollup.sample_count, 14);
    assert_eq!(rollup.days_observed, 7);
    assert!(rollup.window_complete);
    assert_eq!(rollup.confidence, 1.0);

    let confirmed = estimator.maybe_confirm(&rollup).expect("gate should pass");
    assert_eq!(confirmed.style, AttachmentStyle::Anxious);
    assert_eq!(confirmed.sample_count, 14);
}

#[test]
fn window_one_second_short_does_not_confirm() {
    let estimator = AttachmentEstimator::default();
    let rollup = estimator.estimate(&anxious_week(7, 2), None, &gate_from_day0(), ts(7, 0) - 1);
    assert!(!rollup.window_complete);
    assert!(estimator.maybe_confirm(&rollup).is_none());
}

#[test]
fn too_few_samples_do_not_confirm() {
    let estimator = AttachmentEstimator::default();
    let rollup = estimator.estimate(&anxious_week(7, 1), None, &gate_from_day0(), ts(8, 0));
    assert!(rollup.window_complete);
    assert_eq!(rollup.sample_count, 7);
    assert!(estimator.maybe_confirm(&rollup).is_none());
}

#[test]
fn observations_before_window_start_are_ignored() {
    let estimator = AttachmentEstimator::default();
    let gate = WindowGate::with_start(7, Some(ts(1, 0)));
    let mut observations = anxious_week(3, 1);
    observations.push(accepted(ts(0, 23)));

    let rollup = estimator.estimate(&observations, None, &gate, ts(3, 0));
    // Day 0 falls before the window.
    assert_eq!(rollup.sample_count, 2);
    assert_eq!(rollup.days_observed, 2);
    assert_eq!(rollup.primary, AttachmentStyle::Anxious);
}

#[test]
fn many_events_on_one_day_count_as_one_day() {
    let estimator = AttachmentEstimator::default();
    let observations = anxious_week(1, 10);
    let rollup = estimator.estimate(&observations, None, &gate_from_day0(), ts(1, 0));
    assert_eq!(rollup.sample_count, 10);
    assert_eq!(rollup.days_observed, 1);
}

#[test]
fn unstarted_window_scores_but_never_completes() {
    let estimator = AttachmentEstimator::default();
    let rollup = estimator.estimate(&anxious_week(7, 2), None, &WindowGate::new(7), ts(30, 0));
    assert_eq!(rollup.sample_count, 14);
    assert!(!rollup.window_complete);
    assert!(estimator.maybe_confirm(&rollup).is_none());
}

#[test]
fn zero_evidence_falls_back_to_secure_with_zero_confidence() {
    let estimator = AttachmentEstimator::default();
    let observations = vec![tone(ts(0, 1), UiTone::Neutral, 0.9, &[])];
    let rollup = estimator.estimate(&observations, None, &gate_from_day0(), ts(0, 2));
    assert_eq!(rollup.sample_count, 1);
    assert!(rollup.scores.is_zero());
    assert_eq!(rollup.primary, AttachmentStyle::Secure);
    assert_eq!(rollup.confidence, 0.0);
}

#[test]
fn exact_tie_prefers_secure_then_anxious() {
    let estimator = AttachmentEstimator::default();

    // secure 0.40 vs anxious 0.20 + 0.20
    let tied = vec![accepted(ts(0, 1)), pursuing(ts(0, 2)), pursuing(ts(0, 3))];
    let rollup = estimator.estimate(&tied, None, &gate_from_day0(), ts(1, 0));
    assert_eq!(
        rollup.scores.get(AttachmentStyle::Secure),
        rollup.scores.get(AttachmentStyle::Anxious)
    );
    assert_eq!(rollup.primary, AttachmentStyle::Secure);
    assert_eq!(rollup.confidence, 0.0);

    // anxious 0.60 vs avoidant 0.60
    let anxious_avoidant = vec![
        tone(ts(0, 1), UiTone::Caution, 1.0, &[CategoryTag::Reassurance]),
        tone(ts(0, 2), UiTone::Caution, 1.0, &[CategoryTag::Distancing]),
    ];
    let rollup = estimator.estimate(&anxious_avoidant, None, &gate_from_day0(), ts(1, 0));
    assert_eq!(rollup.primary, AttachmentStyle::Anxious);
}

#[test]
fn withdrawal_alone_reads_avoidant() {
    let withdrawing = interaction(
        ts(0, 4),
        false,
        InteractionKind::Silence,
        CommunicationPattern::Withdrawing,
        RelationshipContext::Other,
    );
    let rollup =
        AttachmentEstimator::default().estimate(&[withdrawing], None, &gate_from_day0(), ts(1, 0));
    assert_eq!(rollup.primary, AttachmentStyle::Avoidant);
    assert!((rollup.scores.get(AttachmentStyle::Avoidant) - 1.0).abs() < 1e-12);
}

#[test]
fn prior_dominates_early_and_decays_to_zero() {
    let estimator = AttachmentEstimator::default();
    let prior = prior_for(AttachmentStyle::Avoidant, ts(0, 0));

    let none_yet = estimator.estimate(&[], Some(&prior), &gate_from_day0(), ts(0, 1));
    assert_eq!(none_yet.prior_weight, 1.0);
    assert_eq!(none_yet.primary, AttachmentStyle::Avoidant);
    assert_eq!(none_yet.confidence, 0.0);

    let three_days =
        estimator.estimate(&anxious_week(3, 1), Some(&prior), &gate_from_day0(), ts(3, 0));
    assert!((three_days.prior_weight - 4.0 / 7.0).abs() < 1e-12);
    assert!((three_days.scores.get(AttachmentStyle::Avoidant) - 4.0 / 7.0).abs() < 1e-9);
    assert_eq!(three_days.primary, AttachmentStyle::Avoidant);

    let full = estimator.estimate(&anxious_week(7, 1), Some(&prior), &gate_from_day0(), ts(7, 0));
    assert_eq!(full.prior_weight, 0.0);
    assert_eq!(full.primary, AttachmentStyle::Anxious);
    assert_eq!(full.scores.get(AttachmentStyle::Avoidant), 0.0);
}

#[test]
fn deserialized_negative_confidence_is_not_subtracted() {
    let malformed: Observation = serde_json::from_value(serde_json::json!({
        "observation": "tone",
        "timestamp": ts(0, 2),
        "ui_tone": "caution",
        "confidence": -1.0,
        "categories": ["reassurance"],
    }))
    .unwrap();
    let observations = vec![
        tone(ts(0, 1), UiTone::Caution, 1.0, &[CategoryTag::Reassurance]),
        malformed,
        tone(ts(0, 3), UiTone::Caution, 0.1, &[CategoryTag::Distancing]),
    ];
    let rollup =
        AttachmentEstimator::default().estimate(&observations, None, &gate_from_day0(), ts(1, 0));
    assert_eq!(rollup.primary, AttachmentStyle::Anxious);
    assert!(is_distribution(&rollup.scores));
}

#[test]
fn degenerate_prior_is_ignored() {
    let estimator = AttachmentEstimator::default();
    let prior = tether_core::models::Prior::new(StyleScores::zeros(), "onboarding-v1", ts(0, 0));
    let rollup = estimator.estimate(&anxious_week(1, 1), Some(&prior), &gate_from_day0(), ts(1, 0));
    assert_eq!(rollup.prior_weight, 0.0);
    assert_eq!(rollup.primary, AttachmentStyle::Anxious);
}

#[test]
fn stricter_config_raises_the_bar() {
    let config = EstimatorConfig {
        min_confirm_samples: 20,
        ..EstimatorConfig::default()
    };
    let estimator = AttachmentEstimator::new(config).unwrap();
    let rollup = estimator.estimate(&anxious_week(7, 2), None, &gate_from_day0(), ts(7, 0));
    assert!(estimator.maybe_confirm(&rollup).is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let config = EstimatorConfig {
        window_duration_days: 0,
        ..EstimatorConfig::default()
    };
    assert!(AttachmentEstimator::new(config).is_err());
}

fn observation_strategy() -> impl Strategy<Value = Observation> {
    let tones = prop::sample::select(vec![
        UiTone::Clear,
        UiTone::Caution,
        UiTone::Alert,
        UiTone::Neutral,
    ]);
    let tags = prop::sample::subsequence(
        vec![
            CategoryTag::Reassurance,
            CategoryTag::Distancing,
            CategoryTag::MixedSignals,
            CategoryTag::Unrecognized,
        ],
        0..=4,
    );
    let tone_event = (0i64..240, tones, 0.0f64..=1.0, tags)
        .prop_map(|(hour, ui_tone, confidence, tags)| {
            tone(ts(0, hour), ui_tone, confidence, &tags)
        });
    let interaction_event = (0i64..240, any::<bool>(), any::<bool>(), 0u8..3, any::<bool>())
        .prop_map(|(hour, was_accepted, silent, pattern, strained)| {
            interaction(
                ts(0, hour),
                was_accepted,
                if silent { InteractionKind::Silence } else { InteractionKind::Other },
                match pattern {
                    0 => CommunicationPattern::Pursuing,
                    1 => CommunicationPattern::Withdrawing,
                    _ => CommunicationPattern::Other,
                },
                if strained { RelationshipContext::Strained } else { RelationshipContext::Other },
            )
        });
    prop_oneof![tone_event, interaction_event]
}

proptest! {
    #[test]
    fn estimate_is_order_independent(
        (original, shuffled) in prop::collection::vec(observation_strategy(), 0..60)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let estimator = AttachmentEstimator::default();
        let prior = prior_for(AttachmentStyle::Secure, ts(0, 0));
        let a = estimator.estimate(&original, Some(&prior), &gate_from_day0(), ts(5, 0));
        let b = estimator.estimate(&shuffled, Some(&prior), &gate_from_day0(), ts(5, 0));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn estimate_is_idempotent(
        observations in prop::collection::vec(observation_strategy(), 0..60)
    ) {
        let estimator = AttachmentEstimator::default();
        let first = estimator.estimate(&observations, None, &gate_from_day0(), ts(9, 0));
        let second = estimator.estimate(&observations, None, &gate_from_day0(), ts(9, 0));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rollup_scores_are_a_distribution_or_zero(
        observations in prop::collection::vec(observation_strategy(), 0..60)
    ) {
        let rollup = AttachmentEstimator::default()
            .estimate(&observations, None, &gate_from_day0(), ts(9, 0));
        prop_assert!(rollup.scores.is_zero() || is_distribution(&rollup.scores));
        prop_assert!((0.0..=1.0).contains(&rollup.confidence));
        prop_assert!(rollup.days_observed <= 7);
    }

    #[test]
    fn confidence_never_drops_with_more_samples(
        raw in prop::collection::vec(0.0f64..10.0, 4),
        n in 0u32..1_000,
        extra in 0u32..1_000,
    ) {
        let scores = normalize(&StyleScores::from_pairs([
            (AttachmentStyle::Secure, raw[0]),
            (AttachmentStyle::Anxious, raw[1]),
            (AttachmentStyle::Avoidant, raw[2]),
            (AttachmentStyle::Disorganized, raw[3]),
        ]));
        prop_assert!(compute_confidence(&scores, n) <= compute_confidence(&scores, n + extra));
    }

    #[test]
    fn confidence_never_drops_with_wider_margin(
        narrow in 0.0f64..=0.5,
        widen in 0.0f64..=0.5,
        n in 0u32..1_000,
    ) {
        let wide = (narrow + widen).min(0.5);
        let split = |d: f64| {
            StyleScores::from_pairs([
                (AttachmentStyle::Secure, 0.5 + d),
                (AttachmentStyle::Anxious, 0.5 - d),
            ])
        };
        prop_assert!(compute_confidence(&split(narrow), n) <= compute_confidence(&split(wide), n));
    }
}
