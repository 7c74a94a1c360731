use im::Vector;
use profilemap::{
    finalize_score, select_key_indicators, AgeBucket, GroundTruth, Indicator, Platform,
    ProfileReport, Severity,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
    ]
}

fn truth_strategy() -> impl Strategy<Value = Option<GroundTruth>> {
    prop_oneof![
        Just(None),
        Just(Some(GroundTruth::Genuine)),
        Just(Some(GroundTruth::Fake)),
    ]
}

fn report_with(severities: &[Severity], recent: bool, verified: bool) -> ProfileReport {
    let mut report = ProfileReport::new("https://example.com/p", Platform::Other);
    for (i, severity) in severities.iter().enumerate() {
        report.indicators.push_back(Indicator {
            description: format!("indicator {i}"),
            severity: *severity,
        });
    }
    if recent {
        report.age_bucket = AgeBucket::Recent;
    }
    if verified {
        report.verification_status = "Verified".to_string();
    }
    report
}

proptest! {
    #[test]
    fn prop_final_score_is_always_bounded(
        running in -300i32..400,
        severities in prop::collection::vec(severity_strategy(), 0..12),
        recent in any::<bool>(),
        verified in any::<bool>(),
        truth in truth_strategy(),
        seed in any::<u64>(),
    ) {
        let report = report_with(&severities, recent, verified);
        let mut rng = StdRng::seed_from_u64(seed);
        let score = finalize_score(running, &report, truth, &mut rng);
        prop_assert!(score <= 100);
    }

    #[test]
    fn prop_ground_truth_separates_score_ranges(
        running in -300i32..400,
        severities in prop::collection::vec(severity_strategy(), 0..12),
        recent in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let report = report_with(&severities, recent, false);
        let mut rng = StdRng::seed_from_u64(seed);

        let fake = finalize_score(running, &report, Some(GroundTruth::Fake), &mut rng);
        prop_assert!((50..=100).contains(&fake));

        let genuine = finalize_score(running, &report, Some(GroundTruth::Genuine), &mut rng);
        prop_assert!(genuine <= 50);
    }

    #[test]
    fn prop_key_indicators_obey_cap_rule(
        severities in prop::collection::vec(severity_strategy(), 0..20),
    ) {
        let indicators: Vector<Indicator> = severities
            .iter()
            .enumerate()
            .map(|(i, severity)| Indicator {
                description: format!("indicator {i}"),
                severity: *severity,
            })
            .collect();

        let key = select_key_indicators(&indicators);

        let count = |s: Severity| key.iter().filter(|i| i.severity == s).count();
        let available = |s: Severity| indicators.iter().filter(|i| i.severity == s).count();

        prop_assert!(key.len() <= 5);
        prop_assert_eq!(count(Severity::High), available(Severity::High).min(2));
        prop_assert_eq!(count(Severity::Medium), available(Severity::Medium).min(2));
        prop_assert_eq!(count(Severity::Low), available(Severity::Low).min(1));

        // Ordering: high block, then medium, then low.
        let ranks: Vec<u8> = key
            .iter()
            .map(|i| match i.severity {
                Severity::High => 0,
                Severity::Medium => 1,
                Severity::Low => 2,
            })
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        prop_assert_eq!(ranks, sorted);
    }

    #[test]
    fn prop_key_indicators_are_a_subset(
        severities in prop::collection::vec(severity_strategy(), 0..20),
    ) {
        let indicators: Vector<Indicator> = severities
            .iter()
            .enumerate()
            .map(|(i, severity)| Indicator {
                description: format!("indicator {i}"),
                severity: *severity,
            })
            .collect();

        let key = select_key_indicators(&indicators);
        for indicator in &key {
            prop_assert!(indicators.iter().any(|i| i == indicator));
        }
    }
}
