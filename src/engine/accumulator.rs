//! Final score accumulation.
//!
//! Takes the running sum of all signal deltas and applies the cross-cutting
//! adjustments in a fixed order: clamp, age bonus, high-severity
//! escalation, verification bonus, re-clamp, then either the ground-truth
//! range separation (simulation) or symmetric jitter (observed data).

use crate::core::{AgeBucket, GroundTruth, ProfileReport, Severity};
use rand::Rng;

/// Extra penalty for accounts in the `Recent` bucket when the ground truth
/// is fake.
pub const RECENT_AGE_BONUS_FAKE: i32 = 20;

/// Extra penalty for `Recent` accounts otherwise (genuine ground truth or
/// observed data).
pub const RECENT_AGE_BONUS: i32 = 5;

/// Per-indicator escalation applied once two or more high-severity
/// indicators compound.
pub const HIGH_SEVERITY_ESCALATION: i32 = 5;

/// Score reduction when the profile carries a verified status.
pub const VERIFICATION_BONUS: i32 = 30;

/// Magnitude of the symmetric jitter applied on the observed-data path.
pub const OBSERVED_JITTER: i32 = 5;

/// Finalize a running delta sum into the bounded 0-100 score.
pub fn finalize_score<R: Rng + ?Sized>(
    running: i32,
    report: &ProfileReport,
    truth: Option<GroundTruth>,
    rng: &mut R,
) -> u32 {
    let mut score = running.clamp(0, 100);

    if report.age_bucket == AgeBucket::Recent {
        let bonus = match truth {
            Some(GroundTruth::Fake) => RECENT_AGE_BONUS_FAKE,
            _ => RECENT_AGE_BONUS,
        };
        score = (score + bonus).min(100);
    }

    let high_count = report
        .indicators
        .iter()
        .filter(|i| i.severity == Severity::High)
        .count() as i32;
    if high_count >= 2 {
        score = (score + HIGH_SEVERITY_ESCALATION * high_count).min(100);
    }

    if report
        .verification_status
        .to_lowercase()
        .contains("verified")
    {
        score = (score - VERIFICATION_BONUS).max(0);
    }

    score = score.clamp(0, 100);

    let score = match truth {
        // Simulation knows the answer and renders plausible evidence for it:
        // fake accounts land in the upper half, genuine in the lower.
        Some(GroundTruth::Fake) => score.clamp(50, 100),
        Some(GroundTruth::Genuine) => score.clamp(0, 50),
        // Observed data has no privileged answer; emulate measurement noise.
        None => (score + rng.gen_range(-OBSERVED_JITTER..=OBSERVED_JITTER)).clamp(0, 100),
    };

    score as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Indicator, SignalOutcome};
    use crate::platform::Platform;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn report() -> ProfileReport {
        ProfileReport::new("https://example.com/p", Platform::Other)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_verification_bonus() {
        let mut r = report();
        r.verification_status = "Verified".to_string();
        let score = finalize_score(60, &r, Some(GroundTruth::Genuine), &mut rng());
        assert_eq!(score, 30);
    }

    #[test]
    fn test_default_status_does_not_trip_verification() {
        let r = report();
        assert_eq!(r.verification_status, "Unknown");
        let score = finalize_score(60, &r, Some(GroundTruth::Fake), &mut rng());
        assert_eq!(score, 60);
    }

    #[test]
    fn test_high_severity_escalation() {
        let mut r = report();
        for desc in ["a", "b", "c"] {
            r.indicators.push_back(Indicator {
                description: desc.to_string(),
                severity: Severity::High,
            });
        }
        let score = finalize_score(40, &r, Some(GroundTruth::Fake), &mut rng());
        assert_eq!(score, 55);
    }

    #[test]
    fn test_single_high_indicator_does_not_escalate() {
        let mut r = report();
        r.indicators.push_back(Indicator {
            description: "a".to_string(),
            severity: Severity::High,
        });
        let score = finalize_score(60, &r, Some(GroundTruth::Fake), &mut rng());
        assert_eq!(score, 60);
    }

    #[test]
    fn test_recent_age_bonus_depends_on_truth() {
        let mut r = report();
        r.age_bucket = AgeBucket::Recent;
        assert_eq!(finalize_score(50, &r, Some(GroundTruth::Fake), &mut rng()), 70);
        assert_eq!(
            finalize_score(20, &r, Some(GroundTruth::Genuine), &mut rng()),
            25
        );
    }

    #[test]
    fn test_ground_truth_range_separation() {
        let r = report();
        assert_eq!(finalize_score(10, &r, Some(GroundTruth::Fake), &mut rng()), 50);
        assert_eq!(
            finalize_score(90, &r, Some(GroundTruth::Genuine), &mut rng()),
            50
        );
        assert_eq!(finalize_score(-40, &r, Some(GroundTruth::Fake), &mut rng()), 50);
    }

    #[test]
    fn test_observed_jitter_stays_in_bounds() {
        let r = report();
        let mut rng = rng();
        for running in [-50, 0, 3, 50, 98, 100, 400] {
            for _ in 0..50 {
                let score = finalize_score(running, &r, None, &mut rng);
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn test_negative_running_sum_clamps_to_zero() {
        let r = report();
        let score = finalize_score(-30, &r, Some(GroundTruth::Genuine), &mut rng());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_applies_after_outcome_fold() {
        // End-to-end shape: outcomes fold into a running sum, the
        // accumulator finalizes it.
        let mut r = report();
        let mut running = 0;
        r.apply_outcome(
            &mut running,
            SignalOutcome::new("Very few posts", 15, Some(Severity::High)),
        );
        r.apply_outcome(
            &mut running,
            SignalOutcome::new("Account is established", -5, None),
        );
        let score = finalize_score(running, &r, Some(GroundTruth::Genuine), &mut rng());
        assert_eq!(score, 10);
    }
}
