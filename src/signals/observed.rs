//! Observed-attribute signal evaluation.
//!
//! Runs when a data source produced a populated attribute bag. Outcomes are
//! derived from fixed thresholds over the observed values instead of being
//! sampled, so there is no ground truth and no randomness on this path.

use crate::config::DetectionConfig;
use crate::core::errors::{ProfilemapError, Result};
use crate::core::{AgeBucket, ProfileReport, Severity, SignalOutcome};
use crate::source::ProfileAttributes;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

static RANDOM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]{8,}").expect("valid random-run pattern"));
static VOWEL_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]{2,}").expect("valid vowel pattern"));
static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3,}$").expect("valid digit pattern"));
static LINK_SHORTENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(bit\.ly|goo\.gl|tinyurl|ow\.ly)").expect("valid shortener pattern")
});

/// Derive all signal outcomes from an observed attribute bag.
pub fn evaluate(
    report: &mut ProfileReport,
    running: &mut i32,
    attrs: &ProfileAttributes,
    rules: &DetectionConfig,
) -> Result<()> {
    evaluate_account_age(report, running, attrs);
    evaluate_privacy(report, running, attrs);
    evaluate_post_count(report, running, attrs);
    evaluate_follower_ratio(report, running, attrs);
    evaluate_username(report, running, attrs, rules)?;
    evaluate_bio(report, running, attrs, rules);
    evaluate_profile_image(report, running, attrs, rules);
    Ok(())
}

fn evaluate_account_age(report: &mut ProfileReport, running: &mut i32, attrs: &ProfileAttributes) {
    let Some(created) = attrs.account_created else {
        return;
    };
    let days = (Utc::now() - created).num_days().max(0);
    report.account_age = format_age(days);
    report.age_bucket = AgeBucket::from_days(days);

    if days < 30 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Account is very new ({})", report.account_age),
                20,
                Some(Severity::High),
            ),
        );
    } else if days < 180 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Account is relatively new ({})", report.account_age),
                10,
                Some(Severity::Medium),
            ),
        );
    } else {
        report.push_positive(format!("Account is established ({})", report.account_age));
    }
}

fn evaluate_privacy(report: &mut ProfileReport, running: &mut i32, attrs: &ProfileAttributes) {
    let Some(private) = attrs.is_private else {
        return;
    };
    report.account_privacy = if private { "Private" } else { "Public" }.to_string();
    if private {
        report.apply_outcome(
            running,
            SignalOutcome::new("Account is private", 10, Some(Severity::Medium)),
        );
    }
}

fn evaluate_post_count(report: &mut ProfileReport, running: &mut i32, attrs: &ProfileAttributes) {
    let Some(posts) = attrs.post_count else {
        return;
    };
    report.post_count = format!("{posts} posts");

    if posts < 10 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Very few posts ({posts})"),
                15,
                Some(Severity::High),
            ),
        );
    } else if posts < 50 {
        report.apply_outcome(
            running,
            SignalOutcome::new(format!("Few posts ({posts})"), 8, Some(Severity::Medium)),
        );
    } else {
        report.push_positive(format!("Reasonable post count ({posts})"));
    }
}

fn evaluate_follower_ratio(
    report: &mut ProfileReport,
    running: &mut i32,
    attrs: &ProfileAttributes,
) {
    let (Some(followers), Some(following)) = (attrs.follower_count, attrs.following_count) else {
        return;
    };
    report.follower_ratio = format!("{followers} followers / {following} following");

    if followers == 0 || following == 0 {
        return;
    }
    let ratio = following as f64 / followers as f64;

    if ratio > 10.0 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Following {following} accounts but only {followers} followers"),
                15,
                Some(Severity::High),
            ),
        );
    } else if ratio > 3.0 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Following many more accounts ({following}) than followers ({followers})"),
                10,
                Some(Severity::Medium),
            ),
        );
    } else if ratio < 0.1 {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                format!("Many followers ({followers}) but following very few ({following})"),
                8,
                Some(Severity::Medium),
            ),
        );
    } else {
        report.push_positive(format!(
            "Balanced follower ratio ({followers} followers, {following} following)"
        ));
    }
}

fn evaluate_username(
    report: &mut ProfileReport,
    running: &mut i32,
    attrs: &ProfileAttributes,
    rules: &DetectionConfig,
) -> Result<()> {
    let Some(username) = attrs.username.as_deref() else {
        return Ok(());
    };

    for pattern in &rules.suspicious_username_patterns {
        let re = Regex::new(&format!("(?i){pattern}")).map_err(|e| {
            ProfilemapError::config(format!("invalid suspicious username pattern '{pattern}': {e}"))
        })?;
        if re.is_match(username) {
            report.apply_outcome(
                running,
                SignalOutcome::new(
                    format!("Suspicious username pattern: '{pattern}'"),
                    15,
                    Some(Severity::Medium),
                ),
            );
            break;
        }
    }

    let lowered = username.to_lowercase();
    if RANDOM_RUN.is_match(&lowered) && !VOWEL_PAIR.is_match(&lowered) {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                "Username appears randomly generated",
                10,
                Some(Severity::Medium),
            ),
        );
    }

    if TRAILING_DIGITS.is_match(username) {
        report.apply_outcome(
            running,
            SignalOutcome::new(
                "Username ends with multiple numbers",
                5,
                Some(Severity::Low),
            ),
        );
    }

    Ok(())
}

fn evaluate_bio(
    report: &mut ProfileReport,
    running: &mut i32,
    attrs: &ProfileAttributes,
    rules: &DetectionConfig,
) {
    if let Some(bio) = attrs.bio.as_deref() {
        if bio.trim().is_empty() {
            report.apply_outcome(
                running,
                SignalOutcome::new("Empty bio", 5, Some(Severity::Low)),
            );
        }

        let lowered = bio.to_lowercase();
        for keyword in &rules.spam_keywords {
            if lowered.contains(&keyword.to_lowercase()) {
                report.apply_outcome(
                    running,
                    SignalOutcome::new(
                        format!("Bio contains suspicious keyword: '{keyword}'"),
                        10,
                        Some(Severity::Medium),
                    ),
                );
                break;
            }
        }

        if LINK_SHORTENER.is_match(bio) {
            report.apply_outcome(
                running,
                SignalOutcome::new("Bio contains URL shortener", 15, Some(Severity::High)),
            );
        }
    }

    if let Some(full_name) = attrs.full_name.as_deref() {
        if full_name.split_whitespace().count() < 2 {
            report.apply_outcome(
                running,
                SignalOutcome::new("Full name appears incomplete", 5, Some(Severity::Low)),
            );
        }
    }
}

/// Mocked image-characteristics check: a data source may supply a content
/// hash for the profile picture, which is matched against the configured
/// known default/stock image hashes. No image is ever fetched or decoded.
fn evaluate_profile_image(
    report: &mut ProfileReport,
    running: &mut i32,
    attrs: &ProfileAttributes,
    rules: &DetectionConfig,
) {
    let Some(hash) = attrs.profile_image_hash.as_deref() else {
        return;
    };
    let known = rules
        .known_default_image_hashes
        .iter()
        .any(|h| h.eq_ignore_ascii_case(hash));
    if known {
        report.image_authenticity = "Default/stock profile photo".to_string();
        report.apply_outcome(
            running,
            SignalOutcome::new(
                "Default/stock profile photo detected",
                20,
                Some(Severity::High),
            ),
        );
    }
}

fn format_age(days: i64) -> String {
    let years = days / 365;
    let rem = days % 365;
    let months = rem / 30;
    let rem_days = rem % 30;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} year{}", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!(
            "{} month{}",
            months,
            if months > 1 { "s" } else { "" }
        ));
    }
    if rem_days > 0 && years == 0 {
        parts.push(format!(
            "{} day{}",
            rem_days,
            if rem_days > 1 { "s" } else { "" }
        ));
    }

    if parts.is_empty() {
        "less than 1 day".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn evaluate_attrs(attrs: &ProfileAttributes) -> (ProfileReport, i32) {
        let mut report = ProfileReport::new(
            "https://example.com/p",
            crate::platform::Platform::Other,
        );
        let mut running = 0;
        evaluate(&mut report, &mut running, attrs, &DetectionConfig::default()).unwrap();
        (report, running)
    }

    #[test]
    fn test_very_new_account_is_high_severity() {
        let attrs = ProfileAttributes {
            account_created: Some(Utc::now() - Duration::days(5)),
            ..Default::default()
        };
        let (report, running) = evaluate_attrs(&attrs);
        assert_eq!(running, 20);
        assert_eq!(report.age_bucket, AgeBucket::Recent);
        assert_eq!(report.indicators[0].severity, Severity::High);
    }

    #[test]
    fn test_established_account_is_exonerating() {
        let attrs = ProfileAttributes {
            account_created: Some(Utc::now() - Duration::days(800)),
            ..Default::default()
        };
        let (report, running) = evaluate_attrs(&attrs);
        assert_eq!(running, 0);
        assert!(report.indicators.is_empty());
        assert_eq!(report.positive_indicators.len(), 1);
        assert!(report.positive_indicators[0].contains("established"));
    }

    #[test]
    fn test_follower_ratio_thresholds() {
        let cases = [
            (100u64, 2000u64, 15), // ratio 20, high penalty
            (100, 500, 10),        // ratio 5, medium
            (5000, 100, 8),        // ratio 0.02, medium
            (100, 150, 0),         // balanced, positive
        ];
        for (followers, following, expected) in cases {
            let attrs = ProfileAttributes {
                follower_count: Some(followers),
                following_count: Some(following),
                ..Default::default()
            };
            let (_, running) = evaluate_attrs(&attrs);
            assert_eq!(running, expected, "followers={followers} following={following}");
        }
    }

    #[test]
    fn test_post_count_thresholds() {
        for (posts, expected) in [(3u64, 15), (30, 8), (200, 0)] {
            let attrs = ProfileAttributes {
                post_count: Some(posts),
                ..Default::default()
            };
            let (report, running) = evaluate_attrs(&attrs);
            assert_eq!(running, expected);
            assert_eq!(report.post_count, format!("{posts} posts"));
        }
    }

    #[test]
    fn test_random_username_heuristics() {
        let attrs = ProfileAttributes {
            username: Some("xkqzrtw9p4".to_string()),
            ..Default::default()
        };
        let (report, _) = evaluate_attrs(&attrs);
        assert!(report
            .indicators
            .iter()
            .any(|i| i.description == "Username appears randomly generated"));
    }

    #[test]
    fn test_trailing_digits_username() {
        let attrs = ProfileAttributes {
            username: Some("jane123456".to_string()),
            ..Default::default()
        };
        let (report, _) = evaluate_attrs(&attrs);
        assert!(report
            .indicators
            .iter()
            .any(|i| i.description == "Username ends with multiple numbers"));
    }

    #[test]
    fn test_bio_shortener_is_high_severity() {
        let attrs = ProfileAttributes {
            bio: Some("check my page bit.ly/xyz".to_string()),
            ..Default::default()
        };
        let (report, running) = evaluate_attrs(&attrs);
        assert_eq!(running, 15);
        assert_eq!(report.indicators[0].severity, Severity::High);
    }

    #[test]
    fn test_spam_keyword_match() {
        let attrs = ProfileAttributes {
            bio: Some("FREE FOLLOWERS for everyone".to_string()),
            ..Default::default()
        };
        let (report, _) = evaluate_attrs(&attrs);
        assert!(report
            .indicators
            .iter()
            .any(|i| i.description.contains("suspicious keyword")));
    }

    #[test]
    fn test_single_word_full_name() {
        let attrs = ProfileAttributes {
            full_name: Some("Cher".to_string()),
            ..Default::default()
        };
        let (report, running) = evaluate_attrs(&attrs);
        assert_eq!(running, 5);
        assert_eq!(report.indicators[0].description, "Full name appears incomplete");
    }

    #[test]
    fn test_known_default_image_hash() {
        let mut rules = DetectionConfig::default();
        rules.known_default_image_hashes = vec!["ABCDEF0123".to_string()];
        let attrs = ProfileAttributes {
            profile_image_hash: Some("abcdef0123".to_string()),
            ..Default::default()
        };
        let mut report = ProfileReport::new(
            "https://example.com/p",
            crate::platform::Platform::Other,
        );
        let mut running = 0;
        evaluate(&mut report, &mut running, &attrs, &rules).unwrap();
        assert_eq!(running, 20);
        assert_eq!(report.image_authenticity, "Default/stock profile photo");
    }

    #[test]
    fn test_invalid_configured_pattern_is_an_error() {
        let mut rules = DetectionConfig::default();
        rules.suspicious_username_patterns = vec!["(unclosed".to_string()];
        let attrs = ProfileAttributes {
            username: Some("whoever".to_string()),
            ..Default::default()
        };
        let mut report = ProfileReport::new(
            "https://example.com/p",
            crate::platform::Platform::Other,
        );
        let mut running = 0;
        assert!(evaluate(&mut report, &mut running, &attrs, &rules).is_err());
    }

    #[test]
    fn test_format_age_humanizes() {
        assert_eq!(format_age(0), "less than 1 day");
        assert_eq!(format_age(5), "5 days");
        assert_eq!(format_age(45), "1 month, 15 days");
        assert_eq!(format_age(400), "1 year, 1 month");
    }
}
