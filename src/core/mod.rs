pub mod errors;

use crate::platform::Platform;
use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordinal weight of a risk indicator, used for sorting, capping and styling.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Derive a severity from a score delta when the outcome table does not
    /// carry one explicitly. Mirrors the account-age weighting: deltas of 15+
    /// are strong evidence, 8+ moderate, anything below is weak.
    pub fn from_delta(delta: i32) -> Self {
        match delta {
            d if d >= 15 => Severity::High,
            d if d >= 8 => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Severity, &str)] = &[
            (Severity::Low, "low"),
            (Severity::Medium, "medium"),
            (Severity::High, "high"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(s, _)| s == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{display_str}")
    }
}

/// A single piece of risk-raising evidence. Immutable once recorded;
/// list ordering is insertion order unless explicitly re-sorted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Indicator {
    pub description: String,
    pub severity: Severity,
}

/// Outcome of evaluating one signal dimension. A positive delta raises the
/// risk score and records an indicator, a negative delta is exonerating and
/// records a positive indicator, a zero delta records nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalOutcome {
    pub description: String,
    pub delta: i32,
    pub severity: Option<Severity>,
}

impl SignalOutcome {
    pub fn new(description: impl Into<String>, delta: i32, severity: Option<Severity>) -> Self {
        Self {
            description: description.into(),
            delta,
            severity,
        }
    }
}

/// Synthetic fake/genuine label drawn before signal generation in simulation
/// mode. Absent when the analysis runs on observed profile attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundTruth {
    Genuine,
    Fake,
}

/// Coarse account-age classification. `Recent` (under 30 days) triggers the
/// accumulator's age bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Recent,
    Developing,
    Established,
    Unknown,
}

impl AgeBucket {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 30 => AgeBucket::Recent,
            d if d < 365 => AgeBucket::Developing,
            _ => AgeBucket::Established,
        }
    }
}

/// Final risk classification for a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Unknown,
    VeryLow,
    Low,
    Moderate,
    High,
    /// Assigned only when the analysis pipeline itself failed and the result
    /// was downgraded to a neutral score.
    Error,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Unknown => "Unknown",
            RiskTier::VeryLow => "VERY LOW RISK",
            RiskTier::Low => "LOW RISK",
            RiskTier::Moderate => "MODERATE RISK",
            RiskTier::High => "HIGH RISK",
            RiskTier::Error => "Analysis Error",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complete result of one profile analysis. Created fresh per uncached
/// request, mutated only during the single synchronous analysis pass, then
/// frozen behind an `Arc` in the result cache.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileReport {
    pub profile_url: String,
    pub platform: Platform,
    pub indicators: Vector<Indicator>,
    pub positive_indicators: Vector<String>,
    pub key_indicators: Vector<Indicator>,
    pub score: u32,
    pub risk_tier: RiskTier,
    pub recommendation: String,
    pub verification_status: String,
    pub account_age: String,
    pub age_bucket: AgeBucket,
    pub follower_ratio: String,
    pub post_count: String,
    pub name_consistency: String,
    pub activity_pattern: String,
    pub account_privacy: String,
    pub image_authenticity: String,
    pub reverse_image_match: String,
    pub timestamp: DateTime<Utc>,
}

impl ProfileReport {
    pub fn new(profile_url: impl Into<String>, platform: Platform) -> Self {
        Self {
            profile_url: profile_url.into(),
            platform,
            indicators: Vector::new(),
            positive_indicators: Vector::new(),
            key_indicators: Vector::new(),
            score: 0,
            risk_tier: RiskTier::Unknown,
            recommendation: "Further verification needed".to_string(),
            verification_status: "Unknown".to_string(),
            account_age: "Unknown".to_string(),
            age_bucket: AgeBucket::Unknown,
            follower_ratio: "Unknown".to_string(),
            post_count: "Unknown".to_string(),
            name_consistency: "Not checked".to_string(),
            activity_pattern: "Not analyzed".to_string(),
            account_privacy: "Unknown".to_string(),
            image_authenticity: "Not analyzed".to_string(),
            reverse_image_match: "Not performed".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Fold one signal outcome into the report. Positive deltas become risk
    /// indicators, negative deltas exonerating evidence; both adjust the
    /// running total. Zero-delta outcomes leave no trace.
    pub fn apply_outcome(&mut self, running: &mut i32, outcome: SignalOutcome) {
        match outcome.delta {
            d if d > 0 => {
                let severity = outcome.severity.unwrap_or_else(|| Severity::from_delta(d));
                self.indicators.push_back(Indicator {
                    description: outcome.description,
                    severity,
                });
                *running += d;
            }
            d if d < 0 => {
                self.positive_indicators.push_back(outcome.description);
                *running += d;
            }
            _ => {}
        }
    }

    pub fn push_positive(&mut self, description: impl Into<String>) {
        self.positive_indicators.push_back(description.into());
    }

    pub fn high_severity_count(&self) -> usize {
        self.indicators
            .iter()
            .filter(|i| i.severity == Severity::High)
            .count()
    }
}
