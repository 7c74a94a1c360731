//! Score-to-verdict classification and key-indicator selection.

use crate::core::{Indicator, ProfileReport, RiskTier, Severity};
use im::Vector;

pub const HIGH_RISK_MIN: u32 = 70;
pub const MODERATE_RISK_MIN: u32 = 50;
pub const LOW_RISK_MIN: u32 = 30;

/// Hard cap on the key-indicator summary.
pub const KEY_INDICATOR_LIMIT: usize = 5;

const KEY_HIGH_CAP: usize = 2;
const KEY_MEDIUM_CAP: usize = 2;
const KEY_LOW_CAP: usize = 1;

pub fn tier_for_score(score: u32) -> RiskTier {
    match score {
        s if s >= HIGH_RISK_MIN => RiskTier::High,
        s if s >= MODERATE_RISK_MIN => RiskTier::Moderate,
        s if s >= LOW_RISK_MIN => RiskTier::Low,
        _ => RiskTier::VeryLow,
    }
}

pub fn recommendation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "Very likely fake - avoid interaction",
        RiskTier::Moderate => "Shows multiple fake indicators - proceed with caution",
        RiskTier::Low => "Some suspicious elements - verify before trusting",
        RiskTier::VeryLow => "Appears genuine - normal precautions recommended",
        RiskTier::Error => "Analysis incomplete - verify manually",
        RiskTier::Unknown => "Further verification needed",
    }
}

/// Confidence-of-genuineness displayed alongside the score.
pub fn confidence(score: u32) -> u32 {
    100u32.saturating_sub(score.min(100))
}

/// Select the headline evidence: up to 2 high + 2 medium + 1 low severity
/// indicators, in that order, hard-truncated to the overall limit. The cap
/// sequence guarantees severity diversity instead of letting one level
/// dominate the summary.
pub fn select_key_indicators(indicators: &Vector<Indicator>) -> Vector<Indicator> {
    let of_severity = |severity: Severity, cap: usize| {
        indicators
            .iter()
            .filter(move |i| i.severity == severity)
            .take(cap)
            .cloned()
    };

    of_severity(Severity::High, KEY_HIGH_CAP)
        .chain(of_severity(Severity::Medium, KEY_MEDIUM_CAP))
        .chain(of_severity(Severity::Low, KEY_LOW_CAP))
        .take(KEY_INDICATOR_LIMIT)
        .collect()
}

/// Fill in the verdict fields of a scored report.
pub fn classify(report: &mut ProfileReport) {
    report.risk_tier = tier_for_score(report.score);
    report.recommendation = recommendation(report.risk_tier).to_string();
    report.key_indicators = select_key_indicators(&report.indicators);
}
