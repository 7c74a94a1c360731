//! Detection heuristics configuration.
//!
//! All pattern and keyword lists are externally supplied data, not
//! hardcoded logic: deployments tune them without touching the evaluators.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Base probability that a simulated profile is fake.
    #[serde(default = "default_fake_probability")]
    pub base_fake_probability: f64,

    /// Regex patterns matched (case-insensitively) against observed
    /// usernames.
    #[serde(default = "default_suspicious_username_patterns")]
    pub suspicious_username_patterns: Vec<String>,

    /// Keywords matched against observed bios.
    #[serde(default = "default_spam_keywords")]
    pub spam_keywords: Vec<String>,

    /// Content hashes of known default/stock profile pictures.
    #[serde(default)]
    pub known_default_image_hashes: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            base_fake_probability: default_fake_probability(),
            suspicious_username_patterns: default_suspicious_username_patterns(),
            spam_keywords: default_spam_keywords(),
            known_default_image_hashes: Vec::new(),
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.base_fake_probability) {
            return Err(format!(
                "base_fake_probability must be within [0, 1], got {}",
                self.base_fake_probability
            ));
        }
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: DetectionPreset) {
        self.base_fake_probability = preset.base_fake_probability();
    }
}

/// Deployment-mode presets for the simulated fake-account rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionPreset {
    /// Demo deployments: most profiles come back genuine.
    Demo,
    /// Field-calibrated rate for suspicious-traffic deployments.
    Realistic,
}

impl DetectionPreset {
    pub fn base_fake_probability(self) -> f64 {
        match self {
            DetectionPreset::Demo => 0.1,
            DetectionPreset::Realistic => 0.3,
        }
    }
}

pub(crate) fn default_fake_probability() -> f64 {
    DetectionPreset::Demo.base_fake_probability()
}

pub(crate) fn default_suspicious_username_patterns() -> Vec<String> {
    [
        r"^[a-z]+\d{4,}$",
        r"(free|win|promo|offer)",
        r"official.*\d+",
        r"_{2,}",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub(crate) fn default_spam_keywords() -> Vec<String> {
    [
        "follow back",
        "free followers",
        "click the link",
        "dm for promo",
        "giveaway",
        "crypto signals",
        "earn from home",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
