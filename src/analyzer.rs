//! Analysis orchestrator.
//!
//! Owns the full pipeline: validate and normalize the identifier, detect
//! the platform, fetch observed attributes or draw a ground truth and
//! simulate, accumulate the score, classify, cache. The orchestrator is the
//! only component with side effects (randomness, cache writes, the bounded
//! data-source call), and no pipeline error escapes it: failures downgrade
//! to a neutral-score report that is cached like any other.

use crate::cache::{cache_key, CacheStats, ResultCache};
use crate::config::ProfilemapConfig;
use crate::core::errors::{ProfilemapError, Result};
use crate::core::{GroundTruth, Indicator, ProfileReport, RiskTier, Severity};
use crate::engine::{self, verdict};
use crate::platform::{detect_platform, host_of, Platform, PlatformHint};
use crate::signals::{observed, simulate};
use crate::source::{fetch_bounded, ProfileDataSource, FETCH_TIMEOUT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Neutral score assigned when the pipeline itself fails.
pub const ERROR_FALLBACK_SCORE: u32 = 40;

pub struct Analyzer {
    config: ProfilemapConfig,
    cache: ResultCache,
    data_source: Option<Arc<dyn ProfileDataSource>>,
}

impl Analyzer {
    pub fn new(config: ProfilemapConfig) -> Self {
        let cache = ResultCache::new(config.cache_capacity());
        Self {
            config,
            cache,
            data_source: None,
        }
    }

    /// Attach an observed-attribute data source.
    pub fn with_data_source(mut self, source: Arc<dyn ProfileDataSource>) -> Self {
        self.data_source = Some(source);
        self
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Analyze a profile. Repeated calls with the same identifier return
    /// the cached report unchanged.
    pub fn analyze(&self, url: &str, hint: PlatformHint) -> Result<Arc<ProfileReport>> {
        let normalized = normalize_profile_url(url)?;
        let mut rng = StdRng::from_entropy();
        Ok(self.analyze_with_rng(&normalized, hint, &mut rng))
    }

    /// Analyze with a fixed seed for reproducible simulation outcomes.
    pub fn analyze_seeded(
        &self,
        url: &str,
        hint: PlatformHint,
        seed: u64,
    ) -> Result<Arc<ProfileReport>> {
        let normalized = normalize_profile_url(url)?;
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(self.analyze_with_rng(&normalized, hint, &mut rng))
    }

    fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        normalized: &str,
        hint: PlatformHint,
        rng: &mut R,
    ) -> Arc<ProfileReport> {
        let key = cache_key(normalized);
        self.cache.get_or_compute(&key, || {
            let platform = detect_platform(normalized, hint);
            let report = match self.run_pipeline(normalized, platform, rng) {
                Ok(report) => report,
                Err(e) => {
                    log::warn!("analysis of {normalized} failed: {e}");
                    error_report(normalized, platform, &e)
                }
            };
            log::info!(
                "analyzed {normalized}: platform={platform} score={} tier={}",
                report.score,
                report.risk_tier
            );
            Arc::new(report)
        })
    }

    fn run_pipeline<R: Rng + ?Sized>(
        &self,
        url: &str,
        platform: Platform,
        rng: &mut R,
    ) -> Result<ProfileReport> {
        let mut report = ProfileReport::new(url, platform);
        let mut running = 0i32;
        let detection = self.config.detection();

        let attrs = self
            .data_source
            .as_ref()
            .and_then(|source| fetch_bounded(source, url, platform, FETCH_TIMEOUT));

        let truth = match attrs {
            Some(attrs) => {
                observed::evaluate(&mut report, &mut running, &attrs, &detection)?;
                None
            }
            None => {
                let fake_probability = detection.base_fake_probability.clamp(0.0, 1.0);
                let truth = if rng.gen_bool(fake_probability) {
                    GroundTruth::Fake
                } else {
                    GroundTruth::Genuine
                };
                simulate::evaluate(&mut report, &mut running, truth, rng);
                Some(truth)
            }
        };

        report.score = engine::finalize_score(running, &report, truth, rng);
        verdict::classify(&mut report);
        Ok(report)
    }
}

/// Validate and normalize a raw profile identifier. Trims whitespace,
/// prepends `https://` when no scheme is present, and rejects identifiers
/// without a plausible host.
pub fn normalize_profile_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ProfilemapError::invalid_input("profile URL is empty"));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let host = host_of(&with_scheme)
        .ok_or_else(|| ProfilemapError::invalid_input(format!("no host in '{trimmed}'")))?;
    let valid_host = host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
    if !valid_host {
        return Err(ProfilemapError::invalid_input(format!(
            "malformed host '{host}'"
        )));
    }

    Ok(with_scheme)
}

fn error_report(url: &str, platform: Platform, error: &ProfilemapError) -> ProfileReport {
    let mut report = ProfileReport::new(url, platform);
    report.indicators.push_back(Indicator {
        description: format!("Analysis error: {error}"),
        severity: Severity::Medium,
    });
    report.score = ERROR_FALLBACK_SCORE;
    report.risk_tier = RiskTier::Error;
    report.recommendation = verdict::recommendation(RiskTier::Error).to_string();
    report.key_indicators = verdict::select_key_indicators(&report.indicators);
    report
}
