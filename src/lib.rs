// Export modules for library usage
pub mod analyzer;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod formatting;
pub mod io;
pub mod platform;
pub mod signals;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    AgeBucket, GroundTruth, Indicator, ProfileReport, RiskTier, Severity, SignalOutcome,
};

pub use crate::analyzer::{normalize_profile_url, Analyzer, ERROR_FALLBACK_SCORE};

pub use crate::cache::{cache_key, CacheStats, ResultCache};

pub use crate::config::{DetectionConfig, DetectionPreset, ProfilemapConfig};

pub use crate::engine::{classify, confidence, finalize_score, select_key_indicators, tier_for_score};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

pub use crate::platform::{detect_platform, Platform, PlatformHint};

pub use crate::source::{ProfileAttributes, ProfileDataSource, FETCH_TIMEOUT};
