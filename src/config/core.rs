use serde::{Deserialize, Serialize};

use super::detection::DetectionConfig;

pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Root configuration structure for profilemap
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfilemapConfig {
    /// Detection heuristics configuration
    #[serde(default)]
    pub detection: Option<DetectionConfig>,

    /// Result cache configuration
    #[serde(default)]
    pub cache: Option<CacheConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ProfilemapConfig {
    /// Effective detection configuration, falling back to defaults.
    pub fn detection(&self) -> DetectionConfig {
        self.detection.clone().unwrap_or_default()
    }

    /// Effective cache capacity, falling back to the default bound.
    pub fn cache_capacity(&self) -> usize {
        self.cache
            .as_ref()
            .map(|c| c.max_entries)
            .unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached reports before FIFO eviction kicks in.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

pub(crate) fn default_max_entries() -> usize {
    DEFAULT_CACHE_CAPACITY
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_accessors() {
        let config = ProfilemapConfig::default();
        assert_eq!(config.cache_capacity(), DEFAULT_CACHE_CAPACITY);
        assert!(config.default_format().is_none());
        assert!((config.detection().base_fake_probability - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_cache_capacity() {
        let config = ProfilemapConfig {
            cache: Some(CacheConfig { max_entries: 16 }),
            ..Default::default()
        };
        assert_eq!(config.cache_capacity(), 16);
    }
}
