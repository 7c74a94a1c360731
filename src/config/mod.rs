// Sub-modules
mod core;
mod detection;
mod loader;

// Re-export core configuration types
pub use core::{CacheConfig, OutputConfig, ProfilemapConfig, DEFAULT_CACHE_CAPACITY};

// Re-export detection types
pub use detection::{DetectionConfig, DetectionPreset};

// Re-export loader functions
pub use loader::{load_config, parse_and_validate_config, CONFIG_FILE_NAME};
