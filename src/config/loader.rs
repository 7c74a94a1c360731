use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::core::ProfilemapConfig;
use super::detection::DetectionConfig;

pub const CONFIG_FILE_NAME: &str = ".profilemap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ProfilemapConfig, String> {
    let mut config = toml::from_str::<ProfilemapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(ref detection) = config.detection {
        if let Err(e) = detection.validate() {
            eprintln!("Warning: Invalid detection settings: {e}. Using defaults.");
            config.detection = Some(DetectionConfig::default());
        }
    }

    Ok(config)
}

/// Load configuration, falling back to defaults on any problem. An explicit
/// path that cannot be read is reported; the default location is allowed to
/// be absent silently.
pub fn load_config(explicit: Option<&Path>) -> ProfilemapConfig {
    let path = explicit.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));

    let contents = match read_config_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            if explicit.is_some() || e.kind() != std::io::ErrorKind::NotFound {
                eprintln!(
                    "Warning: Failed to read config file {}: {e}. Using defaults.",
                    path.display()
                );
            }
            return ProfilemapConfig::default();
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            ProfilemapConfig::default()
        }
    }
}
