use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Profilemap Configuration

[detection]
base_fake_probability = 0.1
suspicious_username_patterns = [
    "^[a-z]+\\d{4,}$",
    "(free|win|promo|offer)",
    "official.*\\d+",
    "_{2,}",
]
spam_keywords = [
    "follow back",
    "free followers",
    "click the link",
    "dm for promo",
    "giveaway",
    "crypto signals",
    "earn from home",
]
known_default_image_hashes = []

[cache]
max_entries = 4096

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
