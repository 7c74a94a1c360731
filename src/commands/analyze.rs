use crate::analyzer::Analyzer;
use crate::config::{self, DetectionPreset};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::platform::PlatformHint;
use anyhow::Result;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub url: String,
    pub platform: PlatformHint,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub fake_probability: Option<f64>,
    pub preset: Option<DetectionPreset>,
    pub config_path: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(cfg: AnalyzeConfig) -> Result<()> {
    cfg.formatting.color.apply();

    let mut config = config::load_config(cfg.config_path.as_deref());

    let mut detection = config.detection();
    if let Some(preset) = cfg.preset {
        detection.apply_preset(preset);
    }
    if let Some(probability) = cfg.fake_probability {
        anyhow::ensure!(
            (0.0..=1.0).contains(&probability),
            "--fake-probability must be within [0, 1]"
        );
        detection.base_fake_probability = probability;
    }
    let format = resolve_format(cfg.format, config.default_format());
    config.detection = Some(detection);

    let analyzer = Analyzer::new(config);
    let report = match cfg.seed {
        Some(seed) => analyzer.analyze_seeded(&cfg.url, cfg.platform, seed)?,
        None => analyzer.analyze(&cfg.url, cfg.platform)?,
    };

    let mut writer = create_writer(format, cfg.output.as_deref())?;
    writer.write_report(&report)?;
    Ok(())
}

/// CLI flag wins, then the configured default, then terminal.
fn resolve_format(flag: Option<OutputFormat>, configured: Option<&str>) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }
    match configured.map(|s| s.to_lowercase()).as_deref() {
        Some("json") => OutputFormat::Json,
        Some("markdown") => OutputFormat::Markdown,
        _ => OutputFormat::Terminal,
    }
}
