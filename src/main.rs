use anyhow::Result;
use clap::Parser;
use profilemap::cli::{Cli, Commands};
use profilemap::commands::{self, AnalyzeConfig};
use profilemap::formatting::FormattingConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            url,
            platform,
            format,
            output,
            seed,
            fake_probability,
            preset,
            plain,
            config,
        } => {
            let formatting = if plain {
                FormattingConfig::plain()
            } else {
                FormattingConfig::from_env()
            };
            commands::handle_analyze(AnalyzeConfig {
                url,
                platform: platform.into(),
                format: format.map(Into::into),
                output,
                seed,
                fake_probability,
                preset: preset.map(Into::into),
                config_path: config,
                formatting,
            })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
