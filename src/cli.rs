use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DetectionPreset;
use crate::platform::PlatformHint;

#[derive(Parser, Debug)]
#[command(name = "profilemap")]
#[command(about = "Heuristic social profile authenticity analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a profile URL for authenticity risk
    Analyze {
        /// Profile URL to analyze
        url: String,

        /// Platform selection (auto-detect by default)
        #[arg(short, long, value_enum, default_value = "auto")]
        platform: PlatformArg,

        /// Output format (falls back to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible simulation outcomes
        #[arg(long)]
        seed: Option<u64>,

        /// Override the simulated fake-account base probability
        #[arg(long = "fake-probability")]
        fake_probability: Option<f64>,

        /// Detection preset (demo, realistic)
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Configuration file (defaults to .profilemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Auto,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Other,
}

impl From<PlatformArg> for PlatformHint {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Auto => PlatformHint::Auto,
            PlatformArg::Facebook => PlatformHint::Facebook,
            PlatformArg::Twitter => PlatformHint::Twitter,
            PlatformArg::Instagram => PlatformHint::Instagram,
            PlatformArg::Linkedin => PlatformHint::Linkedin,
            PlatformArg::Other => PlatformHint::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Demo,
    Realistic,
}

impl From<Preset> for DetectionPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Demo => DetectionPreset::Demo,
            Preset::Realistic => DetectionPreset::Realistic,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_arg_conversion() {
        assert_eq!(PlatformHint::from(PlatformArg::Auto), PlatformHint::Auto);
        assert_eq!(
            PlatformHint::from(PlatformArg::Twitter),
            PlatformHint::Twitter
        );
        assert_eq!(PlatformHint::from(PlatformArg::Other), PlatformHint::Other);
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_analyze_command() {
        let args = vec![
            "profilemap",
            "analyze",
            "https://twitter.com/user123",
            "--platform",
            "twitter",
            "--format",
            "json",
            "--seed",
            "7",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Analyze {
                url,
                platform,
                format,
                seed,
                ..
            } => {
                assert_eq!(url, "https://twitter.com/user123");
                assert_eq!(platform, PlatformArg::Twitter);
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(seed, Some(7));
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_analyze_defaults() {
        let cli = Cli::parse_from(vec!["profilemap", "analyze", "example.net/bob"]);

        match cli.command {
            Commands::Analyze {
                platform,
                format,
                seed,
                preset,
                plain,
                ..
            } => {
                assert_eq!(platform, PlatformArg::Auto);
                assert_eq!(format, None);
                assert_eq!(seed, None);
                assert_eq!(preset, None);
                assert!(!plain);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(vec!["profilemap", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
