//! Report rendering.
//!
//! Pure presentation: every styling decision branches on the report's score
//! thresholds and indicator severities, nothing else.

use crate::core::{ProfileReport, RiskTier, Severity};
use crate::engine::verdict;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_indicators(report)?;
        self.write_details(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_summary(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Profile Authenticity Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Profile | {} |", report.profile_url)?;
        writeln!(self.writer, "| Platform | {} |", report.platform)?;
        writeln!(self.writer, "| Verdict | {} |", report.risk_tier)?;
        writeln!(self.writer, "| Score | {}/100 |", report.score)?;
        writeln!(
            self.writer,
            "| Confidence | {}% likely genuine |",
            verdict::confidence(report.score)
        )?;
        writeln!(self.writer, "| Recommendation | {} |", report.recommendation)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_indicators(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        if !report.key_indicators.is_empty() {
            writeln!(self.writer, "## Key Indicators")?;
            writeln!(self.writer)?;
            for indicator in &report.key_indicators {
                writeln!(
                    self.writer,
                    "- **[{}]** {}",
                    indicator.severity.to_string().to_uppercase(),
                    indicator.description
                )?;
            }
            writeln!(self.writer)?;
        }

        if !report.indicators.is_empty() {
            writeln!(self.writer, "## Risk Indicators")?;
            writeln!(self.writer)?;
            for indicator in &report.indicators {
                writeln!(
                    self.writer,
                    "- [{}] {}",
                    indicator.severity.to_string().to_uppercase(),
                    indicator.description
                )?;
            }
            writeln!(self.writer)?;
        }

        if !report.positive_indicators.is_empty() {
            writeln!(self.writer, "## Positive Indicators")?;
            writeln!(self.writer)?;
            for positive in &report.positive_indicators {
                writeln!(self.writer, "- {positive}")?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }

    fn write_details(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Account Details")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Privacy: {}", report.account_privacy)?;
        writeln!(self.writer, "- Account age: {}", report.account_age)?;
        writeln!(self.writer, "- Followers/Following: {}", report.follower_ratio)?;
        writeln!(self.writer, "- Post count: {}", report.post_count)?;
        writeln!(self.writer, "- Verification: {}", report.verification_status)?;
        writeln!(self.writer, "- Name consistency: {}", report.name_consistency)?;
        writeln!(self.writer, "- Activity pattern: {}", report.activity_pattern)?;
        writeln!(self.writer, "- Image analysis: {}", report.image_authenticity)?;
        writeln!(
            self.writer,
            "- Reverse image search: {}",
            report.reverse_image_match
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_verdict(report)?;
        self.write_image_lines(report)?;
        self.write_key_indicators(report)?;
        self.write_details(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Profile Authenticity Report".bold().blue())?;
        writeln!(self.writer, "{}", "===========================".blue())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Profile:  {}", report.profile_url)?;
        writeln!(self.writer, "Platform: {}", report.platform)?;
        writeln!(self.writer, "Privacy:  {}", report.account_privacy)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_verdict(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        let verdict_text = match report.risk_tier {
            RiskTier::High => "HIGH RISK - LIKELY FAKE".red().bold(),
            RiskTier::Moderate => "MODERATE RISK - SUSPICIOUS".yellow().bold(),
            RiskTier::Low => "LOW RISK - POSSIBLY GENUINE".green().bold(),
            RiskTier::VeryLow => "VERY LOW RISK - LIKELY GENUINE".blue().bold(),
            RiskTier::Error => "ANALYSIS ERROR".magenta().bold(),
            RiskTier::Unknown => "UNKNOWN".normal(),
        };
        writeln!(self.writer, "VERDICT: {verdict_text}")?;

        let score_text = format!("{}/100", report.score);
        let score_colored = match report.score {
            s if s >= verdict::HIGH_RISK_MIN => score_text.red(),
            s if s >= verdict::MODERATE_RISK_MIN => score_text.yellow(),
            s if s >= verdict::LOW_RISK_MIN => score_text.green(),
            _ => score_text.blue(),
        };
        writeln!(self.writer, "Authenticity Score: {score_colored}")?;

        let confidence = verdict::confidence(report.score);
        let confidence_text = format!("{confidence}% likely genuine");
        let confidence_colored = if confidence > 75 {
            confidence_text.green()
        } else if confidence > 50 {
            confidence_text.yellow()
        } else {
            confidence_text.red()
        };
        writeln!(self.writer, "Confidence: {confidence_colored}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_image_lines(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        if report.image_authenticity != "Not analyzed" {
            writeln!(self.writer, "Profile Picture: {}", report.image_authenticity)?;
        }
        if report.reverse_image_match != "Not performed" {
            writeln!(self.writer, "Image Search: {}", report.reverse_image_match)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_key_indicators(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        if report.key_indicators.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", "Key Indicators:".bold())?;
        for indicator in &report.key_indicators {
            let line = format!("  - {}", indicator.description);
            let styled = match indicator.severity {
                Severity::High => line.red(),
                Severity::Medium => line.yellow(),
                Severity::Low => line.normal(),
            };
            writeln!(self.writer, "{styled}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Recommendation: {}", report.recommendation)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_details(&mut self, report: &ProfileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Account Details:".bold())?;
        writeln!(self.writer, "  Account age: {}", report.account_age)?;
        writeln!(
            self.writer,
            "  Followers/Following: {}",
            report.follower_ratio
        )?;
        writeln!(self.writer, "  Post count: {}", report.post_count)?;
        writeln!(self.writer, "  Verification: {}", report.verification_status)?;
        writeln!(self.writer, "  Name consistency: {}", report.name_consistency)?;
        writeln!(self.writer, "  Activity pattern: {}", report.activity_pattern)?;
        writeln!(self.writer)?;

        if !report.indicators.is_empty() {
            writeln!(self.writer, "{}", "Risk Indicators:".bold())?;
            for indicator in &report.indicators {
                let tag = indicator.severity.to_string().to_uppercase();
                let line = format!("  [{tag}] {}", indicator.description);
                let styled = match indicator.severity {
                    Severity::High => line.red(),
                    Severity::Medium => line.yellow(),
                    Severity::Low => line.normal(),
                };
                writeln!(self.writer, "{styled}")?;
            }
            writeln!(self.writer)?;
        }

        if !report.positive_indicators.is_empty() {
            writeln!(self.writer, "{}", "Positive Indicators:".bold())?;
            for positive in &report.positive_indicators {
                writeln!(self.writer, "{}", format!("  + {positive}").green())?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Indicator;
    use crate::platform::Platform;

    fn sample_report() -> ProfileReport {
        let mut report = ProfileReport::new("https://twitter.com/user123", Platform::Twitter);
        report.score = 72;
        report.indicators.push_back(Indicator {
            description: "Very few tweets (1-10 total)".to_string(),
            severity: Severity::High,
        });
        report.positive_indicators.push_back("Balanced follower ratio".to_string());
        crate::engine::verdict::classify(&mut report);
        report
    }

    #[test]
    fn test_json_writer_output_parses_back() {
        let report = sample_report();
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(&report).unwrap();
        let parsed: ProfileReport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_markdown_writer_sections() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_report(&sample_report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Profile Authenticity Report"));
        assert!(text.contains("| Score | 72/100 |"));
        assert!(text.contains("## Key Indicators"));
        assert!(text.contains("**[HIGH]** Very few tweets"));
        assert!(text.contains("## Positive Indicators"));
    }

    #[test]
    fn test_terminal_writer_plain_output() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf).write_report(&sample_report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("VERDICT: HIGH RISK - LIKELY FAKE"));
        assert!(text.contains("Authenticity Score: 72/100"));
        assert!(text.contains("Confidence: 28% likely genuine"));
        assert!(text.contains("[HIGH] Very few tweets (1-10 total)"));
        colored::control::unset_override();
    }
}
